use chrono::{Local, NaiveDate};

use crate::engine;
use crate::error::OverlapError;
use crate::window::WorkWindow;

/// Computation context.
///
/// Holds the calendar date used to anchor each local-hour → instant
/// conversion. The date only matters insofar as UTC offsets differ by date
/// (DST); system policy is "today", so two runs on either side of a DST
/// transition may legitimately disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Reference date used to resolve each zone's UTC offset.
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            // Mid-winter, far from any DST transition, for determinism.
            Self { reference_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap() }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// Classification of a single local hour in one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourClassification {
    /// Local hour of day, 0–23.
    pub hour: u32,
    /// True if the hour falls inside this zone's working window.
    pub is_working_hour: bool,
    /// True if any part of this hour's instant interval falls inside both
    /// zones' working windows.
    pub is_overlap: bool,
    /// The corresponding civil hour in the *other* zone, zero-padded to two
    /// digits ("19"); display only. Empty when the local hour does not exist
    /// on the reference date (DST gap).
    pub mapped_hour_label: String,
}

/// One zone's view of the day: 24 slots indexed by that zone's local hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRow {
    /// IANA identifier of the zone this row belongs to.
    pub zone: String,
    /// Exactly 24 entries, `hours[h].hour == h`.
    pub hours: Vec<HourClassification>,
}

impl ZoneRow {
    /// Number of hours classified as overlapping.
    pub fn overlap_count(&self) -> usize {
        self.hours.iter().filter(|slot| slot.is_overlap).count()
    }
}

/// Result from [`compute_overlap`] and [`compute_overlap_today`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapResult {
    /// The first zone's row, indexed by its own local hours, mapped into the
    /// second zone.
    pub row_a: ZoneRow,
    /// The second zone's row, indexed by its own local hours, mapped into
    /// the first zone.
    pub row_b: ZoneRow,
}

/// Compute the working-hour overlap between two zones on the context's
/// reference date.
///
/// Pure: identical inputs (including the reference date) always yield
/// identical results. Fails with [`OverlapError::InvalidTimezone`] if either
/// identifier does not resolve, or [`OverlapError::InvalidWorkWindow`] if
/// the window is malformed; malformed input is never silently corrected.
///
/// # Example
/// ```
/// use tzoverlap::{Context, WorkWindow, compute_overlap};
///
/// let ctx = Context::default();
/// let res = compute_overlap("America/New_York", "Europe/London", WorkWindow::default(), &ctx).unwrap();
/// assert_eq!(res.row_a.hours.len(), 24);
/// ```
pub fn compute_overlap(
    zone_a: &str,
    zone_b: &str,
    window: WorkWindow,
    ctx: &Context,
) -> Result<OverlapResult, OverlapError> {
    window.check()?;
    let a = engine::resolve_zone(zone_a)?;
    let b = engine::resolve_zone(zone_b)?;

    Ok(OverlapResult {
        row_a: engine::classify_row(a, b, window, ctx.reference_date),
        row_b: engine::classify_row(b, a, window, ctx.reference_date),
    })
}

/// [`compute_overlap`] anchored on today's date (the system policy).
pub fn compute_overlap_today(
    zone_a: &str,
    zone_b: &str,
    window: WorkWindow,
) -> Result<OverlapResult, OverlapError> {
    compute_overlap(zone_a, zone_b, window, &Context::default())
}
