use std::str::FromStr;

use chrono::{NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::OverlapError;

/// Resolve an IANA identifier against the embedded timezone database.
pub fn resolve_zone(identifier: &str) -> Result<Tz, OverlapError> {
    Tz::from_str(identifier).map_err(|_| OverlapError::InvalidTimezone(identifier.to_string()))
}

/// The other zone's civil time at a whole local hour.
///
/// `hour` is the floor civil hour; `minute` is nonzero only for zones whose
/// offsets differ by a sub-hour amount (half/quarter-hour offset zones), in
/// which case the local hour slot starts `minute` minutes into `hour` and
/// runs `minute` minutes into the next civil hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedHour {
    pub hour: u32,
    pub minute: u32,
}

/// Civil time in `other` at the instant "`date` at `hour`:00 local in `zone`".
///
/// Returns `None` when the local hour does not exist in `zone` on that date
/// (DST spring-forward gap); an ambiguous local hour (fall-back repeat)
/// resolves to the earlier of the two instants.
pub fn mapped_hour(zone: Tz, other: Tz, date: NaiveDate, hour: u32) -> Option<MappedHour> {
    let local = date.and_hms_opt(hour, 0, 0)?;
    let instant = zone.from_local_datetime(&local).earliest()?;
    let mapped = instant.with_timezone(&other);
    Some(MappedHour { hour: mapped.hour(), minute: mapped.minute() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolve_zone_accepts_iana_identifiers() {
        assert_eq!(resolve_zone("America/New_York").unwrap(), chrono_tz::America::New_York);
        assert_eq!(resolve_zone("UTC").unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn resolve_zone_rejects_unknown_identifiers() {
        let err = resolve_zone("Mars/Crater").unwrap_err();
        assert_eq!(err, OverlapError::InvalidTimezone("Mars/Crater".to_string()));
    }

    #[test]
    fn same_zone_maps_to_identity() {
        let tz = resolve_zone("Europe/Berlin").unwrap();
        for hour in 0..24 {
            assert_eq!(mapped_hour(tz, tz, date(2026, 1, 15), hour), Some(MappedHour { hour, minute: 0 }));
        }
    }

    #[test]
    fn half_hour_offset_keeps_the_sub_hour_residue() {
        // 12:00 UTC is 17:30 in Kolkata (+05:30); the floor hour is 17.
        let utc = resolve_zone("UTC").unwrap();
        let kolkata = resolve_zone("Asia/Kolkata").unwrap();
        assert_eq!(
            mapped_hour(utc, kolkata, date(2026, 1, 15), 12),
            Some(MappedHour { hour: 17, minute: 30 })
        );
    }

    #[test]
    fn whole_hour_offset_has_no_residue() {
        let utc = resolve_zone("UTC").unwrap();
        let ny = resolve_zone("America/New_York").unwrap();
        assert_eq!(mapped_hour(utc, ny, date(2026, 1, 15), 12), Some(MappedHour { hour: 7, minute: 0 }));
    }

    #[test]
    fn mapping_can_cross_the_date_line() {
        // 20:00 UTC on the 15th is 09:00 on the 16th in Auckland (NZDT, +13).
        let utc = resolve_zone("UTC").unwrap();
        let auckland = resolve_zone("Pacific/Auckland").unwrap();
        assert_eq!(
            mapped_hour(utc, auckland, date(2026, 1, 15), 20),
            Some(MappedHour { hour: 9, minute: 0 })
        );
    }

    #[test]
    fn nonexistent_local_hour_yields_none() {
        // US spring-forward 2026-03-08: 02:00 does not exist in New York.
        let ny = resolve_zone("America/New_York").unwrap();
        let utc = resolve_zone("UTC").unwrap();
        assert_eq!(mapped_hour(ny, utc, date(2026, 3, 8), 2), None);
        assert!(mapped_hour(ny, utc, date(2026, 3, 8), 3).is_some());
    }

    #[test]
    fn ambiguous_local_hour_resolves_to_earliest() {
        // US fall-back 2026-11-01: 01:00 occurs twice in New York; the
        // earlier instant is 01:00 EDT = 05:00 UTC.
        let ny = resolve_zone("America/New_York").unwrap();
        let utc = resolve_zone("UTC").unwrap();
        assert_eq!(
            mapped_hour(ny, utc, date(2026, 11, 1), 1),
            Some(MappedHour { hour: 5, minute: 0 })
        );
    }
}
