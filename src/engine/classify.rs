use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::api::{HourClassification, ZoneRow};
use crate::engine::convert::mapped_hour;
use crate::window::WorkWindow;

/// Classify all 24 local hours of `zone` against `other`'s window.
///
/// The row is indexed by `zone`'s own local hour; each slot re-derives the
/// corresponding civil time in `other` by an explicit conversion through the
/// instant, never by offset arithmetic.
///
/// A working slot counts as overlapping when any part of its hour-long
/// instant interval falls inside `other`'s working window. For whole-hour
/// offsets this is exactly the floor-hour test. For sub-hour offsets the
/// slot straddles two civil hours in `other` (17:30–18:30 touches both 17
/// and 18), and either being inside the window qualifies; testing only the
/// floor hour would classify the two zones' views of the same instants
/// asymmetrically. The displayed label still floors.
///
/// A slot whose local hour does not exist on `date` (DST gap) degrades
/// alone: empty label, no overlap, the remaining 23 slots are unaffected.
pub fn classify_row(zone: Tz, other: Tz, window: WorkWindow, date: NaiveDate) -> ZoneRow {
    let hours = (0..24)
        .map(|hour| {
            let is_working_hour = window.contains(hour);
            match mapped_hour(zone, other, date, hour) {
                Some(mapped) => {
                    let other_working = window.contains(mapped.hour)
                        || (mapped.minute > 0 && window.contains((mapped.hour + 1) % 24));
                    HourClassification {
                        hour,
                        is_working_hour,
                        is_overlap: is_working_hour && other_working,
                        mapped_hour_label: format!("{:02}", mapped.hour),
                    }
                }
                None => HourClassification {
                    hour,
                    is_working_hour,
                    is_overlap: false,
                    mapped_hour_label: String::new(),
                },
            }
        })
        .collect();

    ZoneRow { zone: zone.name().to_string(), hours }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::convert::resolve_zone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn row_always_has_24_slots_in_hour_order() {
        let ny = resolve_zone("America/New_York").unwrap();
        let tokyo = resolve_zone("Asia/Tokyo").unwrap();
        let row = classify_row(ny, tokyo, WorkWindow::default(), date(2026, 1, 15));

        assert_eq!(row.zone, "America/New_York");
        assert_eq!(row.hours.len(), 24);
        for (idx, slot) in row.hours.iter().enumerate() {
            assert_eq!(slot.hour, idx as u32);
        }
    }

    #[test]
    fn overlap_implies_working_hour() {
        let london = resolve_zone("Europe/London").unwrap();
        let chicago = resolve_zone("America/Chicago").unwrap();
        let row = classify_row(london, chicago, WorkWindow::default(), date(2026, 1, 15));

        for slot in &row.hours {
            assert!(!slot.is_overlap || slot.is_working_hour);
        }
    }

    #[test]
    fn labels_are_two_digit_civil_hours() {
        // Winter: New York 09:00 EST is 19:30 in Kolkata, floored to "19".
        let ny = resolve_zone("America/New_York").unwrap();
        let kolkata = resolve_zone("Asia/Kolkata").unwrap();
        let row = classify_row(ny, kolkata, WorkWindow::default(), date(2026, 1, 15));

        assert_eq!(row.hours[9].mapped_hour_label, "19");
        assert_eq!(row.hours[0].mapped_hour_label, "10");
        for slot in &row.hours {
            let label: u32 = slot.mapped_hour_label.parse().unwrap();
            assert!(label < 24);
        }
    }

    #[test]
    fn partially_working_slot_counts_as_overlap() {
        // Sydney 14:00 AEDT is 08:30 in Kolkata; the second half of that
        // slot (09:00–09:30) is inside Kolkata's window, so it overlaps
        // even though the floor hour 8 is not working.
        let sydney = resolve_zone("Australia/Sydney").unwrap();
        let kolkata = resolve_zone("Asia/Kolkata").unwrap();
        let row = classify_row(sydney, kolkata, WorkWindow::default(), date(2026, 1, 15));

        assert_eq!(row.hours[14].mapped_hour_label, "08");
        assert!(row.hours[14].is_overlap);
        // 13:00 maps to 07:30–08:30, entirely outside the window.
        assert!(!row.hours[13].is_overlap);
    }

    #[test]
    fn dst_gap_degrades_only_the_missing_slot() {
        // 02:00 does not exist in New York on 2026-03-08.
        let ny = resolve_zone("America/New_York").unwrap();
        let chicago = resolve_zone("America/Chicago").unwrap();
        let row = classify_row(ny, chicago, WorkWindow::default(), date(2026, 3, 8));

        assert!(row.hours[2].mapped_hour_label.is_empty());
        assert!(!row.hours[2].is_overlap);
        for (idx, slot) in row.hours.iter().enumerate() {
            if idx != 2 {
                assert!(!slot.mapped_hour_label.is_empty());
            }
        }
    }
}
