//! Tests for overlap detection against appointments and breaks.

use chrono::NaiveDate;
use slot_engine::{
    check_break_time, check_time, check_time_all, ConflictDetector, ExistingBooking, InMemoryStore,
    SchedulerError, TimeRange,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(start, end)
}

// ── Overlap predicate ───────────────────────────────────────────────────────

#[test]
fn back_to_back_is_not_a_conflict() {
    let candidate = range(100, 160);
    assert!(!range(60, 100).overlaps(&candidate));
    assert!(!range(160, 200).overlaps(&candidate));
}

#[test]
fn straddling_the_start_is_a_conflict() {
    assert!(range(99, 101).overlaps(&range(100, 160)));
}

#[test]
fn straddling_the_end_is_a_conflict() {
    assert!(range(150, 200).overlaps(&range(100, 160)));
}

#[test]
fn existing_covering_candidate_is_a_conflict() {
    assert!(range(60, 240).overlaps(&range(100, 160)));
}

#[test]
fn candidate_covering_existing_is_a_conflict() {
    assert!(range(110, 120).overlaps(&range(100, 160)));
}

#[test]
fn identical_ranges_conflict() {
    assert!(range(600, 660).overlaps(&range(600, 660)));
}

#[test]
fn disjoint_ranges_do_not_conflict() {
    assert!(!range(0, 50).overlaps(&range(100, 160)));
    assert!(!range(200, 260).overlaps(&range(100, 160)));
}

// ── TimeRange parsing ───────────────────────────────────────────────────────

#[test]
fn range_string_form_round_trips() {
    let r: TimeRange = "540-600".parse().unwrap();
    assert_eq!(r, range(540, 600));
    assert_eq!(r.to_string(), "540-600");
}

#[test]
fn malformed_range_strings_are_rejected() {
    for raw in [
        "", "540", "540-", "a-600", "540-600-660", "-60", "660-600", "600-600", "5000-6000",
        "1380-1441",
    ] {
        assert!(
            matches!(
                raw.parse::<TimeRange>().unwrap_err(),
                SchedulerError::MalformedRange(_)
            ),
            "expected MalformedRange for {:?}",
            raw
        );
    }
}

// ── check_time ──────────────────────────────────────────────────────────────

#[test]
fn no_records_means_no_conflict() {
    let store = InMemoryStore::new();
    assert!(!check_time(&store, 1, date(2026, 3, 16), &range(600, 660)));
}

#[test]
fn appointment_blocks_overlapping_candidate() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store.add_appointment(1, 10, day, range(600, 660));

    assert!(check_time(&store, 1, day, &range(630, 690)));
    assert!(!check_time(&store, 1, day, &range(660, 720)));
}

#[test]
fn break_blocks_exactly_like_an_appointment() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store.add_break(1, 20, day, range(720, 780));

    assert!(check_time(&store, 1, day, &range(720, 780)));
    assert!(!check_time(&store, 1, day, &range(780, 840)));
}

#[test]
fn bookings_on_other_dates_are_ignored() {
    let mut store = InMemoryStore::new();
    store.add_appointment(1, 10, date(2026, 3, 17), range(600, 660));

    assert!(!check_time(&store, 1, date(2026, 3, 16), &range(600, 660)));
}

#[test]
fn bookings_of_other_businesses_are_ignored() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store.add_appointment(2, 10, day, range(600, 660));

    assert!(!check_time(&store, 1, day, &range(600, 660)));
}

#[test]
fn range_may_end_at_midnight() {
    assert_eq!("1380-1440".parse::<TimeRange>().unwrap(), range(1380, 1440));
}

#[test]
fn malformed_stored_range_is_skipped_not_fatal() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store
        .add_raw_appointment(1, 10, day, "ten-eleven")
        .add_appointment(1, 11, day, range(720, 780));

    // The bad record is ignored; the good one still blocks.
    assert!(!check_time(&store, 1, day, &range(600, 660)));
    assert!(check_time(&store, 1, day, &range(720, 780)));
}

#[test]
fn inverted_or_out_of_day_stored_ranges_are_skipped() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store
        .add_raw_appointment(1, 10, day, "660-600")
        .add_raw_appointment(1, 11, day, "5000-6000")
        .add_appointment(1, 12, day, range(720, 780));

    // An inverted record would otherwise swallow candidates inside it.
    assert!(!check_time(&store, 1, day, &range(620, 640)));
    assert!(!check_time(&store, 1, day, &range(600, 660)));
    assert!(check_time(&store, 1, day, &range(750, 760)));

    let detector = ConflictDetector::load(&store, &store, 1, day);
    assert!(!detector.conflicts(&range(620, 640)));
}

// ── check_break_time ────────────────────────────────────────────────────────

#[test]
fn break_check_returns_matching_ids() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store
        .add_break(1, 20, day, range(720, 780))
        .add_break(1, 21, day, range(750, 800))
        .add_break(1, 22, day, range(900, 930));

    assert_eq!(
        check_break_time(&store, 1, day, &range(740, 760)),
        Some(vec![20, 21])
    );
}

#[test]
fn break_check_ignores_appointments() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store.add_appointment(1, 10, day, range(600, 660));

    assert_eq!(check_break_time(&store, 1, day, &range(600, 660)), None);
}

#[test]
fn break_check_is_none_when_free() {
    let store = InMemoryStore::new();
    assert_eq!(
        check_break_time(&store, 1, date(2026, 3, 16), &range(600, 660)),
        None
    );
}

// ── check_time_all ──────────────────────────────────────────────────────────

#[test]
fn all_resources_free_is_available() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store
        .add_appointment(1, 10, day, range(0, 60))
        .add_appointment(2, 11, day, range(120, 180));

    assert!(check_time_all(&store, &[1, 2], day, &range(60, 120)));
}

#[test]
fn one_busy_resource_makes_set_unavailable() {
    let day = date(2026, 3, 16);
    let mut store = InMemoryStore::new();
    store.add_appointment(2, 11, day, range(90, 150));

    assert!(!check_time(&store, 1, day, &range(60, 120)));
    assert!(check_time(&store, 2, day, &range(60, 120)));
    assert!(!check_time_all(&store, &[1, 2], day, &range(60, 120)));
}

// ── ConflictDetector ────────────────────────────────────────────────────────

#[test]
fn detector_from_parts_checks_both_lists() {
    let detector = ConflictDetector::from_parts(
        vec![ExistingBooking {
            id: 1,
            range: range(600, 660),
        }],
        vec![ExistingBooking {
            id: 2,
            range: range(720, 780),
        }],
    );

    assert!(detector.conflicts(&range(600, 630)));
    assert!(detector.conflicts(&range(750, 810)));
    assert!(!detector.conflicts(&range(660, 720)));
    assert_eq!(detector.conflicting_breaks(&range(600, 630)), None);
    assert_eq!(detector.conflicting_breaks(&range(750, 810)), Some(vec![2]));
}

#[test]
fn default_detector_is_empty() {
    let detector = ConflictDetector::default();
    assert!(detector.is_empty());
    assert!(!detector.conflicts(&range(0, 1439)));
}
