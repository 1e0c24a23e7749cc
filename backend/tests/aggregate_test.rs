use huddle_backend::aggregate;
use huddle_backend::models::{event::TimeBlock, response::ParticipantResponse};
use time::macros::{date, time};
use time::OffsetDateTime;
use uuid::Uuid;

fn response(name: &str, availability: &[&str]) -> ParticipantResponse {
    ParticipantResponse {
        invite_id: Uuid::new_v4(),
        name: name.to_string(),
        availability: availability.iter().map(|s| s.to_string()).collect(),
        updated_at: OffsetDateTime::now_utc(),
    }
}

fn scenario_blocks() -> Vec<TimeBlock> {
    vec![TimeBlock {
        date: date!(2025 - 01 - 10),
        start_time: time!(9:00),
        end_time: time!(11:00),
    }]
}

#[test]
fn counts_follow_distinct_responses_per_slot() {
    let blocks = scenario_blocks();
    let responses = vec![
        response("A", &["2025-01-10 09:00 AM"]),
        response("B", &["2025-01-10 09:00 AM", "2025-01-10 10:00 AM"]),
    ];

    let summary = aggregate::summarize(&blocks, &responses, 30);

    assert_eq!(summary.total_responses, 2);
    assert_eq!(summary.slots.len(), 2);
    assert_eq!(summary.slots[0].slot, "2025-01-10 09:00 AM");
    assert_eq!(summary.slots[0].count, 2);
    assert_eq!(summary.slots[0].participants, ["A", "B"]);
    assert_eq!(summary.slots[1].slot, "2025-01-10 10:00 AM");
    assert_eq!(summary.slots[1].count, 1);
    assert_eq!(summary.slots[1].participants, ["B"]);
    assert_eq!(summary.best_slot.as_deref(), Some("2025-01-10 09:00 AM"));
}

/// Ties break by first observation across responses, deliberately not by
/// clock time: the later-in-the-day slot wins here because it was seen
/// first.
#[test]
fn tie_breaks_by_first_observed_not_by_time() {
    let blocks = scenario_blocks();
    let responses = vec![
        response("A", &["2025-01-10 10:00 AM"]),
        response("B", &["2025-01-10 09:00 AM"]),
    ];

    let summary = aggregate::summarize(&blocks, &responses, 30);

    assert_eq!(summary.slots[0].count, 1);
    assert_eq!(summary.slots[1].count, 1);
    assert_eq!(summary.best_slot.as_deref(), Some("2025-01-10 10:00 AM"));
}

#[test]
fn duplicate_slot_within_one_response_counts_once() {
    let blocks = scenario_blocks();
    let responses = vec![response(
        "A",
        &["2025-01-10 09:00 AM", "2025-01-10 09:00 AM"],
    )];

    let summary = aggregate::summarize(&blocks, &responses, 30);

    assert_eq!(summary.slots.len(), 1);
    assert_eq!(summary.slots[0].count, 1);
    assert_eq!(summary.slots[0].participants, ["A"]);
}

#[test]
fn zero_responses_guards_percentages() {
    let blocks = scenario_blocks();

    let summary = aggregate::summarize(&blocks, &[], 30);

    assert_eq!(summary.total_responses, 0);
    assert!(summary.slots.is_empty());
    assert!(summary.best_slot.is_none());
    assert!(summary.days.is_empty());
    // The axis and dates still derive from the blocks.
    assert_eq!(summary.valid_dates, ["2025-01-10"]);
    assert_eq!(
        summary.time_axis,
        ["09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM"]
    );
}

#[test]
fn percentages_divide_by_total_responses() {
    let blocks = scenario_blocks();
    let responses = vec![
        response("A", &["2025-01-10 09:00 AM"]),
        response("B", &["2025-01-10 09:00 AM"]),
        response("C", &["2025-01-10 10:00 AM"]),
        response("D", &[]),
    ];

    let summary = aggregate::summarize(&blocks, &responses, 30);

    assert_eq!(summary.total_responses, 4);
    assert_eq!(summary.slots[0].percent, 50.0);
    assert_eq!(summary.slots[1].percent, 25.0);
}

/// Same inputs, same output: the summary is a pure function of stored
/// state, safe to recompute on every read.
#[test]
fn aggregation_is_idempotent() {
    let blocks = scenario_blocks();
    let responses = vec![
        response("A", &["2025-01-10 09:00 AM", "2025-01-10 10:30 AM"]),
        response("B", &["2025-01-10 10:30 AM"]),
    ];

    let first = serde_json::to_value(aggregate::summarize(&blocks, &responses, 30)).unwrap();
    let second = serde_json::to_value(aggregate::summarize(&blocks, &responses, 30)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn days_group_by_date_ascending_and_sort_chronologically_within() {
    let blocks = vec![
        TimeBlock {
            date: date!(2025 - 01 - 10),
            start_time: time!(9:00),
            end_time: time!(17:00),
        },
        TimeBlock {
            date: date!(2025 - 01 - 11),
            start_time: time!(9:00),
            end_time: time!(17:00),
        },
    ];
    // Observed out of order on purpose.
    let responses = vec![response(
        "A",
        &[
            "2025-01-11 09:00 AM",
            "2025-01-10 02:00 PM",
            "2025-01-10 09:30 AM",
        ],
    )];

    let summary = aggregate::summarize(&blocks, &responses, 30);

    assert_eq!(summary.days.len(), 2);
    assert_eq!(summary.days[0].date, "2025-01-10");
    assert_eq!(summary.days[0].slots[0].slot, "2025-01-10 09:30 AM");
    assert_eq!(summary.days[0].slots[1].slot, "2025-01-10 02:00 PM");
    assert_eq!(summary.days[1].date, "2025-01-11");
    assert_eq!(summary.days[1].slots.len(), 1);
}

/// The grid reuses one axis across every date; a date whose block is
/// narrower than the axis gets invalid cells, not a shorter column.
#[test]
fn grid_flags_axis_slots_outside_a_dates_blocks_as_invalid() {
    let blocks = vec![
        TimeBlock {
            date: date!(2025 - 01 - 10),
            start_time: time!(9:00),
            end_time: time!(11:00),
        },
        TimeBlock {
            date: date!(2025 - 01 - 11),
            start_time: time!(10:00),
            end_time: time!(12:00),
        },
    ];

    let summary = aggregate::summarize(&blocks, &[], 30);

    // Axis spans 09:00-12:00; both columns carry all six cells.
    assert_eq!(summary.time_axis.len(), 6);
    assert_eq!(summary.grid.len(), 2);
    for column in &summary.grid {
        assert_eq!(column.slots.len(), 6);
    }

    let jan10 = &summary.grid[0];
    assert_eq!(jan10.date, "2025-01-10");
    assert_eq!(jan10.slots[0].slot, "2025-01-10 09:00 AM");
    assert!(jan10.slots[0].valid);
    // 11:00 is this date's block end; half-open, so invalid.
    assert!(!jan10.slots[4].valid);

    let jan11 = &summary.grid[1];
    assert!(!jan11.slots[0].valid); // 09:00 before this date's block
    assert!(jan11.slots[2].valid); // 10:00
    assert!(jan11.slots[5].valid); // 11:30
}

/// One malformed identifier in stored state must not hide everyone
/// else's data: it sorts as midnight instead of failing the view.
#[test]
fn malformed_stored_identifier_degrades_gracefully() {
    let blocks = scenario_blocks();
    let responses = vec![
        response("A", &["2025-01-10 garbled", "2025-01-10 09:00 AM"]),
        response("B", &["2025-01-10 09:00 AM"]),
    ];

    let summary = aggregate::summarize(&blocks, &responses, 30);

    assert_eq!(summary.slots.len(), 2);
    assert_eq!(summary.best_slot.as_deref(), Some("2025-01-10 09:00 AM"));

    let day = &summary.days[0];
    assert_eq!(day.slots.len(), 2);
    // Unparseable time falls back to midnight, so it sorts first.
    assert_eq!(day.slots[0].slot, "2025-01-10 garbled");
    assert_eq!(day.slots[1].slot, "2025-01-10 09:00 AM");
}
