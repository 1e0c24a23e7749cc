use std::collections::{HashMap, HashSet};

use serde::Serialize;
use time::Time;

use crate::models::{event::TimeBlock, response::ParticipantResponse};
use crate::slots;

/// One observed slot with its tally. `participants` is in response
/// iteration order.
#[derive(Debug, Clone, Serialize)]
pub struct SlotTally {
    pub slot: String,
    pub count: usize,
    pub percent: f64,
    pub participants: Vec<String>,
}

/// Observed slots for one date, chronological within the date.
#[derive(Debug, Clone, Serialize)]
pub struct DayBreakdown {
    pub date: String,
    pub slots: Vec<SlotTally>,
}

/// One selectable cell of the grid. The axis is shared across dates, so a
/// cell can be invalid on a date whose blocks are narrower than the axis.
#[derive(Debug, Clone, Serialize)]
pub struct GridSlot {
    pub slot: String,
    pub valid: bool,
}

/// The grid column for one offered date.
#[derive(Debug, Clone, Serialize)]
pub struct DayColumn {
    pub date: String,
    pub slots: Vec<GridSlot>,
}

/// The full organizer view: a pure function of (time blocks, responses).
/// Recomputed fresh on every read; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilitySummary {
    pub total_responses: usize,
    pub valid_dates: Vec<String>,
    pub time_axis: Vec<String>,
    /// Every observed slot, in first-occurrence order across responses.
    pub slots: Vec<SlotTally>,
    /// First slot with the strictly greatest count, in observation order.
    /// Ties break by first occurrence, not by clock time.
    pub best_slot: Option<String>,
    pub days: Vec<DayBreakdown>,
    /// The selectable grid: every offered date crossed with the shared
    /// axis, each cell flagged valid or not.
    pub grid: Vec<DayColumn>,
}

pub fn summarize(
    blocks: &[TimeBlock],
    responses: &[ParticipantResponse],
    interval_minutes: u16,
) -> AvailabilitySummary {
    let mut tallies: Vec<SlotTally> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for response in responses {
        // availability is a set; a duplicate within one submission still
        // contributes a single count for that invite.
        let mut seen: HashSet<&str> = HashSet::new();
        for slot in &response.availability {
            if !seen.insert(slot.as_str()) {
                continue;
            }
            let i = *index.entry(slot.clone()).or_insert_with(|| {
                tallies.push(SlotTally {
                    slot: slot.clone(),
                    count: 0,
                    percent: 0.0,
                    participants: Vec::new(),
                });
                tallies.len() - 1
            });
            tallies[i].count += 1;
            tallies[i].participants.push(response.name.clone());
        }
    }

    let total_responses = responses.len();
    for tally in &mut tallies {
        tally.percent = if total_responses == 0 {
            0.0
        } else {
            tally.count as f64 / total_responses as f64 * 100.0
        };
    }

    let mut best: Option<&SlotTally> = None;
    for tally in &tallies {
        if best.map_or(true, |b| tally.count > b.count) {
            best = Some(tally);
        }
    }
    let best_slot = best.map(|t| t.slot.clone());

    let dates = slots::valid_dates(blocks);
    let axis = slots::time_axis(blocks, interval_minutes);

    let grid = dates
        .iter()
        .map(|&date| DayColumn {
            date: slots::date_label(date),
            slots: axis
                .iter()
                .map(|&t| GridSlot {
                    slot: slots::slot_id(date, t),
                    valid: slots::is_slot_valid(blocks, date, t),
                })
                .collect(),
        })
        .collect();

    AvailabilitySummary {
        total_responses,
        valid_dates: dates.into_iter().map(slots::date_label).collect(),
        time_axis: axis.into_iter().map(slots::clock_label).collect(),
        days: group_by_date(&tallies),
        slots: tallies,
        best_slot,
        grid,
    }
}

/// Partitions observed slots by the date portion of the identifier, dates
/// ascending, chronological within each date. A time component that fails
/// to parse sorts as midnight rather than aborting the whole view; one bad
/// identifier must not hide everyone else's data.
fn group_by_date(tallies: &[SlotTally]) -> Vec<DayBreakdown> {
    let mut dates: Vec<&str> = tallies
        .iter()
        .map(|t| slots::slot_date_portion(&t.slot))
        .collect();
    dates.sort_unstable();
    dates.dedup();

    dates
        .into_iter()
        .map(|date| {
            let mut slots_for_date: Vec<SlotTally> = tallies
                .iter()
                .filter(|t| slots::slot_date_portion(&t.slot) == date)
                .cloned()
                .collect();
            slots_for_date.sort_by_key(|t| time_of(&t.slot));
            DayBreakdown {
                date: date.to_string(),
                slots: slots_for_date,
            }
        })
        .collect()
}

fn time_of(slot: &str) -> Time {
    slots::parse_slot_id(slot)
        .map(|(_, t)| t)
        .unwrap_or(Time::MIDNIGHT)
}
