use time::{Date, Month, Time};

use crate::models::event::TimeBlock;

/// Default grid granularity. Overridable via SLOT_INTERVAL_MINUTES.
pub const DEFAULT_SLOT_INTERVAL_MINUTES: u16 = 30;

fn minutes_of(t: Time) -> u16 {
    t.hour() as u16 * 60 + t.minute() as u16
}

fn time_from_minutes(m: u16) -> Time {
    let m = m.min(24 * 60 - 1);
    Time::from_hms((m / 60) as u8, (m % 60) as u8, 0).unwrap_or(Time::MIDNIGHT)
}

/// Formats a clock time as a zero-padded 12-hour label, e.g. "09:30 AM".
pub fn clock_label(t: Time) -> String {
    let (hour, period) = match t.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{:02}:{:02} {}", hour, t.minute(), period)
}

pub fn date_label(d: Date) -> String {
    format!("{:04}-{:02}-{:02}", d.year(), u8::from(d.month()), d.day())
}

/// Parses the "hh:mm AM/PM" clock label back to a Time.
pub fn parse_clock(s: &str) -> Option<Time> {
    let (hm, period) = s.split_once(' ')?;
    let (hour_str, minute_str) = hm.split_once(':')?;
    let hour: u8 = hour_str.parse().ok()?;
    let minute: u8 = minute_str.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour24 = match (hour, period) {
        (12, "AM") => 0,
        (h, "AM") => h,
        (12, "PM") => 12,
        (h, "PM") => h + 12,
        _ => return None,
    };
    Time::from_hms(hour24, minute, 0).ok()
}

/// Parses a "YYYY-MM-DD" calendar date.
pub fn parse_date(s: &str) -> Option<Date> {
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// Parses the 24-hour "hh:mm" component of the legacy ISO identifier.
fn parse_iso_clock(s: &str) -> Option<Time> {
    let (hour_str, minute_str) = s.split_once(':')?;
    let hour: u8 = hour_str.parse().ok()?;
    let minute: u8 = minute_str.parse().ok()?;
    Time::from_hms(hour, minute, 0).ok()
}

/// Canonical slot identifier: "YYYY-MM-DD hh:mm AM/PM".
pub fn slot_id(date: Date, t: Time) -> String {
    format!("{} {}", date_label(date), clock_label(t))
}

/// Parses a slot identifier in either the canonical form or the legacy
/// ISO form "YYYY-MM-DDThh:mm".
pub fn parse_slot_id(s: &str) -> Option<(Date, Time)> {
    if let Some((date_part, time_part)) = s.split_once(' ') {
        if let (Some(date), Some(time)) = (parse_date(date_part), parse_clock(time_part)) {
            return Some((date, time));
        }
    }
    if let Some((date_part, time_part)) = s.split_once('T') {
        if let (Some(date), Some(time)) = (parse_date(date_part), parse_iso_clock(time_part)) {
            return Some((date, time));
        }
    }
    None
}

/// Re-encodes a slot identifier in the canonical form, or None if it is
/// not parseable in any accepted form.
pub fn normalize_slot_id(s: &str) -> Option<String> {
    parse_slot_id(s).map(|(d, t)| slot_id(d, t))
}

/// The date portion of a slot identifier (everything before the first
/// space or 'T'); the whole identifier if neither separator is present.
pub fn slot_date_portion(s: &str) -> &str {
    match s.find([' ', 'T']) {
        Some(i) => &s[..i],
        None => s,
    }
}

/// Distinct dates offered by the blocks, ascending.
pub fn valid_dates(blocks: &[TimeBlock]) -> Vec<Date> {
    let mut dates: Vec<Date> = blocks.iter().map(|b| b.date).collect();
    dates.sort();
    dates.dedup();
    dates
}

/// The single shared time-of-day axis: [min start, max end) over ALL
/// blocks, discretized in fixed steps. One axis is reused across every
/// date so the grid columns align; slots outside a given date's blocks
/// show up as invalid on that date instead of being absent.
pub fn time_axis(blocks: &[TimeBlock], interval_minutes: u16) -> Vec<Time> {
    if blocks.is_empty() || interval_minutes == 0 {
        return Vec::new();
    }
    let start = blocks
        .iter()
        .map(|b| minutes_of(b.start_time))
        .min()
        .unwrap_or(0);
    let end = blocks
        .iter()
        .map(|b| minutes_of(b.end_time))
        .max()
        .unwrap_or(0);

    (start..end)
        .step_by(interval_minutes as usize)
        .map(time_from_minutes)
        .collect()
}

/// True iff at least one block on `date` covers `t` as a half-open
/// interval: start <= t < end. Multiple blocks on the same date OR
/// together (union of coverage).
pub fn is_slot_valid(blocks: &[TimeBlock], date: Date, t: Time) -> bool {
    blocks
        .iter()
        .any(|b| b.date == date && b.start_time <= t && t < b.end_time)
}

/// Serde adapter for clock times in the "hh:mm AM/PM" wire format.
pub mod clock_time {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Time;

    pub fn serialize<S: Serializer>(t: &Time, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::clock_label(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Time, D::Error> {
        let s = String::deserialize(d)?;
        super::parse_clock(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid clock time: {s:?}")))
    }
}
