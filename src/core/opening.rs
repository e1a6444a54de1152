use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::models::WeeklySchedule;

const MINUTES_PER_DAY: u32 = 1440;

/// Whether a venue is open at `now` according to its weekly schedule.
///
/// A venue with no schedule at all is treated as always open: missing data
/// must not penalize it. A day entry that is missing or marked closed means
/// closed for that day.
pub fn is_open_now(schedule: Option<&WeeklySchedule>, now: NaiveDateTime) -> bool {
    let schedule = match schedule {
        Some(s) => s,
        None => return true,
    };

    let day = match schedule.get(weekday_key(now.weekday())) {
        Some(day) if day.is_open => day,
        _ => return false,
    };

    let now_minutes = now.hour() * 60 + now.minute();

    day.slots.iter().any(|slot| {
        let (open, close) = match (parse_minutes(&slot.start), parse_minutes(&slot.end)) {
            (Some(open), Some(close)) => (open, close),
            _ => return false,
        };
        // An end before the start means the slot runs past midnight.
        let close = if close < open { close + MINUTES_PER_DAY } else { close };
        open <= now_minutes && now_minutes <= close
    })
}

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parse an `HH:MM` string into minutes since midnight.
fn parse_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}
