use chrono::{DateTime, Datelike, Duration, Utc};

use super::event::{CalendarEvent, EventStatus, EventType};

pub const UPCOMING_LIMIT: usize = 8;

/// Events dated now or later that are not cancelled, soonest first, capped at `limit`.
pub fn upcoming_events(events: &[CalendarEvent], now: DateTime<Utc>, limit: usize) -> Vec<&CalendarEvent> {
    let mut upcoming: Vec<&CalendarEvent> = events
        .iter()
        .filter(|event| event.date >= now && !event.is_cancelled())
        .collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(limit);
    upcoming
}

/// `now` moved back to Sunday with its time of day kept, through six days later.
pub fn week_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let week_start = now - Duration::days(now.weekday().num_days_from_sunday() as i64);
    (week_start, week_start + Duration::days(6))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarStats {
    pub total_events: usize,
    pub this_week: usize,
    pub upcoming: usize,
    pub overdue: usize,
}

pub fn calendar_stats(events: &[CalendarEvent], now: DateTime<Utc>) -> CalendarStats {
    let (week_start, week_end) = week_window(now);

    CalendarStats {
        total_events: events.len(),
        this_week: events
            .iter()
            .filter(|e| e.date >= week_start && e.date <= week_end)
            .count(),
        upcoming: upcoming_events(events, now, UPCOMING_LIMIT).len(),
        overdue: events
            .iter()
            .filter(|e| {
                e.date < now && e.status == EventStatus::Scheduled && e.event_type == EventType::Deadline
            })
            .count(),
    }
}
