use super::{format_currency, truncate_to_width};
use crate::calendar::{CalendarEvent, CalendarStats};

pub fn build_agenda_line(event: &CalendarEvent, width: usize) -> String {
    let mut line = format!(
        "{} {:<13} {} [{}]",
        event.date.format("%a %b %d"),
        event.time_label(),
        event.title,
        event.event_type.label()
    );
    if let Some(location) = &event.location
        && !location.is_empty()
    {
        line.push_str(&format!(" @ {}", location));
    }
    if let Some(amount) = event.amount {
        line.push_str(&format!(" ({})", format_currency(amount)));
    }
    truncate_to_width(&line, width)
}

pub fn format_upcoming(events: &[&CalendarEvent], stats: &CalendarStats) -> String {
    let mut lines = vec![
        "Upcoming Events".to_string(),
        format!(
            "{} total | {} this week | {} upcoming | {} overdue",
            stats.total_events, stats.this_week, stats.upcoming, stats.overdue
        ),
        String::new(),
    ];

    if events.is_empty() {
        lines.push("No upcoming events.".to_string());
    } else {
        for event in events {
            lines.push(format!("- {}", build_agenda_line(event, usize::MAX)));
        }
    }

    lines.join("\n")
}
