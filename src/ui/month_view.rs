use chrono::NaiveDate;

use super::truncate_to_width;
use crate::calendar::{GridCell, MonthGrid};

const CELL_WIDTH: usize = 5;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Day number right-aligned in its cell; `*` marks days with events and
/// `[..]` marks today.
fn day_label(day: u32, has_events: bool, is_today: bool) -> String {
    let marker = if has_events { "*" } else { " " };
    let label = if is_today {
        format!("[{}]{}", day, marker)
    } else {
        format!("{}{}", day, marker)
    };
    format!("{:>width$}", label, width = CELL_WIDTH)
}

/// Month grid followed by each day's events, at most `events_per_day` per
/// day with the rest summarised as "+N more".
pub fn render_month(grid: &MonthGrid<'_>, today: NaiveDate, events_per_day: usize) -> String {
    let mut lines = vec![grid.month.name(), String::new()];

    lines.push(
        WEEKDAYS
            .iter()
            .map(|d| format!("{:>width$}", d, width = CELL_WIDTH))
            .collect::<String>(),
    );

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => " ".repeat(CELL_WIDTH),
                GridCell::Day(day) => day_label(day.day(), !day.events.is_empty(), day.date == today),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let busy_days: Vec<_> = grid
        .cells
        .iter()
        .filter_map(GridCell::as_day)
        .filter(|day| !day.events.is_empty())
        .collect();

    lines.push(String::new());
    if busy_days.is_empty() {
        lines.push("No events this month.".to_string());
    }

    for day in busy_days {
        let date_label = day.date.format("%a %d").to_string();
        for (i, event) in day.visible_events(events_per_day).iter().enumerate() {
            let prefix = if i == 0 { date_label.as_str() } else { "" };
            let line = format!("{:<7}{:<6} {}", prefix, event.start_time, event.title);
            lines.push(truncate_to_width(&line, 72));
        }
        let overflow = day.overflow(events_per_day);
        if overflow > 0 {
            lines.push(format!("{:<7}+{} more", "", overflow));
        }
    }

    lines.join("\n")
}
