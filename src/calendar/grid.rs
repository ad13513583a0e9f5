use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use super::event::CalendarEvent;

/// A calendar month. `month` is 1-based, as in chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Day count taken from the day before the first of the next month.
    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn name(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell<'a> {
    Blank,
    Day(DayCell<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> DayCell<'a> {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn visible_events(&self, limit: usize) -> &[&'a CalendarEvent] {
        &self.events[..self.events.len().min(limit)]
    }

    /// Number of events summarised as "+N more" beyond `limit`.
    pub fn overflow(&self, limit: usize) -> usize {
        self.events.len().saturating_sub(limit)
    }
}

impl<'a> GridCell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    pub month: YearMonth,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn weeks(&self) -> std::slice::Chunks<'_, GridCell<'a>> {
        self.cells.chunks(7)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell<'a>> {
        let index = (self.leading_blanks + day).checked_sub(1)? as usize;
        self.cells.get(index)?.as_day().filter(|cell| cell.day() == day)
    }
}

/// Leading blanks for the weekday offset, then one cell per day holding the
/// events that fall on that day in collection order.
pub fn build_month_grid(month: YearMonth, events: &[CalendarEvent]) -> MonthGrid<'_> {
    let leading_blanks = month.leading_blanks();
    let days_in_month = month.days_in_month();

    let mut by_day: HashMap<NaiveDate, Vec<&CalendarEvent>> = HashMap::new();
    for event in events {
        let date = event.date.date_naive();
        if month.contains(date) {
            by_day.entry(date).or_default().push(event);
        }
    }

    let mut cells = Vec::with_capacity((leading_blanks + days_in_month) as usize);
    cells.extend((0..leading_blanks).map(|_| GridCell::Blank));

    let mut date = month.first_day();
    for _ in 0..days_in_month {
        cells.push(GridCell::Day(DayCell {
            date,
            events: by_day.remove(&date).unwrap_or_default(),
        }));
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }

    MonthGrid {
        month,
        leading_blanks,
        days_in_month,
        cells,
    }
}
