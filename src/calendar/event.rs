use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forms::{ValidationError, non_empty, require};
use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_donor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Call,
    Deadline,
    Event,
    Donation,
    Volunteer,
    Board,
    Fundraiser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Meeting,
        EventType::Call,
        EventType::Deadline,
        EventType::Event,
        EventType::Donation,
        EventType::Volunteer,
        EventType::Board,
        EventType::Fundraiser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Call => "call",
            EventType::Deadline => "deadline",
            EventType::Event => "event",
            EventType::Donation => "donation",
            EventType::Volunteer => "volunteer",
            EventType::Board => "board",
            EventType::Fundraiser => "fundraiser",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == value.to_lowercase())
    }
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl Priority {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl Record for CalendarEvent {
    const STORAGE_KEY: &'static str = "calendarEvents";

    fn id(&self) -> &str {
        &self.id
    }
}

impl CalendarEvent {
    /// Calendar-day match on year, month and day; time of day is ignored.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date.date_naive() == date
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == EventStatus::Cancelled
    }

    pub fn time_label(&self) -> String {
        match &self.end_time {
            Some(end) => format!("{}-{}", self.start_time, end),
            None => self.start_time.clone(),
        }
    }
}

/// Add/edit form contents. Times are free text and never parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub event_type: EventType,
    pub status: EventStatus,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    pub priority: Priority,
    pub reminder: Option<u32>,
    pub notes: Option<String>,
    pub related_donor: Option<String>,
    pub amount: Option<Decimal>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_time: String::new(),
            end_time: None,
            event_type: EventType::Meeting,
            status: EventStatus::Scheduled,
            location: None,
            attendees: Vec::new(),
            priority: Priority::Medium,
            reminder: Some(30),
            notes: None,
            related_donor: None,
            amount: None,
        }
    }
}

impl EventDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn for_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            event_type: event.event_type,
            status: event.status,
            location: event.location.clone(),
            attendees: event.attendees.clone(),
            priority: event.priority,
            reminder: event.reminder,
            notes: event.notes.clone(),
            related_donor: event.related_donor.clone(),
            amount: event.amount,
        }
    }

    pub fn into_event(self, id: String, date: DateTime<Utc>) -> Result<CalendarEvent, ValidationError> {
        let title = require(&self.title, "title")?;
        let start_time = if self.start_time.trim().is_empty() {
            "09:00".to_string()
        } else {
            self.start_time
        };

        Ok(CalendarEvent {
            id,
            title,
            description: self.description,
            date,
            start_time,
            end_time: non_empty(self.end_time),
            event_type: self.event_type,
            status: self.status,
            location: non_empty(self.location),
            attendees: self.attendees,
            priority: self.priority,
            reminder: self.reminder,
            notes: non_empty(self.notes),
            related_donor: non_empty(self.related_donor),
            amount: self.amount,
        })
    }
}
