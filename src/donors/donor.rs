use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::storage::Record;

pub const RECENT_GIFT_DAYS: i64 = 90;
pub const ACTIVE_GIFT_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Call,
    Email,
    Meeting,
    Donation,
}

impl InteractionType {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionType::Call => "call",
            InteractionType::Email => "email",
            InteractionType::Meeting => "meeting",
            InteractionType::Donation => "donation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: u32,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub total_given: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_gift_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_gift_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plans: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<String>,
}

impl Record for Donor {
    const STORAGE_KEY: &'static str = "donors";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Donor {
    /// Case-insensitive substring match on name or organization.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .organization
                .as_deref()
                .is_some_and(|org| org.to_lowercase().contains(&term))
    }

    fn gave_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        self.last_gift_date.is_some_and(|date| date > now - Duration::days(days))
    }

    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        self.gave_within(now, RECENT_GIFT_DAYS)
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.gave_within(now, ACTIVE_GIFT_DAYS)
    }

    /// Appends a meeting interaction with the next free id.
    pub fn add_note(&mut self, summary: impl Into<String>, now: DateTime<Utc>) -> &Interaction {
        let id = self.interactions.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        self.interactions.push(Interaction {
            id,
            date: now,
            kind: InteractionType::Meeting,
            summary: summary.into(),
        });
        &self.interactions[self.interactions.len() - 1]
    }
}
