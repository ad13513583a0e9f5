use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Chair,
    ViceChair,
    Treasurer,
    Secretary,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Emeritus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredContact {
    Email,
    Phone,
    Text,
    InPerson,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::Chair => "Chair",
            Position::ViceChair => "Vice Chair",
            Position::Treasurer => "Treasurer",
            Position::Secretary => "Secretary",
            Position::Member => "Member",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().replace(' ', "-").as_str() {
            "chair" => Some(Position::Chair),
            "vice-chair" => Some(Position::ViceChair),
            "treasurer" => Some(Position::Treasurer),
            "secretary" => Some(Position::Secretary),
            "member" => Some(Position::Member),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub position: Position,
    /// Collection length at creation; never renumbered when members leave.
    pub seat_number: usize,
    pub term_start: DateTime<Utc>,
    pub term_end: DateTime<Utc>,
    /// Percentage, unvalidated.
    pub attendance: i32,
    pub donation_total: Decimal,
    #[serde(default)]
    pub committees: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub status: MemberStatus,
    #[serde(flatten)]
    pub profile: MemberProfile,
}

/// Narrative fields kept on the member detail panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expertise: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub giving_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_contributions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<PreferredContact>,
}

impl Record for BoardMember {
    const STORAGE_KEY: &'static str = "boardMembers";

    fn id(&self) -> &str {
        &self.id
    }
}

impl BoardMember {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.company.to_lowercase().contains(&term)
    }
}

pub const DEFAULT_ATTENDANCE: i32 = 85;
pub const TERM_YEARS: u32 = 3;

/// Add-member form contents. Nothing is required: a missing name becomes
/// "New Member".
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub avatar_url: Option<String>,
    pub position: Position,
    pub attendance: Option<i32>,
    pub donation_total: Decimal,
    pub committees: Vec<String>,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub title: String,
    pub notes: String,
    pub status: MemberStatus,
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar_url: None,
            position: Position::Member,
            attendance: None,
            donation_total: Decimal::ZERO,
            committees: Vec::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            title: String::new(),
            notes: String::new(),
            status: MemberStatus::Active,
        }
    }
}

impl MemberDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds the member; the term runs three years from `now`.
    pub fn into_member(self, id: String, seat_number: usize, now: DateTime<Utc>) -> BoardMember {
        let name = if self.name.trim().is_empty() {
            "New Member".to_string()
        } else {
            self.name
        };
        let term_end = now.checked_add_months(Months::new(12 * TERM_YEARS)).unwrap_or(now);

        BoardMember {
            id,
            name,
            avatar_url: self.avatar_url,
            position: self.position,
            seat_number,
            term_start: now,
            term_end,
            attendance: self.attendance.unwrap_or(DEFAULT_ATTENDANCE),
            donation_total: self.donation_total,
            committees: self.committees,
            email: self.email,
            phone: self.phone,
            company: self.company,
            title: self.title,
            notes: self.notes,
            status: self.status,
            profile: MemberProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap()
    }

    #[test]
    fn empty_draft_gets_defaults() {
        let member = MemberDraft::default().into_member("42".to_string(), 8, now());

        assert_eq!(member.name, "New Member");
        assert_eq!(member.position, Position::Member);
        assert_eq!(member.attendance, 85);
        assert_eq!(member.donation_total, Decimal::ZERO);
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.seat_number, 8);
    }

    #[test]
    fn term_runs_three_years() {
        let member = MemberDraft::named("Ana").into_member("1".to_string(), 0, now());

        assert_eq!(member.term_start, now());
        assert_eq!(member.term_end, Utc.with_ymd_and_hms(2027, 2, 28, 10, 0, 0).unwrap());
    }

    #[test]
    fn out_of_range_attendance_is_accepted() {
        let draft = MemberDraft {
            attendance: Some(-20),
            ..MemberDraft::named("Ana")
        };

        assert_eq!(draft.into_member("1".to_string(), 0, now()).attendance, -20);
    }

    #[test]
    fn search_matches_name_or_company_case_insensitively() {
        let member = MemberDraft {
            company: "Chen Enterprises".to_string(),
            donation_total: dec!(50000),
            ..MemberDraft::named("Michael Chen")
        }
        .into_member("1".to_string(), 0, now());

        assert!(member.matches("michael"));
        assert!(member.matches("ENTERPRISES"));
        assert!(!member.matches("williams"));
    }

    #[test]
    fn serializes_position_and_narrative_fields_flat() {
        let mut member = MemberDraft {
            position: Position::ViceChair,
            ..MemberDraft::named("Sarah Williams")
        }
        .into_member("2".to_string(), 1, now());
        member.profile.preferred_contact = Some(PreferredContact::InPerson);

        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(json["position"], "vice-chair");
        assert_eq!(json["seatNumber"], 1);
        assert_eq!(json["preferredContact"], "in-person");
        assert!(json.get("background").is_none());
    }

    #[test]
    fn parses_positions_with_spaces() {
        assert_eq!(Position::parse("Vice Chair"), Some(Position::ViceChair));
        assert_eq!(Position::parse("president"), None);
    }
}
