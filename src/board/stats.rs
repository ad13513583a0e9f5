use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::member::BoardMember;

const MILLIS_PER_MONTH: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 30.0;
pub const EXPIRY_WINDOW_MONTHS: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardStats {
    pub total_members: usize,
    pub average_attendance: i64,
    pub total_donations: Decimal,
    pub terms_expiring_soon: usize,
}

/// Months (of 30 days) from `now` until the member's term ends.
pub fn months_until_term_end(member: &BoardMember, now: DateTime<Utc>) -> f64 {
    (member.term_end - now).num_milliseconds() as f64 / MILLIS_PER_MONTH
}

pub fn term_expiring_soon(member: &BoardMember, now: DateTime<Utc>) -> bool {
    let months = months_until_term_end(member, now);
    months > 0.0 && months <= EXPIRY_WINDOW_MONTHS
}

pub fn board_stats(members: &[BoardMember], now: DateTime<Utc>) -> BoardStats {
    let average_attendance = if members.is_empty() {
        0
    } else {
        let sum: i64 = members.iter().map(|m| m.attendance as i64).sum();
        // Half rounds up, including for negative averages.
        (sum as f64 / members.len() as f64 + 0.5).floor() as i64
    };

    BoardStats {
        total_members: members.len(),
        average_attendance,
        total_donations: members.iter().map(|m| m.donation_total).sum(),
        terms_expiring_soon: members.iter().filter(|m| term_expiring_soon(m, now)).count(),
    }
}
