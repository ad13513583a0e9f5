use chrono::{DateTime, Utc};

use super::{format_currency, truncate_to_width};
use crate::board::{BoardMember, BoardStats, SeatPosition, term_expiring_soon};

pub fn format_board_stats(stats: &BoardStats) -> String {
    format!(
        "{} members | {}% average attendance | {} donated | {} terms expiring soon",
        stats.total_members,
        stats.average_attendance,
        format_currency(stats.total_donations),
        stats.terms_expiring_soon
    )
}

fn member_line(member: &BoardMember, now: DateTime<Utc>) -> String {
    let expiring = if term_expiring_soon(member, now) { " (term ending)" } else { "" };
    let line = format!(
        "{:>2}  {:<20} {:<15} {:<24} {:>3}%  {:>9}  term to {}{}",
        member.seat_number,
        member.name,
        member.position.label(),
        member.company,
        member.attendance,
        format_currency(member.donation_total),
        member.term_end.format("%Y-%m-%d"),
        expiring
    );
    truncate_to_width(&line, 120)
}

pub fn format_roster(members: &[&BoardMember], stats: &BoardStats, now: DateTime<Utc>) -> String {
    let mut lines = vec!["Board of Directors".to_string(), format_board_stats(stats), String::new()];

    if members.is_empty() {
        lines.push("No board members found.".to_string());
    }
    for member in members {
        lines.push(member_line(member, now));
    }

    lines.join("\n")
}

pub fn format_seating(plan: &[(&BoardMember, SeatPosition)]) -> String {
    let mut lines = vec!["Seating".to_string()];
    for (member, seat) in plan {
        lines.push(format!("  ({:>5.1}, {:>5.1})  {}", seat.x, seat.y, member.name));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MemberDraft, Position, board_stats, seating_plan};
    use crate::calendar::utc_day;
    use rust_decimal_macros::dec;

    fn chair() -> BoardMember {
        let mut draft = MemberDraft::named("Michael Chen");
        draft.position = Position::Chair;
        draft.company = "Chen Tech Solutions".to_string();
        draft.donation_total = dec!(50000);
        draft.into_member("1".to_string(), 0, utc_day(2022, 1, 1))
    }

    #[test]
    fn roster_lists_member_with_stats() {
        let member = chair();
        let now = utc_day(2024, 9, 1);
        let stats = board_stats(std::slice::from_ref(&member), now);

        let text = format_roster(&[&member], &stats, now);

        assert!(text.contains("1 members | 85% average attendance | $50,000 donated"));
        assert!(text.contains("Michael Chen"));
        assert!(text.contains("Chair"));
        assert!(text.contains("term to 2025-01-01 (term ending)"));
    }

    #[test]
    fn empty_roster_says_so() {
        let now = utc_day(2024, 1, 1);
        let stats = board_stats(&[], now);

        assert!(format_roster(&[], &stats, now).ends_with("No board members found."));
    }

    #[test]
    fn single_seat_sits_at_top_of_table() {
        let members = vec![chair()];

        let text = format_seating(&seating_plan(&members));

        assert!(text.contains("(400.0,  70.0)  Michael Chen"));
    }
}
