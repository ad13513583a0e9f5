use std::f64::consts::PI;

use super::member::BoardMember;

pub const TABLE_CENTER_X: f64 = 400.0;
pub const TABLE_CENTER_Y: f64 = 250.0;
pub const TABLE_RADIUS_X: f64 = 280.0;
pub const TABLE_RADIUS_Y: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatPosition {
    pub x: f64,
    pub y: f64,
}

/// Point on the oval table for seat `index` of `total`, starting at the top
/// and going clockwise.
pub fn seat_position(index: usize, total: usize) -> SeatPosition {
    if total == 0 {
        return SeatPosition {
            x: TABLE_CENTER_X,
            y: TABLE_CENTER_Y,
        };
    }
    let angle = (index as f64 * 2.0 * PI) / total as f64 - PI / 2.0;
    SeatPosition {
        x: TABLE_CENTER_X + TABLE_RADIUS_X * angle.cos(),
        y: TABLE_CENTER_Y + TABLE_RADIUS_Y * angle.sin(),
    }
}

/// Places members by their position in the list, not by stored seat number.
pub fn seating_plan(members: &[BoardMember]) -> Vec<(&BoardMember, SeatPosition)> {
    members
        .iter()
        .enumerate()
        .map(|(index, member)| (member, seat_position(index, members.len())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: SeatPosition, x: f64, y: f64) {
        assert!((actual.x - x).abs() < 1e-9, "x was {}", actual.x);
        assert!((actual.y - y).abs() < 1e-9, "y was {}", actual.y);
    }

    #[test]
    fn first_seat_is_at_top_of_table() {
        assert_close(seat_position(0, 8), 400.0, 70.0);
    }

    #[test]
    fn quarter_way_round_is_right_side() {
        assert_close(seat_position(2, 8), 680.0, 250.0);
    }

    #[test]
    fn half_way_round_is_bottom() {
        assert_close(seat_position(4, 8), 400.0, 430.0);
    }

    #[test]
    fn empty_table_returns_center() {
        assert_close(seat_position(0, 0), 400.0, 250.0);
    }
}
