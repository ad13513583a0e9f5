use rust_decimal_macros::dec;

use super::event::{CalendarEvent, EventStatus, EventType, Priority};
use super::utc_day;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "1".to_string(),
            title: "Board Meeting".to_string(),
            description: "Monthly board meeting to review finances and programs".to_string(),
            date: utc_day(2024, 2, 15),
            start_time: "18:00".to_string(),
            end_time: Some("19:30".to_string()),
            event_type: EventType::Board,
            status: EventStatus::Scheduled,
            location: Some("Conference Room A".to_string()),
            attendees: names(&["Michael Chen", "Sarah Williams", "Robert Johnson"]),
            priority: Priority::High,
            reminder: Some(60),
            notes: Some("Review Q1 budget and new program proposals".to_string()),
            related_donor: None,
            amount: None,
        },
        CalendarEvent {
            id: "2".to_string(),
            title: "Donor Meeting - Tech Innovators Inc.".to_string(),
            description: "Quarterly check-in with corporate sponsor".to_string(),
            date: utc_day(2024, 2, 18),
            start_time: "14:00".to_string(),
            end_time: Some("15:00".to_string()),
            event_type: EventType::Meeting,
            status: EventStatus::Scheduled,
            location: Some("Their office".to_string()),
            attendees: Vec::new(),
            priority: Priority::High,
            reminder: None,
            notes: Some("Discuss employee volunteer program expansion".to_string()),
            related_donor: Some("Tech Innovators Inc.".to_string()),
            amount: None,
        },
        CalendarEvent {
            id: "3".to_string(),
            title: "Spring Gala Planning Call".to_string(),
            description: "Planning committee call for annual fundraising gala".to_string(),
            date: utc_day(2024, 2, 20),
            start_time: "10:00".to_string(),
            end_time: Some("11:00".to_string()),
            event_type: EventType::Call,
            status: EventStatus::Scheduled,
            location: None,
            attendees: names(&["Sarah Williams", "Linda Thompson", "Event Committee"]),
            priority: Priority::Medium,
            reminder: Some(30),
            notes: None,
            related_donor: None,
            amount: None,
        },
        CalendarEvent {
            id: "4".to_string(),
            title: "Grant Application Deadline".to_string(),
            description: "Williams Foundation capacity building grant due".to_string(),
            date: utc_day(2024, 2, 22),
            start_time: "17:00".to_string(),
            end_time: None,
            event_type: EventType::Deadline,
            status: EventStatus::Scheduled,
            location: None,
            attendees: Vec::new(),
            priority: Priority::High,
            reminder: None,
            notes: Some("Final review with program team before submission".to_string()),
            related_donor: None,
            amount: Some(dec!(50000)),
        },
        CalendarEvent {
            id: "5".to_string(),
            title: "Student Showcase Event".to_string(),
            description: "Quarterly student achievement showcase for donors".to_string(),
            date: utc_day(2024, 2, 25),
            start_time: "15:00".to_string(),
            end_time: Some("17:00".to_string()),
            event_type: EventType::Event,
            status: EventStatus::Scheduled,
            location: Some("Main auditorium".to_string()),
            attendees: names(&["Students", "Families", "Donors", "Board Members"]),
            priority: Priority::High,
            reminder: None,
            notes: Some("Invite major donors - great cultivation opportunity".to_string()),
            related_donor: None,
            amount: None,
        },
        CalendarEvent {
            id: "6".to_string(),
            title: "Coffee with Michael Chen".to_string(),
            description: "Informal check-in with board chair".to_string(),
            date: utc_day(2024, 2, 12),
            start_time: "08:00".to_string(),
            end_time: Some("09:00".to_string()),
            event_type: EventType::Meeting,
            status: EventStatus::Completed,
            location: Some("Starbucks downtown".to_string()),
            attendees: Vec::new(),
            priority: Priority::Medium,
            reminder: None,
            notes: Some("Discussed strategic planning retreat".to_string()),
            related_donor: Some("Michael Chen".to_string()),
            amount: None,
        },
        CalendarEvent {
            id: "7".to_string(),
            title: "Volunteer Orientation".to_string(),
            description: "Monthly orientation for new volunteers".to_string(),
            date: utc_day(2024, 2, 28),
            start_time: "18:30".to_string(),
            end_time: Some("20:00".to_string()),
            event_type: EventType::Volunteer,
            status: EventStatus::Scheduled,
            location: Some("Training room".to_string()),
            attendees: Vec::new(),
            priority: Priority::Medium,
            reminder: None,
            notes: Some("12 new volunteers signed up".to_string()),
            related_donor: None,
            amount: None,
        },
        CalendarEvent {
            id: "8".to_string(),
            title: "Anderson Trust Site Visit".to_string(),
            description: "Trustee visit to review program impact".to_string(),
            date: utc_day(2024, 3, 5),
            start_time: "13:00".to_string(),
            end_time: Some("16:00".to_string()),
            event_type: EventType::Meeting,
            status: EventStatus::Scheduled,
            location: Some("City Tutors facility".to_string()),
            attendees: Vec::new(),
            priority: Priority::High,
            reminder: None,
            notes: Some("Prepare student testimonials and impact data".to_string()),
            related_donor: Some("The Anderson Trust".to_string()),
            amount: Some(dec!(75000)),
        },
        CalendarEvent {
            id: "9".to_string(),
            title: "Spring Fundraising Gala".to_string(),
            description: "Annual fundraising gala - Hearts for Education".to_string(),
            date: utc_day(2024, 3, 15),
            start_time: "18:00".to_string(),
            end_time: Some("22:00".to_string()),
            event_type: EventType::Fundraiser,
            status: EventStatus::Scheduled,
            location: Some("Grand Ballroom Hotel".to_string()),
            attendees: Vec::new(),
            priority: Priority::High,
            reminder: None,
            notes: Some("Goal: $200,000 raised. 300 attendees expected.".to_string()),
            related_donor: None,
            amount: None,
        },
        CalendarEvent {
            id: "10".to_string(),
            title: "Program Team Meeting".to_string(),
            description: "Weekly program coordination meeting".to_string(),
            date: utc_day(2024, 2, 14),
            start_time: "09:00".to_string(),
            end_time: Some("10:00".to_string()),
            event_type: EventType::Meeting,
            status: EventStatus::Scheduled,
            location: None,
            attendees: Vec::new(),
            priority: Priority::Medium,
            reminder: None,
            notes: Some("Review student progress reports".to_string()),
            related_donor: None,
            amount: None,
        },
    ]
}
