use rust_decimal::Decimal;

use super::member::{BoardMember, MemberProfile, MemberStatus, Position, PreferredContact};
use crate::calendar::utc_day;

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

struct SeedMember {
    id: &'static str,
    name: &'static str,
    position: Position,
    seat: usize,
    term: ((i32, u32, u32), (i32, u32, u32)),
    attendance: i32,
    donation_total: i64,
    committees: &'static [&'static str],
    phone: &'static str,
    email: &'static str,
    company: &'static str,
    title: &'static str,
    notes: &'static str,
}

impl SeedMember {
    fn build(self, profile: MemberProfile) -> BoardMember {
        let ((sy, sm, sd), (ey, em, ed)) = self.term;
        BoardMember {
            id: self.id.to_string(),
            name: self.name.to_string(),
            avatar_url: None,
            position: self.position,
            seat_number: self.seat,
            term_start: utc_day(sy, sm, sd),
            term_end: utc_day(ey, em, ed),
            attendance: self.attendance,
            donation_total: Decimal::from(self.donation_total),
            committees: strings(self.committees),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            company: self.company.to_string(),
            title: self.title.to_string(),
            notes: self.notes.to_string(),
            status: MemberStatus::Active,
            profile,
        }
    }
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn sample_members() -> Vec<BoardMember> {
    vec![
        SeedMember {
            id: "1",
            name: "Michael Chen",
            position: Position::Chair,
            seat: 0,
            term: ((2022, 1, 1), (2025, 12, 31)),
            attendance: 95,
            donation_total: 50000,
            committees: &["Executive", "Finance", "Governance"],
            email: "mchen@example.com",
            phone: "(410) 555-0001",
            company: "Chen Enterprises",
            title: "CEO",
            notes: "Strong advocate for STEM education. Has connections to several tech companies for potential partnerships.",
        }
        .build(MemberProfile {
            background: text("Founded Chen Enterprises in 2010 and grew it to $50M revenue. Ten years in product development at Microsoft. MBA from Wharton, BS Computer Science from MIT."),
            expertise: strings(&["Technology", "Strategic Planning", "Fundraising", "Board Governance"]),
            connections: text("Strong ties to the tech community and the local startup ecosystem. Connected to several family foundations focused on education."),
            personal_interests: text("Marathon runner and youth basketball coach, passionate about STEM access for underserved communities."),
            family_info: text("Married to Dr. Lisa Chen, two daughters who volunteer with City Tutors during summers."),
            giving_history: text("Started with a $5,000 annual gift in 2020, $15,000 in 2021, then $50,000 annually since 2022. Secured a $25,000 corporate match."),
            board_contributions: text("Led strategic planning for the 3-year growth plan. Recruited 3 major donors totaling $150,000."),
            future_goals: text("Establish an endowment fund, explore national expansion, create a corporate partnership program."),
            last_interaction: Some(utc_day(2024, 1, 10)),
            preferred_contact: Some(PreferredContact::Phone),
        }),
        SeedMember {
            id: "2",
            name: "Sarah Williams",
            position: Position::ViceChair,
            seat: 1,
            term: ((2023, 1, 1), (2026, 12, 31)),
            attendance: 88,
            donation_total: 35000,
            committees: &["Executive", "Development"],
            email: "swilliams@example.com",
            phone: "(410) 555-0002",
            company: "Williams Foundation",
            title: "Executive Director",
            notes: "Excellent fundraiser with deep community connections.",
        }
        .build(MemberProfile {
            background: text("20+ years in the nonprofit sector. Managed the Williams Foundation since 2018, distributing $5M annually to education causes."),
            expertise: strings(&["Fundraising", "Grant Writing", "Donor Relations", "Event Planning"]),
            connections: text("Extensive network among Baltimore philanthropists and area grantmakers."),
            personal_interests: text("Art collector, hosts dinner parties to connect donors."),
            family_info: text("Married to Thomas Williams, one son at Yale Law School."),
            giving_history: text("Personal giving of $10,000 annually plus $25,000 from the Williams Foundation."),
            board_contributions: text("Organized the annual gala raising $200,000. Wrote a successful $100,000 grant proposal."),
            future_goals: text("Develop a major gifts program and a planned giving society."),
            last_interaction: Some(utc_day(2024, 1, 12)),
            preferred_contact: Some(PreferredContact::Email),
        }),
        SeedMember {
            id: "3",
            name: "Robert Johnson",
            position: Position::Treasurer,
            seat: 2,
            term: ((2021, 1, 1), (2024, 12, 31)),
            attendance: 92,
            donation_total: 25000,
            committees: &["Finance", "Audit"],
            email: "rjohnson@example.com",
            phone: "(410) 555-0003",
            company: "Johnson & Associates CPAs",
            title: "Managing Partner",
            notes: "CPA with extensive nonprofit financial experience.",
        }
        .build(MemberProfile {
            background: text("CPA with 25 years experience specializing in nonprofit audits and 990 preparation. Former IRS agent."),
            expertise: strings(&["Nonprofit Finance", "Tax Law", "Audit", "Financial Planning"]),
            connections: text("Works with 30+ nonprofits in the Baltimore area."),
            personal_interests: text("Golf enthusiast, coaches youth soccer."),
            family_info: text("Married to Maria Johnson, three children."),
            giving_history: text("Consistent $10,000 annual donor since 2021 plus $15,000 in pro bono accounting."),
            board_contributions: text("Implemented new financial controls and reduced audit fees by 40%."),
            future_goals: text("Create a financial dashboard for the board and explore earned revenue."),
            last_interaction: Some(utc_day(2024, 1, 8)),
            preferred_contact: Some(PreferredContact::Email),
        }),
        SeedMember {
            id: "4",
            name: "Emily Davis",
            position: Position::Secretary,
            seat: 3,
            term: ((2023, 6, 1), (2026, 5, 31)),
            attendance: 96,
            donation_total: 15000,
            committees: &["Governance", "Marketing"],
            email: "edavis@example.com",
            phone: "(410) 555-0004",
            company: "Davis Law Firm",
            title: "Partner",
            notes: "Provides pro bono legal counsel. Very detail-oriented.",
        }
        .build(MemberProfile::default()),
        SeedMember {
            id: "5",
            name: "James Martinez",
            position: Position::Member,
            seat: 4,
            term: ((2024, 1, 1), (2027, 12, 31)),
            attendance: 85,
            donation_total: 20000,
            committees: &["Programs", "Development"],
            email: "jmartinez@example.com",
            phone: "(410) 555-0005",
            company: "Martinez Realty",
            title: "Broker",
            notes: "New board member, very enthusiastic. Has offered office space for events.",
        }
        .build(MemberProfile::default()),
        SeedMember {
            id: "6",
            name: "Linda Thompson",
            position: Position::Member,
            seat: 5,
            term: ((2022, 1, 1), (2025, 12, 31)),
            attendance: 78,
            donation_total: 30000,
            committees: &["Marketing", "Events"],
            email: "lthompson@example.com",
            phone: "(410) 555-0006",
            company: "Thompson Media Group",
            title: "President",
            notes: "Helps with PR and media coverage. Great event planner.",
        }
        .build(MemberProfile::default()),
        SeedMember {
            id: "7",
            name: "David Brown",
            position: Position::Member,
            seat: 6,
            term: ((2023, 1, 1), (2026, 12, 31)),
            attendance: 90,
            donation_total: 40000,
            committees: &["Finance", "Programs"],
            email: "dbrown@example.com",
            phone: "(410) 555-0007",
            company: "Brown Investment Partners",
            title: "Managing Director",
            notes: "Strong financial acumen. Interested in endowment building.",
        }
        .build(MemberProfile::default()),
        SeedMember {
            id: "8",
            name: "Patricia Garcia",
            position: Position::Member,
            seat: 7,
            term: ((2021, 6, 1), (2024, 5, 31)),
            attendance: 82,
            donation_total: 18000,
            committees: &["Programs", "Evaluation"],
            email: "pgarcia@example.com",
            phone: "(410) 555-0008",
            company: "Baltimore City Schools",
            title: "Principal",
            notes: "Former educator. Provides valuable program insights.",
        }
        .build(MemberProfile::default()),
    ]
}
