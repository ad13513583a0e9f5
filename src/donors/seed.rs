use rust_decimal::Decimal;

use super::donor::{Donor, Interaction, InteractionType};
use crate::calendar::utc_day;

type Day = (i32, u32, u32);

struct SeedDonor {
    id: &'static str,
    name: &'static str,
    organization: Option<&'static str>,
    email: &'static str,
    phone: &'static str,
    total_given: i64,
    last_gift: (Day, i64),
    notes: &'static str,
    interactions: &'static [(Day, InteractionType, &'static str)],
    plans: &'static str,
    thoughts: &'static str,
}

impl SeedDonor {
    fn build(self) -> Donor {
        let ((y, m, d), amount) = self.last_gift;
        let interactions = self
            .interactions
            .iter()
            .zip(1..)
            .map(|(&((y, m, d), kind, summary), id)| Interaction {
                id,
                date: utc_day(y, m, d),
                kind,
                summary: summary.to_string(),
            })
            .collect();

        Donor {
            id: self.id.to_string(),
            name: self.name.to_string(),
            organization: self.organization.map(str::to_string),
            email: Some(self.email.to_string()),
            phone: Some(self.phone.to_string()),
            total_given: Decimal::from(self.total_given),
            last_gift_date: Some(utc_day(y, m, d)),
            last_gift_amount: Some(Decimal::from(amount)),
            notes: Some(self.notes.to_string()),
            interactions,
            plans: Some(self.plans.to_string()),
            thoughts: Some(self.thoughts.to_string()),
        }
    }
}

pub fn sample_donors() -> Vec<Donor> {
    [
        SeedDonor {
            id: "1",
            name: "Sarah Johnson",
            organization: Some("Johnson & Associates"),
            email: "sarah@johnsonassoc.com",
            phone: "(555) 123-4567",
            total_given: 125000,
            last_gift: ((2024, 1, 15), 25000),
            notes: "Sarah is passionate about education equity. Her daughter attended City Tutors programs 10 years ago. Prefers phone calls over email.",
            interactions: &[
                ((2024, 1, 15), InteractionType::Donation, "Donated $25,000 for spring program expansion"),
                ((2024, 1, 10), InteractionType::Call, "Discussed impact of her previous donations"),
                ((2023, 12, 5), InteractionType::Meeting, "Annual donor appreciation dinner - brought her daughter"),
            ],
            plans: "Schedule quarterly check-ins. Invite to student showcase in March.",
            thoughts: "Consider for board position in 2025. Very engaged and brings valuable perspective.",
        },
        SeedDonor {
            id: "2",
            name: "Michael Chen",
            organization: Some("Chen Tech Solutions"),
            email: "mchen@chentech.com",
            phone: "(555) 234-5678",
            total_given: 85000,
            last_gift: ((2024, 1, 20), 10000),
            notes: "Tech entrepreneur who believes in STEM education. Interested in funding coding workshops. Best reached early mornings.",
            interactions: &[
                ((2024, 1, 20), InteractionType::Donation, "Sponsored new computer lab - $10,000"),
                ((2024, 1, 5), InteractionType::Email, "Sent proposal for tech mentorship program"),
                ((2023, 11, 15), InteractionType::Meeting, "Tour of tutoring facilities with his team"),
            ],
            plans: "Propose partnership for summer coding camp. Connect with our IT needs assessment.",
            thoughts: "Could be instrumental in modernizing our tech infrastructure. Has connections in Silicon Valley.",
        },
        SeedDonor {
            id: "3",
            name: "Williams Foundation",
            organization: None,
            email: "info@williamsfoundation.org",
            phone: "(555) 345-6789",
            total_given: 250000,
            last_gift: ((2024, 1, 10), 50000),
            notes: "Family foundation focused on youth development. Requires detailed impact reports. Grant applications due in Q3.",
            interactions: &[
                ((2024, 1, 10), InteractionType::Donation, "Q1 grant installment - $50,000"),
                ((2023, 12, 1), InteractionType::Email, "Submitted annual impact report"),
                ((2023, 10, 15), InteractionType::Meeting, "Site visit from foundation board members"),
            ],
            plans: "Prepare Q2 report by April 15. Apply for capacity building grant.",
            thoughts: "Our most reliable institutional funder. Must maintain excellent reporting standards.",
        },
        SeedDonor {
            id: "4",
            name: "Emily Rodriguez",
            organization: Some("Rodriguez Consulting"),
            email: "emily@rodriguezcons.com",
            phone: "(555) 456-7890",
            total_given: 45000,
            last_gift: ((2023, 12, 15), 5000),
            notes: "HR consultant who volunteers as career mentor. Daughter is current student. Interested in college prep programs.",
            interactions: &[
                ((2023, 12, 15), InteractionType::Donation, "Year-end gift - $5,000"),
                ((2023, 11, 20), InteractionType::Meeting, "Volunteered at career day event"),
                ((2023, 10, 5), InteractionType::Call, "Offered to conduct mock interviews"),
            ],
            plans: "Engage in volunteer recruitment committee. Feature in donor spotlight.",
            thoughts: "Bridge between donor and volunteer. Her professional network could be valuable.",
        },
        SeedDonor {
            id: "5",
            name: "James Patterson",
            organization: None,
            email: "jpatterson@email.com",
            phone: "(555) 567-8901",
            total_given: 30000,
            last_gift: ((2023, 11, 20), 2500),
            notes: "Retired teacher, gives consistently but modestly. Very interested in literacy programs. Likes handwritten thank you notes.",
            interactions: &[
                ((2023, 11, 20), InteractionType::Donation, "Annual giving - $2,500"),
                ((2023, 9, 10), InteractionType::Email, "Sent newsletter with student success stories"),
                ((2023, 6, 15), InteractionType::Call, "Birthday call - shared memories of teaching"),
            ],
            plans: "Send quarterly updates on reading program. Invite to volunteer as reading tutor.",
            thoughts: "Loyal supporter with deep commitment to education. Consider legacy giving conversation.",
        },
        SeedDonor {
            id: "6",
            name: "Tech Innovators Inc.",
            organization: None,
            email: "giving@techinnovators.com",
            phone: "(555) 678-9012",
            total_given: 175000,
            last_gift: ((2024, 1, 25), 35000),
            notes: "Corporate partner with employee volunteer program. Matches employee donations 2:1. Fiscal year ends in June.",
            interactions: &[
                ((2024, 1, 25), InteractionType::Donation, "Q4 corporate sponsorship - $35,000"),
                ((2024, 1, 15), InteractionType::Meeting, "Planning meeting for employee volunteer day"),
                ((2023, 12, 10), InteractionType::Email, "Renewed annual partnership agreement"),
            ],
            plans: "Coordinate spring volunteer day. Submit proposal for increased support in new fiscal year.",
            thoughts: "Growing relationship with potential for significant expansion. CEO is personally invested.",
        },
        SeedDonor {
            id: "7",
            name: "Maria Gonzalez",
            organization: Some("Gonzalez Family Fund"),
            email: "mgonzalez@gff.org",
            phone: "(555) 789-0123",
            total_given: 95000,
            last_gift: ((2024, 1, 5), 15000),
            notes: "First-generation college graduate, supports college access programs. Bilingual - helps with Spanish-speaking families.",
            interactions: &[
                ((2024, 1, 5), InteractionType::Donation, "New Year gift for scholarship fund - $15,000"),
                ((2023, 11, 30), InteractionType::Meeting, "Spoke at parent information night"),
                ((2023, 9, 20), InteractionType::Call, "Discussed creating named scholarship"),
            ],
            plans: "Finalize scholarship criteria. Invite to graduation ceremony as keynote speaker.",
            thoughts: "Powerful advocate in Latino community. Her story resonates with our families.",
        },
        SeedDonor {
            id: "8",
            name: "Robert Thompson",
            organization: Some("Thompson Enterprises"),
            email: "rthompson@thompsonent.com",
            phone: "(555) 890-1234",
            total_given: 60000,
            last_gift: ((2023, 10, 30), 7500),
            notes: "Business owner who benefited from mentorship as youth. Interested in entrepreneurship programs for teens.",
            interactions: &[
                ((2023, 10, 30), InteractionType::Donation, "Funded business plan competition - $7,500"),
                ((2023, 9, 15), InteractionType::Meeting, "Judged student business pitch event"),
                ((2023, 7, 20), InteractionType::Email, "Offered internships at his company"),
            ],
            plans: "Develop formal internship partnership. Explore young entrepreneurs program.",
            thoughts: "Natural mentor figure. His business network could open doors for students.",
        },
        SeedDonor {
            id: "9",
            name: "Community First Bank",
            organization: None,
            email: "community@cfbank.com",
            phone: "(555) 901-2345",
            total_given: 140000,
            last_gift: ((2024, 1, 18), 20000),
            notes: "Local bank with strong community investment policy. Supports financial literacy programs. Decision maker is VP of Community Relations.",
            interactions: &[
                ((2024, 1, 18), InteractionType::Donation, "Financial literacy program grant - $20,000"),
                ((2023, 12, 5), InteractionType::Meeting, "Bank staff volunteered for money matters workshop"),
                ((2023, 10, 20), InteractionType::Email, "Invited to apply for community grant"),
            ],
            plans: "Submit grant for expanded financial education. Arrange student field trip to bank.",
            thoughts: "Stable corporate partner with aligned values. Potential for multi-year commitment.",
        },
        SeedDonor {
            id: "10",
            name: "Dr. Lisa Wang",
            organization: Some("Wang Medical Group"),
            email: "lwang@wangmedical.com",
            phone: "(555) 012-3456",
            total_given: 55000,
            last_gift: ((2023, 12, 20), 8000),
            notes: "Pediatrician who sees impact of education on health. Provides free health screenings for students. Morning person.",
            interactions: &[
                ((2023, 12, 20), InteractionType::Donation, "Year-end gift - $8,000"),
                ((2023, 11, 10), InteractionType::Meeting, "Conducted health workshop for families"),
                ((2023, 9, 5), InteractionType::Call, "Discussed mental health support needs"),
            ],
            plans: "Partner on wellness initiative. Apply for health-focused grant together.",
            thoughts: "Brings unique health perspective. Could help address holistic student needs.",
        },
        SeedDonor {
            id: "11",
            name: "Green Energy Solutions",
            organization: None,
            email: "support@greenenergy.com",
            phone: "(555) 123-4567",
            total_given: 200000,
            last_gift: ((2024, 1, 22), 40000),
            notes: "Renewable energy company supporting STEM and environmental education. CEO is City Tutors alum from 20 years ago.",
            interactions: &[
                ((2024, 1, 22), InteractionType::Donation, "STEM lab equipment - $40,000"),
                ((2024, 1, 10), InteractionType::Meeting, "CEO toured facilities with leadership team"),
                ((2023, 11, 25), InteractionType::Email, "Expressed interest in creating green jobs pipeline"),
            ],
            plans: "Develop environmental science curriculum. Create summer internship program.",
            thoughts: "Major growth potential. CEO's personal connection drives deep commitment.",
        },
        SeedDonor {
            id: "12",
            name: "David Martinez",
            organization: Some("Martinez & Sons"),
            email: "dmartinez@martinezandsons.com",
            phone: "(555) 234-5678",
            total_given: 72000,
            last_gift: ((2023, 11, 15), 6000),
            notes: "Family business owner, values work ethic and practical skills. Has hired several program graduates. Spanish speaker.",
            interactions: &[
                ((2023, 11, 15), InteractionType::Donation, "Vocational training support - $6,000"),
                ((2023, 10, 1), InteractionType::Meeting, "Hosted students for career shadow day"),
                ((2023, 8, 20), InteractionType::Call, "Offered apprenticeship opportunities"),
            ],
            plans: "Formalize apprenticeship program. Feature in employer spotlight.",
            thoughts: "Practical supporter who provides real job opportunities. Key to workforce development.",
        },
        SeedDonor {
            id: "13",
            name: "The Anderson Trust",
            organization: None,
            email: "trustees@andersontrust.org",
            phone: "(555) 345-6789",
            total_given: 300000,
            last_gift: ((2024, 1, 12), 75000),
            notes: "Major family trust supporting education and arts. Formal application process. Site visits required. Trustee meeting in May.",
            interactions: &[
                ((2024, 1, 12), InteractionType::Donation, "Annual grant disbursement - $75,000"),
                ((2023, 11, 30), InteractionType::Email, "Submitted comprehensive impact report"),
                ((2023, 9, 15), InteractionType::Meeting, "Trustees toured facilities and met students"),
            ],
            plans: "Prepare for May trustee meeting. Document student outcomes meticulously.",
            thoughts: "Largest institutional funder. Maintaining trust requires exceptional stewardship.",
        },
        SeedDonor {
            id: "14",
            name: "Jennifer Kim",
            organization: Some("Kim Architecture"),
            email: "jkim@kimarch.com",
            phone: "(555) 456-7890",
            total_given: 38000,
            last_gift: ((2023, 12, 5), 3000),
            notes: "Architect interested in creating inspiring learning spaces. Provided pro bono design consultation. Aesthetic focus.",
            interactions: &[
                ((2023, 12, 5), InteractionType::Donation, "Design and renovation fund - $3,000"),
                ((2023, 10, 20), InteractionType::Meeting, "Presented renovation concepts to board"),
                ((2023, 8, 15), InteractionType::Email, "Volunteered to lead design thinking workshop"),
            ],
            plans: "Engage in facility planning committee. Explore capital campaign leadership.",
            thoughts: "Brings unique design perspective. Could transform our physical spaces.",
        },
        SeedDonor {
            id: "15",
            name: "Citywide Insurance",
            organization: None,
            email: "giving@citywideins.com",
            phone: "(555) 567-8901",
            total_given: 165000,
            last_gift: ((2024, 1, 8), 25000),
            notes: "Insurance company with community giving program. Employees volunteer as math tutors. Decisions made quarterly.",
            interactions: &[
                ((2024, 1, 8), InteractionType::Donation, "Q1 community partnership - $25,000"),
                ((2023, 12, 12), InteractionType::Meeting, "Signed MOU for ongoing partnership"),
                ((2023, 10, 30), InteractionType::Email, "Recruited 15 employee volunteers"),
            ],
            plans: "Expand volunteer tutoring program. Apply for disaster preparedness grant.",
            thoughts: "Model corporate partner with engaged employees. Relationship deepening each year.",
        },
        SeedDonor {
            id: "16",
            name: "Thomas Brown",
            organization: Some("Brown Legal Services"),
            email: "tbrown@brownlegal.com",
            phone: "(555) 678-9012",
            total_given: 82000,
            last_gift: ((2023, 12, 28), 12000),
            notes: "Attorney providing pro bono legal services. Passionate about juvenile justice reform. Board member's close friend.",
            interactions: &[
                ((2023, 12, 28), InteractionType::Donation, "Year-end leadership gift - $12,000"),
                ((2023, 11, 5), InteractionType::Meeting, "Advised on legal compliance issues"),
                ((2023, 9, 22), InteractionType::Call, "Offered to mentor pre-law students"),
            ],
            plans: "Engage in governance committee. Cultivate for planned giving.",
            thoughts: "Strategic ally with legal expertise. Natural board candidate when opening arises.",
        },
        SeedDonor {
            id: "17",
            name: "Sustainable Future Fund",
            organization: None,
            email: "info@sustainablefuture.org",
            phone: "(555) 789-0123",
            total_given: 225000,
            last_gift: ((2024, 1, 30), 45000),
            notes: "Environmental foundation supporting green education initiatives. Requires environmental impact metrics. Very data-driven.",
            interactions: &[
                ((2024, 1, 30), InteractionType::Donation, "Green schools initiative - $45,000"),
                ((2024, 1, 15), InteractionType::Email, "Submitted environmental impact assessment"),
                ((2023, 11, 20), InteractionType::Meeting, "Presented sustainability plan to board"),
            ],
            plans: "Implement composting program. Document environmental education outcomes.",
            thoughts: "Pushing us toward sustainability. Aligns with younger donors' values.",
        },
        SeedDonor {
            id: "18",
            name: "Angela Davis",
            organization: Some("Davis Investments"),
            email: "adavis@davisinvest.com",
            phone: "(555) 890-1234",
            total_given: 67000,
            last_gift: ((2023, 11, 25), 9000),
            notes: "Investment advisor who teaches financial literacy. Grew up in the neighborhood. Prefers text communication.",
            interactions: &[
                ((2023, 11, 25), InteractionType::Donation, "Financial empowerment fund - $9,000"),
                ((2023, 10, 10), InteractionType::Meeting, "Led student investment club session"),
                ((2023, 8, 30), InteractionType::Email, "Proposed stock market simulation program"),
            ],
            plans: "Launch investment club with her guidance. Feature in alumni success stories.",
            thoughts: "Role model for students. Her local roots make her relatable and inspiring.",
        },
        SeedDonor {
            id: "19",
            name: "Peter Wilson",
            organization: None,
            email: "pwilson@email.com",
            phone: "(555) 901-2345",
            total_given: 42000,
            last_gift: ((2023, 12, 10), 4000),
            notes: "Quiet donor who gives annually. Lost son to violence, supports conflict resolution programs. Very private person.",
            interactions: &[
                ((2023, 12, 10), InteractionType::Donation, "Peace and conflict resolution - $4,000"),
                ((2023, 10, 15), InteractionType::Email, "Thanked for supporting peer mediation training"),
                ((2023, 6, 20), InteractionType::Call, "Annual check-in, brief but warm"),
            ],
            plans: "Continue gentle cultivation. Honor his son's memory in program naming.",
            thoughts: "Deeply personal connection. Handle with extra sensitivity and respect.",
        },
        SeedDonor {
            id: "20",
            name: "Excellence Foundation",
            organization: None,
            email: "grants@excellencefdn.org",
            phone: "(555) 012-3456",
            total_given: 350000,
            last_gift: ((2024, 1, 2), 100000),
            notes: "National foundation with focus on educational excellence. Highly competitive grants. Requires rigorous evaluation.",
            interactions: &[
                ((2024, 1, 2), InteractionType::Donation, "Excellence in tutoring grant - $100,000"),
                ((2023, 11, 15), InteractionType::Email, "Submitted 50-page grant proposal"),
                ((2023, 9, 30), InteractionType::Meeting, "Program officer site visit with external evaluator"),
            ],
            plans: "Maintain exceptional program quality. Prepare for mid-year evaluation visit.",
            thoughts: "Prestigious funder that validates our work. Success here opens other doors.",
        },
    ]
    .into_iter()
    .map(SeedDonor::build)
    .collect()
}
