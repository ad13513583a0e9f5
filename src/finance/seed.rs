use rust_decimal::Decimal;

use super::budget::{Budget, BudgetPeriod};
use super::transaction::{Transaction, TransactionStatus, TransactionType};
use crate::calendar::utc_day;

struct SeedTransaction {
    id: &'static str,
    day: u32,
    description: &'static str,
    amount: i64,
    category: &'static str,
    subcategory: &'static str,
    source: Option<&'static str>,
    donor_id: Option<&'static str>,
    recurring: bool,
    notes: Option<&'static str>,
}

impl SeedTransaction {
    fn build(self) -> Transaction {
        let kind = if self.amount < 0 {
            TransactionType::Expense
        } else {
            TransactionType::Income
        };
        Transaction {
            id: self.id.to_string(),
            date: utc_day(2024, 2, self.day),
            description: self.description.to_string(),
            amount: Decimal::from(self.amount),
            kind,
            category: self.category.to_string(),
            subcategory: Some(self.subcategory.to_string()),
            source: self.source.map(str::to_string),
            donor_id: self.donor_id.map(str::to_string),
            recurring: self.recurring,
            status: TransactionStatus::Completed,
            notes: self.notes.map(str::to_string),
        }
    }
}

pub fn sample_transactions() -> Vec<Transaction> {
    [
        SeedTransaction {
            id: "1",
            day: 1,
            description: "Major Donor Contribution - Anderson Trust",
            amount: 75000,
            category: "Donations",
            subcategory: "Major Gifts",
            source: Some("Foundation Grant"),
            donor_id: Some("anderson-trust"),
            recurring: false,
            notes: Some("Annual capacity building grant"),
        },
        SeedTransaction {
            id: "2",
            day: 3,
            description: "Staff Salaries - February",
            amount: -28500,
            category: "Personnel",
            subcategory: "Salaries",
            source: None,
            donor_id: None,
            recurring: true,
            notes: Some("8 full-time staff members"),
        },
        SeedTransaction {
            id: "3",
            day: 5,
            description: "Corporate Sponsorship - Tech Innovators Inc.",
            amount: 40000,
            category: "Donations",
            subcategory: "Corporate",
            source: Some("Corporate Partnership"),
            donor_id: Some("tech-innovators"),
            recurring: false,
            notes: Some("STEM lab equipment sponsorship"),
        },
        SeedTransaction {
            id: "4",
            day: 7,
            description: "Office Rent - February",
            amount: -4500,
            category: "Operations",
            subcategory: "Facilities",
            source: None,
            donor_id: None,
            recurring: true,
            notes: None,
        },
        SeedTransaction {
            id: "5",
            day: 10,
            description: "Educational Materials Purchase",
            amount: -2800,
            category: "Programs",
            subcategory: "Supplies",
            source: None,
            donor_id: None,
            recurring: false,
            notes: Some("Books, workbooks, and digital resources"),
        },
        SeedTransaction {
            id: "6",
            day: 12,
            description: "Individual Donations - Online Portal",
            amount: 8500,
            category: "Donations",
            subcategory: "Individual",
            source: Some("Online Donations"),
            donor_id: None,
            recurring: false,
            notes: Some("45 individual donors"),
        },
        SeedTransaction {
            id: "7",
            day: 15,
            description: "Insurance Premiums - Quarterly",
            amount: -3200,
            category: "Operations",
            subcategory: "Insurance",
            source: None,
            donor_id: None,
            recurring: true,
            notes: None,
        },
        SeedTransaction {
            id: "8",
            day: 18,
            description: "Community First Bank Grant",
            amount: 20000,
            category: "Donations",
            subcategory: "Corporate",
            source: Some("Bank Grant"),
            donor_id: Some("community-first-bank"),
            recurring: false,
            notes: Some("Financial literacy program funding"),
        },
        SeedTransaction {
            id: "9",
            day: 20,
            description: "Technology Equipment",
            amount: -12000,
            category: "Programs",
            subcategory: "Equipment",
            source: None,
            donor_id: None,
            recurring: false,
            notes: Some("20 new tablets for students"),
        },
        SeedTransaction {
            id: "10",
            day: 22,
            description: "Spring Gala Venue Deposit",
            amount: -5000,
            category: "Fundraising",
            subcategory: "Events",
            source: None,
            donor_id: None,
            recurring: false,
            notes: Some("Grand Ballroom Hotel - March 15"),
        },
        SeedTransaction {
            id: "11",
            day: 25,
            description: "Monthly Utilities",
            amount: -1200,
            category: "Operations",
            subcategory: "Utilities",
            source: None,
            donor_id: None,
            recurring: true,
            notes: None,
        },
        SeedTransaction {
            id: "12",
            day: 28,
            description: "Board Member Donations",
            amount: 15000,
            category: "Donations",
            subcategory: "Board",
            source: Some("Board Giving"),
            donor_id: None,
            recurring: false,
            notes: Some("Quarterly board member contributions"),
        },
    ]
    .into_iter()
    .map(SeedTransaction::build)
    .collect()
}

pub fn sample_budgets() -> Vec<Budget> {
    [
        ("1", "Personnel", 300000, 57000),
        ("2", "Programs", 150000, 14800),
        ("3", "Operations", 75000, 8900),
        ("4", "Fundraising", 25000, 5000),
        ("5", "Administration", 20000, 2100),
    ]
    .into_iter()
    .map(|(id, category, budgeted, spent)| Budget {
        id: id.to_string(),
        category: category.to_string(),
        budgeted: Decimal::from(budgeted),
        spent: Decimal::from(spent),
        period: BudgetPeriod::Yearly,
        year: 2024,
        month: None,
    })
    .collect()
}
