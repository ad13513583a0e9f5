use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;
use crate::calendar::YearMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPeriod {
    Monthly,
    Yearly,
}

/// The finances view's filter: a period, then optional search and category.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    pub period: ViewPeriod,
    pub year: i32,
    /// 1-based. Yearly views keep the selected month for naming exports.
    pub month: u32,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn monthly(month: YearMonth) -> Self {
        Self {
            period: ViewPeriod::Monthly,
            year: month.year(),
            month: month.month(),
            search: None,
            category: None,
        }
    }

    pub fn yearly(year: i32) -> Self {
        Self {
            period: ViewPeriod::Yearly,
            year,
            month: 1,
            search: None,
            category: None,
        }
    }

    /// Selects `month` without changing the period.
    pub fn in_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into()).filter(|t: &String| !t.is_empty());
        self
    }

    /// `None` or "all" disables category filtering.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into()).filter(|c: &String| c != "all");
        self
    }

    fn in_period(&self, tx: &Transaction, year: i32, month: u32) -> bool {
        let date = tx.date.date_naive();
        let in_range = match self.period {
            ViewPeriod::Monthly => date.year() == year && date.month() == month,
            ViewPeriod::Yearly => date.year() == year,
        };
        in_range && tx.is_completed()
    }

    /// The month or year before this filter's period.
    fn previous_period(&self) -> (i32, u32) {
        match self.period {
            ViewPeriod::Monthly => YearMonth::new(self.year, self.month)
                .map(|m| m.prev())
                .map(|m| (m.year(), m.month()))
                .unwrap_or((self.year, self.month)),
            ViewPeriod::Yearly => (self.year - 1, self.month),
        }
    }

    /// Completed transactions in the period that pass search and category,
    /// newest first.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut filtered: Vec<&Transaction> = transactions
            .iter()
            .filter(|tx| self.in_period(tx, self.year, self.month))
            .filter(|tx| self.search.as_deref().is_none_or(|term| tx.matches(term)))
            .filter(|tx| self.category.as_deref().is_none_or(|c| tx.category == c))
            .collect();
        filtered.sort_by(|a, b| b.date.cmp(&a.date));
        filtered
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Financials {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net_income: Decimal,
    /// Percent change against the previous period; 0 when that period had none.
    pub income_change: Decimal,
    pub expense_change: Decimal,
}

fn totals<'a>(transactions: impl Iterator<Item = &'a Transaction> + Clone) -> (Decimal, Decimal) {
    let income: Decimal = transactions.clone().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expenses: Decimal = transactions.filter(|t| t.is_expense()).map(|t| t.amount.abs()).sum();
    (income, expenses)
}

fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous > Decimal::ZERO {
        (current - previous) / previous * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// The previous period only honours the period filter, not search or category.
pub fn financials(transactions: &[Transaction], filter: &TransactionFilter) -> Financials {
    let current = filter.apply(transactions);
    let (income, expenses) = totals(current.iter().copied());

    let (prev_year, prev_month) = filter.previous_period();
    let previous = transactions.iter().filter(|tx| filter.in_period(tx, prev_year, prev_month));
    let (prev_income, prev_expenses) = totals(previous);

    Financials {
        income,
        expenses,
        net_income: income - expenses,
        income_change: percent_change(income, prev_income),
        expense_change: percent_change(expenses, prev_expenses),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonationSummary {
    pub source: String,
    pub amount: Decimal,
    pub count: usize,
    pub average_gift: Decimal,
    pub percentage: Decimal,
}

pub const DONATIONS_CATEGORY: &str = "Donations";

/// Income in the "Donations" category grouped by subcategory, largest first.
pub fn donation_breakdown(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<DonationSummary> {
    let donations: Vec<&Transaction> = filter
        .apply(transactions)
        .into_iter()
        .filter(|t| t.is_income() && t.category == DONATIONS_CATEGORY)
        .collect();

    let mut order = Vec::new();
    let mut groups: HashMap<String, (Decimal, usize)> = HashMap::new();
    for donation in &donations {
        let key = donation.subcategory.clone().unwrap_or_else(|| "Other".to_string());
        let entry = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (Decimal::ZERO, 0)
        });
        entry.0 += donation.amount;
        entry.1 += 1;
    }

    let total: Decimal = donations.iter().map(|d| d.amount).sum();

    let mut summaries: Vec<DonationSummary> = order
        .into_iter()
        .filter_map(|source| {
            let (amount, count) = groups.remove(&source)?;
            Some(DonationSummary {
                average_gift: amount / Decimal::from(count),
                percentage: percent_of(amount, total),
                source,
                amount,
                count,
            })
        })
        .collect();
    summaries.sort_by(|a, b| b.amount.cmp(&a.amount));
    summaries
}

fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        part / total * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Distinct categories in first-seen order.
pub fn categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = Vec::new();
    for tx in transactions {
        if !seen.contains(&tx.category) {
            seen.push(tx.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::utc_day;
    use crate::finance::transaction::{TransactionDraft, TransactionStatus};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn feb() -> TransactionFilter {
        TransactionFilter::monthly(YearMonth::new(2024, 2).unwrap())
    }

    fn tx(id: &str, draft: TransactionDraft, day: (i32, u32, u32)) -> Transaction {
        draft.into_transaction(id.to_string(), utc_day(day.0, day.1, day.2)).unwrap()
    }

    fn donation(id: &str, amount: Decimal, subcategory: Option<&str>, day: (i32, u32, u32)) -> Transaction {
        let mut draft = TransactionDraft::income(format!("Gift {}", id), amount);
        draft.subcategory = subcategory.map(String::from);
        tx(id, draft, day)
    }

    #[test]
    fn month_with_one_income_and_one_expense() {
        let transactions = vec![
            tx("1", TransactionDraft::income("Anderson Trust", dec!(75000)), (2024, 2, 1)),
            tx("2", TransactionDraft::expense("Staff Salaries", dec!(28500), "Personnel"), (2024, 2, 3)),
        ];

        let result = financials(&transactions, &feb());

        assert_eq!(result.income, dec!(75000));
        assert_eq!(result.expenses, dec!(28500));
        assert_eq!(result.net_income, dec!(46500));
    }

    #[test]
    fn pending_and_other_month_transactions_are_excluded() {
        let mut pending = TransactionDraft::income("Pledge", dec!(1000));
        pending.status = TransactionStatus::Pending;
        let transactions = vec![
            tx("1", pending, (2024, 2, 10)),
            tx("2", TransactionDraft::income("March gift", dec!(500)), (2024, 3, 1)),
            tx("3", TransactionDraft::income("Last year", dec!(500)), (2023, 2, 10)),
        ];

        assert!(feb().apply(&transactions).is_empty());
    }

    #[test]
    fn filtered_list_is_newest_first() {
        let transactions = vec![
            tx("early", TransactionDraft::income("a", dec!(1)), (2024, 2, 1)),
            tx("late", TransactionDraft::income("b", dec!(1)), (2024, 2, 20)),
        ];

        let ids: Vec<&str> = feb().apply(&transactions).iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn search_and_category_narrow_the_list() {
        let transactions = vec![
            tx("1", TransactionDraft::expense("Office Rent", dec!(4500), "Operations"), (2024, 2, 7)),
            tx("2", TransactionDraft::expense("Insurance", dec!(3200), "Operations"), (2024, 2, 15)),
            tx("3", TransactionDraft::expense("Tablets", dec!(12000), "Programs"), (2024, 2, 20)),
        ];

        let by_search = feb().with_search("rent").apply(&transactions);
        let by_category = feb().with_category("Operations").apply(&transactions);
        let all = feb().with_category("all").apply(&transactions);

        assert_eq!(by_search.len(), 1);
        assert_eq!(by_category.len(), 2);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn yearly_view_covers_whole_year() {
        let transactions = vec![
            tx("1", TransactionDraft::income("Jan", dec!(100)), (2024, 1, 5)),
            tx("2", TransactionDraft::income("Dec", dec!(200)), (2024, 12, 31)),
            tx("3", TransactionDraft::income("Prior", dec!(300)), (2023, 12, 31)),
        ];

        let result = financials(&transactions, &TransactionFilter::yearly(2024));

        assert_eq!(result.income, dec!(300));
        assert_eq!(result.income_change, Decimal::ZERO);
    }

    #[test]
    fn change_is_measured_against_previous_month() {
        let transactions = vec![
            tx("1", TransactionDraft::income("Jan", dec!(100)), (2024, 1, 31)),
            tx("2", TransactionDraft::income("Feb", dec!(150)), (2024, 2, 1)),
            tx("3", TransactionDraft::expense("Jan rent", dec!(200), "Operations"), (2024, 1, 15)),
            tx("4", TransactionDraft::expense("Feb rent", dec!(100), "Operations"), (2024, 2, 15)),
        ];

        let result = financials(&transactions, &feb());

        assert_eq!(result.income_change, dec!(50));
        assert_eq!(result.expense_change, dec!(-50));
    }

    #[test]
    fn january_compares_with_previous_december() {
        let transactions = vec![
            tx("1", TransactionDraft::income("Dec", dec!(200)), (2023, 12, 31)),
            tx("2", TransactionDraft::income("Jan", dec!(100)), (2024, 1, 10)),
        ];
        let filter = TransactionFilter::monthly(YearMonth::new(2024, 1).unwrap());

        assert_eq!(financials(&transactions, &filter).income_change, dec!(-50));
    }

    #[test]
    fn donation_breakdown_groups_by_subcategory() {
        let transactions = vec![
            donation("1", dec!(75000), Some("Major Gifts"), (2024, 2, 1)),
            donation("2", dec!(40000), Some("Corporate"), (2024, 2, 5)),
            donation("3", dec!(20000), Some("Corporate"), (2024, 2, 18)),
            donation("4", dec!(5000), None, (2024, 2, 19)),
            tx("5", TransactionDraft::expense("Rent", dec!(4500), "Operations"), (2024, 2, 7)),
        ];

        let breakdown = donation_breakdown(&transactions, &feb());

        let sources: Vec<&str> = breakdown.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["Major Gifts", "Corporate", "Other"]);
        assert_eq!(breakdown[1].count, 2);
        assert_eq!(breakdown[1].average_gift, dec!(30000));
        assert_eq!(breakdown[1].percentage.round_dp(2), dec!(42.86));
        assert_eq!(breakdown[2].percentage.round_dp(2), dec!(3.57));
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let transactions = vec![
            tx("1", TransactionDraft::income("a", dec!(1)), (2024, 2, 1)),
            tx("2", TransactionDraft::expense("b", dec!(1), "Personnel"), (2024, 2, 1)),
            tx("3", TransactionDraft::income("c", dec!(1)), (2024, 2, 1)),
        ];

        assert_eq!(categories(&transactions), vec!["Donations", "Personnel"]);
    }

    proptest! {
        #[test]
        fn totals_do_not_depend_on_order(amounts in proptest::collection::vec(-1_000_000i64..1_000_000, 1..30)) {
            let transactions: Vec<Transaction> = amounts
                .iter()
                .enumerate()
                .filter(|(_, a)| **a != 0)
                .map(|(i, a)| {
                    let value = Decimal::new(a.abs(), 2);
                    let draft = if *a > 0 {
                        TransactionDraft::income("in", value)
                    } else {
                        TransactionDraft::expense("out", value, "Operations")
                    };
                    tx(&i.to_string(), draft, (2024, 2, 1 + (i as u32 % 28)))
                })
                .collect();
            let mut shuffled = transactions.clone();
            shuffled.reverse();

            let expected_income: Decimal = amounts.iter().filter(|a| **a > 0).map(|a| Decimal::new(*a, 2)).sum();
            let expected_expenses: Decimal = amounts.iter().filter(|a| **a < 0).map(|a| Decimal::new(-*a, 2)).sum();

            let forward = financials(&transactions, &feb());
            let backward = financials(&shuffled, &feb());

            prop_assert_eq!(forward.income, expected_income);
            prop_assert_eq!(forward.expenses, expected_expenses);
            prop_assert_eq!(forward, backward);
        }
    }
}
