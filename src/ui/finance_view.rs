use super::{format_change, format_currency, truncate_to_width};
use crate::finance::{BudgetAnalysis, BudgetStatus, DonationSummary, Financials, Transaction, TransactionFilter, ViewPeriod};
use crate::calendar::YearMonth;

fn period_title(filter: &TransactionFilter) -> String {
    match filter.period {
        ViewPeriod::Yearly => format!("Year {}", filter.year),
        ViewPeriod::Monthly => YearMonth::new(filter.year, filter.month)
            .map(|m| m.name())
            .unwrap_or_else(|| format!("{}-{}", filter.year, filter.month)),
    }
}

pub fn format_summary(filter: &TransactionFilter, totals: &Financials) -> String {
    [
        format!("Finances: {}", period_title(filter)),
        format!(
            "Income      {:>12}  ({} vs previous)",
            format_currency(totals.income),
            format_change(totals.income_change)
        ),
        format!(
            "Expenses    {:>12}  ({} vs previous)",
            format_currency(totals.expenses),
            format_change(totals.expense_change)
        ),
        format!("Net income  {:>12}", format_currency(totals.net_income)),
    ]
    .join("\n")
}

fn transaction_line(tx: &Transaction) -> String {
    let line = format!(
        "{}  {:>10}  {:<12} {:<9} {}",
        tx.date.format("%Y-%m-%d"),
        format_currency(tx.amount),
        tx.category,
        tx.status.label(),
        tx.description
    );
    truncate_to_width(&line, 110)
}

pub fn format_transactions(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions for this period.".to_string();
    }
    transactions
        .iter()
        .map(|tx| transaction_line(tx))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_breakdown(breakdown: &[DonationSummary]) -> String {
    let mut lines = vec!["Donations by source".to_string()];
    if breakdown.is_empty() {
        lines.push("  none".to_string());
    }
    for summary in breakdown {
        lines.push(format!(
            "  {:<14} {:>10}  {:>5}%  {} gifts, avg {}",
            summary.source,
            format_currency(summary.amount),
            summary.percentage.round_dp(1),
            summary.count,
            format_currency(summary.average_gift)
        ));
    }
    lines.join("\n")
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => "good",
        BudgetStatus::Warning => "warning",
        BudgetStatus::Over => "over",
    }
}

pub fn format_budgets(analysis: &[BudgetAnalysis<'_>]) -> String {
    let mut lines = vec!["Budgets".to_string()];
    for item in analysis {
        lines.push(format!(
            "  {:<14} {:>10} of {:>10}  {:>5}%  {:>10} left  {}",
            item.budget.category,
            format_currency(item.budget.spent),
            format_currency(item.budget.budgeted),
            item.percentage.round_dp(1),
            format_currency(item.remaining),
            status_label(item.status)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::utc_day;
    use crate::finance::{Budget, BudgetPeriod, TransactionDraft, analyze_budget};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_shows_totals_and_change() {
        let filter = TransactionFilter::monthly(YearMonth::new(2024, 2).unwrap());
        let totals = Financials {
            income: dec!(75000),
            expenses: dec!(28500),
            net_income: dec!(46500),
            income_change: dec!(50),
            expense_change: Decimal::ZERO,
        };

        let text = format_summary(&filter, &totals);

        assert!(text.starts_with("Finances: February 2024"));
        assert!(text.contains("$75,000  (+50% vs previous)"));
        assert!(text.contains("Net income       $46,500"));
    }

    #[test]
    fn transactions_show_signed_amounts() {
        let tx = TransactionDraft::expense("Office Rent", dec!(4500), "Operations")
            .into_transaction("4".to_string(), utc_day(2024, 2, 7))
            .unwrap();

        let text = format_transactions(&[&tx]);

        assert!(text.starts_with("2024-02-07     -$4,500  Operations"));
        assert!(text.ends_with("Office Rent"));
    }

    #[test]
    fn budget_status_is_labelled() {
        let budget = Budget {
            id: "1".to_string(),
            category: "Programs".to_string(),
            budgeted: dec!(1000),
            spent: dec!(1200),
            period: BudgetPeriod::Yearly,
            year: 2024,
            month: None,
        };

        let text = format_budgets(&[analyze_budget(&budget)]);

        assert!(text.contains("-$200 left"));
        assert!(text.ends_with("over"));
    }
}
