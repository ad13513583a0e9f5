use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub period: BudgetPeriod,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

impl Record for Budget {
    const STORAGE_KEY: &'static str = "financialBudgets";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Good,
    Warning,
    Over,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAnalysis<'a> {
    pub budget: &'a Budget,
    pub percentage: Decimal,
    pub remaining: Decimal,
    pub status: BudgetStatus,
}

const WARNING_PERCENT: Decimal = dec!(90);
const OVER_PERCENT: Decimal = Decimal::ONE_HUNDRED;

pub fn analyze_budget(budget: &Budget) -> BudgetAnalysis<'_> {
    let percentage = if budget.budgeted > Decimal::ZERO {
        budget.spent / budget.budgeted * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let status = if percentage > OVER_PERCENT {
        BudgetStatus::Over
    } else if percentage > WARNING_PERCENT {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    };

    BudgetAnalysis {
        budget,
        percentage,
        remaining: budget.budgeted - budget.spent,
        status,
    }
}

pub fn analyze_budgets(budgets: &[Budget]) -> Vec<BudgetAnalysis<'_>> {
    budgets.iter().map(analyze_budget).collect()
}
