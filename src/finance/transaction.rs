use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forms::{ValidationError, non_empty, require};
use crate::storage::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Cancelled,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    /// Signed: expenses are stored negative.
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for Transaction {
    const STORAGE_KEY: &'static str = "financialTransactions";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }

    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.description.to_lowercase().contains(&term) || self.category.to_lowercase().contains(&term)
    }
}

pub const DEFAULT_CATEGORY: &str = "Donations";

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    /// Entered unsigned; the sign follows `kind`.
    pub amount: Decimal,
    pub kind: TransactionType,
    pub category: String,
    pub subcategory: Option<String>,
    pub source: Option<String>,
    pub recurring: bool,
    pub status: TransactionStatus,
    pub notes: Option<String>,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: Decimal::ZERO,
            kind: TransactionType::Income,
            category: DEFAULT_CATEGORY.to_string(),
            subcategory: None,
            source: None,
            recurring: false,
            status: TransactionStatus::Completed,
            notes: None,
        }
    }
}

impl TransactionDraft {
    pub fn income(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn expense(description: impl Into<String>, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            kind: TransactionType::Expense,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn into_transaction(self, id: String, date: DateTime<Utc>) -> Result<Transaction, ValidationError> {
        let description = require(&self.description, "description")?;
        if self.amount.is_zero() {
            return Err(ValidationError::MissingField("amount"));
        }
        let amount = match self.kind {
            TransactionType::Expense => -self.amount.abs(),
            TransactionType::Income => self.amount.abs(),
        };
        let category = if self.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category
        };

        Ok(Transaction {
            id,
            date,
            description,
            amount,
            kind: self.kind,
            category,
            subcategory: non_empty(self.subcategory),
            source: non_empty(self.source),
            donor_id: None,
            recurring: self.recurring,
            status: self.status,
            notes: non_empty(self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn expense_amount_is_stored_negative() {
        let tx = TransactionDraft::expense("Office Rent", dec!(4500), "Operations")
            .into_transaction("t".to_string(), now())
            .unwrap();

        assert_eq!(tx.amount, dec!(-4500));
        assert!(tx.is_expense());
    }

    #[test]
    fn income_amount_is_stored_positive_even_if_entered_negative() {
        let tx = TransactionDraft::income("Gift", dec!(-250))
            .into_transaction("t".to_string(), now())
            .unwrap();

        assert_eq!(tx.amount, dec!(250));
    }

    #[test]
    fn missing_description_or_amount_is_rejected() {
        let no_description = TransactionDraft::income("", dec!(10)).into_transaction("t".to_string(), now());
        let no_amount = TransactionDraft::income("Gift", Decimal::ZERO).into_transaction("t".to_string(), now());

        assert_eq!(no_description, Err(ValidationError::MissingField("description")));
        assert_eq!(no_amount, Err(ValidationError::MissingField("amount")));
    }

    #[test]
    fn draft_defaults_to_completed_donation() {
        let tx = TransactionDraft::income("Gift", dec!(10))
            .into_transaction("t".to_string(), now())
            .unwrap();

        assert_eq!(tx.category, "Donations");
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert!(!tx.recurring);
    }

    #[test]
    fn amount_serializes_as_json_number() {
        let tx = TransactionDraft::expense("Utilities", dec!(1200), "Operations")
            .into_transaction("t".to_string(), now())
            .unwrap();

        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["amount"].as_f64(), Some(-1200.0));
        assert_eq!(json["type"], "expense");
    }

    #[test]
    fn search_matches_description_or_category() {
        let tx = TransactionDraft::expense("Monthly Utilities", dec!(1200), "Operations")
            .into_transaction("t".to_string(), now())
            .unwrap();

        assert!(tx.matches("utilities"));
        assert!(tx.matches("OPER"));
        assert!(!tx.matches("gala"));
    }
}
