pub mod budget;
pub mod export;
pub mod report;
pub mod seed;
pub mod transaction;

use chrono::{DateTime, Utc};

use crate::forms::CollectionError;
use crate::storage::{RecordStore, Repository, StoreError, new_record_id};

pub use budget::{Budget, BudgetAnalysis, BudgetPeriod, BudgetStatus, analyze_budget, analyze_budgets};
pub use export::{CSV_HEADER, ExportError, report_file_name, to_csv, write_csv};
pub use report::{
    DONATIONS_CATEGORY, DonationSummary, Financials, TransactionFilter, ViewPeriod, categories, donation_breakdown,
    financials,
};
pub use transaction::{Transaction, TransactionDraft, TransactionStatus, TransactionType};

pub struct Ledger {
    transactions: RecordStore<Transaction>,
    budgets: RecordStore<Budget>,
}

impl Ledger {
    pub fn open<T, B>(transactions: T, budgets: B) -> Result<Self, StoreError>
    where
        T: Repository<Transaction> + 'static,
        B: Repository<Budget> + 'static,
    {
        Ok(Self {
            transactions: RecordStore::open(transactions, seed::sample_transactions)?,
            budgets: RecordStore::open(budgets, seed::sample_budgets)?,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.records()
    }

    pub fn budgets(&self) -> &[Budget] {
        self.budgets.records()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    /// Records the transaction at the front of the ledger.
    pub fn add(&mut self, draft: TransactionDraft, date: DateTime<Utc>) -> Result<Transaction, CollectionError> {
        let tx = draft.into_transaction(new_record_id(), date)?;
        self.transactions.prepend(tx.clone())?;
        tracing::info!("Recorded {} {} ({})", tx.kind.label(), tx.amount, tx.description);
        Ok(tx)
    }

    /// Replaces the editable fields of a transaction in place. The donor link
    /// is kept; `None` when no transaction has `id`.
    pub fn update(
        &mut self,
        id: &str,
        draft: TransactionDraft,
        date: DateTime<Utc>,
    ) -> Result<Option<Transaction>, CollectionError> {
        let Some(existing) = self.transactions.get(id) else {
            return Ok(None);
        };
        let donor_id = existing.donor_id.clone();
        let mut tx = draft.into_transaction(id.to_string(), date)?;
        tx.donor_id = donor_id;
        self.transactions.replace(tx.clone())?;
        tracing::info!("Updated transaction {}", id);
        Ok(Some(tx))
    }

    pub fn remove(&mut self, id: &str) -> Result<Option<Transaction>, StoreError> {
        let removed = self.transactions.remove(id)?;
        if removed.is_some() {
            tracing::info!("Deleted transaction {}", id);
        }
        Ok(removed)
    }

    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter.apply(self.transactions())
    }

    pub fn financials(&self, filter: &TransactionFilter) -> Financials {
        financials(self.transactions(), filter)
    }

    pub fn donation_breakdown(&self, filter: &TransactionFilter) -> Vec<DonationSummary> {
        donation_breakdown(self.transactions(), filter)
    }

    pub fn budget_analysis(&self) -> Vec<BudgetAnalysis<'_>> {
        analyze_budgets(self.budgets())
    }

    pub fn categories(&self) -> Vec<String> {
        categories(self.transactions())
    }

    pub fn export_csv(&self, filter: &TransactionFilter) -> String {
        to_csv(&self.filtered(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{YearMonth, utc_day};
    use crate::storage::{KeyValueStore, MemoryStore, StoredRepository};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn open_ledger(store: &Arc<MemoryStore>) -> Ledger {
        let kv: Arc<dyn KeyValueStore> = store.clone();
        Ledger::open(StoredRepository::new(kv.clone()), StoredRepository::new(kv)).unwrap()
    }

    fn february() -> TransactionFilter {
        TransactionFilter::monthly(YearMonth::new(2024, 2).unwrap())
    }

    #[test]
    fn sample_february_totals() {
        let ledger = open_ledger(&Arc::new(MemoryStore::new()));

        let totals = ledger.financials(&february());

        assert_eq!(totals.income, dec!(158500));
        assert_eq!(totals.expenses, dec!(57200));
        assert_eq!(totals.net_income, dec!(101300));
        assert_eq!(totals.income_change, Decimal::ZERO);
    }

    #[test]
    fn sample_donations_grouped_by_subcategory() {
        let ledger = open_ledger(&Arc::new(MemoryStore::new()));

        let breakdown = ledger.donation_breakdown(&february());
        let sources: Vec<&str> = breakdown.iter().map(|d| d.source.as_str()).collect();

        assert_eq!(sources, vec!["Major Gifts", "Corporate", "Board", "Individual"]);
        assert_eq!(breakdown[1].count, 2);
        assert_eq!(breakdown[1].average_gift, dec!(30000));
    }

    #[test]
    fn add_prepends_and_persists() {
        let memory = Arc::new(MemoryStore::new());
        let mut ledger = open_ledger(&memory);

        let tx = ledger
            .add(TransactionDraft::income("Spring appeal", dec!(2500)), utc_day(2024, 2, 29))
            .unwrap();

        assert_eq!(ledger.transactions()[0].id, tx.id);
        let reopened = open_ledger(&memory);
        assert_eq!(reopened.transactions().len(), 13);
        assert_eq!(reopened.get(&tx.id), Some(&tx));
    }

    #[test]
    fn add_rejects_missing_description() {
        let mut ledger = open_ledger(&Arc::new(MemoryStore::new()));

        let result = ledger.add(TransactionDraft::income("  ", dec!(10)), utc_day(2024, 2, 1));

        assert!(matches!(result, Err(CollectionError::Validation(_))));
        assert_eq!(ledger.transactions().len(), 12);
    }

    #[test]
    fn update_replaces_in_place_and_persists() {
        let memory = Arc::new(MemoryStore::new());
        let mut ledger = open_ledger(&memory);
        let draft = TransactionDraft::expense("Anderson Trust refund", dec!(1500), "Donations");

        let updated = ledger.update("1", draft, utc_day(2024, 2, 2)).unwrap().unwrap();

        assert_eq!(updated.amount, dec!(-1500));
        assert_eq!(updated.donor_id.as_deref(), Some("anderson-trust"));
        assert_eq!(ledger.transactions()[0].id, "1");
        assert_eq!(ledger.transactions().len(), 12);
        let reopened = open_ledger(&memory);
        assert_eq!(reopened.get("1"), Some(&updated));
    }

    #[test]
    fn update_unknown_or_invalid_changes_nothing() {
        let mut ledger = open_ledger(&Arc::new(MemoryStore::new()));
        let before = ledger.get("2").cloned();

        let missing = ledger.update("missing", TransactionDraft::income("Gift", dec!(5)), utc_day(2024, 2, 1));
        let invalid = ledger.update("2", TransactionDraft::income("Gift", Decimal::ZERO), utc_day(2024, 2, 1));

        assert_eq!(missing.unwrap(), None);
        assert!(matches!(invalid, Err(CollectionError::Validation(_))));
        assert_eq!(ledger.get("2").cloned(), before);
    }

    #[test]
    fn remove_then_filter_excludes_transaction() {
        let mut ledger = open_ledger(&Arc::new(MemoryStore::new()));

        let removed = ledger.remove("1").unwrap();

        assert!(removed.is_some());
        assert!(ledger.filtered(&february()).iter().all(|tx| tx.id != "1"));
        assert_eq!(ledger.remove("1").unwrap(), None);
    }

    #[test]
    fn sample_budgets_are_all_good() {
        let ledger = open_ledger(&Arc::new(MemoryStore::new()));

        let analysis = ledger.budget_analysis();

        assert_eq!(analysis.len(), 5);
        assert!(analysis.iter().all(|a| a.status == BudgetStatus::Good));
    }

    #[test]
    fn categories_in_first_seen_order() {
        let ledger = open_ledger(&Arc::new(MemoryStore::new()));

        assert_eq!(
            ledger.categories(),
            vec!["Donations", "Personnel", "Operations", "Programs", "Fundraising"]
        );
    }

    #[test]
    fn export_filtered_by_category() {
        let ledger = open_ledger(&Arc::new(MemoryStore::new()));

        let csv = ledger.export_csv(&february().with_category("Fundraising"));

        assert_eq!(
            csv.lines().collect::<Vec<_>>(),
            vec![
                "Date,Description,Amount,Type,Category,Status",
                "2024-02-22,Spring Gala Venue Deposit,-5000,expense,Fundraising,completed",
            ]
        );
    }
}
