pub mod donor;
pub mod seed;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::storage::{Repository, SharedStore, StoreError, load_or_seed};

pub use donor::{ACTIVE_GIFT_DAYS, Donor, Interaction, InteractionType, RECENT_GIFT_DAYS};

#[derive(Debug, Clone, PartialEq)]
pub struct DonorStats {
    pub total_donors: usize,
    pub total_raised: Decimal,
    /// Total raised divided by donor count, 0 when there are no donors.
    pub average_gift: Decimal,
    pub recent_donors: usize,
    pub active_donors: usize,
}

pub fn donor_stats(donors: &[Donor], now: DateTime<Utc>) -> DonorStats {
    let total_raised: Decimal = donors.iter().map(|d| d.total_given).sum();
    let average_gift = if donors.is_empty() {
        Decimal::ZERO
    } else {
        total_raised / Decimal::from(donors.len())
    };

    DonorStats {
        total_donors: donors.len(),
        total_raised,
        average_gift,
        recent_donors: donors.iter().filter(|d| d.is_recent(now)).count(),
        active_donors: donors.iter().filter(|d| d.is_active(now)).count(),
    }
}

type DonorRepository = Arc<dyn Repository<Donor> + Send + Sync>;

/// The donor list shared between views. Cloning yields another handle to the
/// same list; every change is broadcast to subscribers and, when the
/// directory was opened from a repository, written through to it.
#[derive(Clone)]
pub struct DonorDirectory {
    store: Arc<SharedStore<Vec<Donor>>>,
    repo: Option<DonorRepository>,
}

impl Default for DonorDirectory {
    fn default() -> Self {
        Self::new(seed::sample_donors())
    }
}

impl DonorDirectory {
    /// An unpersisted directory holding `donors`.
    pub fn new(donors: Vec<Donor>) -> Self {
        Self {
            store: Arc::new(SharedStore::new(donors)),
            repo: None,
        }
    }

    pub fn open<R>(repo: R) -> Result<Self, StoreError>
    where
        R: Repository<Donor> + Send + Sync + 'static,
    {
        let donors = load_or_seed::<Donor, _>(&repo, seed::sample_donors)?;
        Ok(Self {
            store: Arc::new(SharedStore::new(donors)),
            repo: Some(Arc::new(repo)),
        })
    }

    pub fn get(&self) -> Vec<Donor> {
        self.store.get()
    }

    pub fn set(&self, donors: Vec<Donor>) -> Result<(), StoreError> {
        self.store.set(donors);
        self.persist()
    }

    pub fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<Donor>),
    {
        self.store.update(f);
        self.persist()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Donor>> {
        self.store.subscribe()
    }

    pub fn find(&self, id: &str) -> Option<Donor> {
        self.store.with(|donors| donors.iter().find(|d| d.id == id).cloned())
    }

    pub fn search(&self, term: &str) -> Vec<Donor> {
        self.store
            .with(|donors| donors.iter().filter(|d| d.matches(term)).cloned().collect())
    }

    pub fn stats(&self, now: DateTime<Utc>) -> DonorStats {
        self.store.with(|donors| donor_stats(donors, now))
    }

    /// Replaces the donor with the same id. Returns false when none matched.
    pub fn save_edit(&self, edited: Donor) -> Result<bool, StoreError> {
        let mut saved = false;
        self.store.update(|donors| {
            if let Some(slot) = donors.iter_mut().find(|d| d.id == edited.id) {
                *slot = edited;
                saved = true;
            }
        });
        if saved {
            self.persist()?;
        }
        Ok(saved)
    }

    /// Records a meeting note on the donor. Blank notes are ignored.
    pub fn add_note(&self, id: &str, note: &str, now: DateTime<Utc>) -> Result<Option<Interaction>, StoreError> {
        if note.trim().is_empty() {
            return Ok(None);
        }
        let mut added = None;
        self.store.update(|donors| {
            if let Some(donor) = donors.iter_mut().find(|d| d.id == id) {
                added = Some(donor.add_note(note, now).clone());
            }
        });
        if let Some(interaction) = &added {
            self.persist()?;
            tracing::info!("Added note {} to donor {}", interaction.id, id);
        }
        Ok(added)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };
        self.store.with(|donors| repo.save_all(donors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::utc_day;
    use crate::storage::{KeyValueStore, MemoryStore, StoredRepository};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn sample_stats() {
        let directory = DonorDirectory::default();

        let stats = directory.stats(utc_day(2024, 2, 1));

        assert_eq!(stats.total_donors, 20);
        assert_eq!(stats.total_raised, dec!(2601000));
        assert_eq!(stats.average_gift, dec!(130050));
        assert_eq!(stats.active_donors, 20);
    }

    #[test]
    fn empty_directory_has_zero_average() {
        let stats = DonorDirectory::new(Vec::new()).stats(utc_day(2024, 2, 1));

        assert_eq!(stats.average_gift, Decimal::ZERO);
        assert_eq!(stats.total_raised, Decimal::ZERO);
    }

    #[test]
    fn search_by_organization() {
        let directory = DonorDirectory::default();

        let names: Vec<String> = directory.search("tech").into_iter().map(|d| d.name).collect();

        assert_eq!(names, vec!["Michael Chen", "Tech Innovators Inc."]);
    }

    #[test]
    fn clones_share_the_same_list() {
        let directory = DonorDirectory::default();
        let other_view = directory.clone();

        let note = directory
            .add_note("3", "Discussed Q2 report timeline", utc_day(2024, 2, 5))
            .unwrap();

        assert_eq!(note.map(|n| n.id), Some(4));
        let donor = other_view.find("3").unwrap();
        assert_eq!(donor.interactions.len(), 4);
        assert_eq!(donor.interactions[3].kind, InteractionType::Meeting);
    }

    #[test]
    fn blank_note_or_unknown_donor_is_ignored() {
        let directory = DonorDirectory::default();

        assert_eq!(directory.add_note("1", "   ", utc_day(2024, 2, 5)).unwrap(), None);
        assert_eq!(directory.add_note("missing", "hello", utc_day(2024, 2, 5)).unwrap(), None);
    }

    #[test]
    fn save_edit_replaces_matching_donor() {
        let directory = DonorDirectory::default();
        let mut donor = directory.find("5").unwrap();
        donor.plans = Some("Invite to reading night".to_string());

        assert!(directory.save_edit(donor).unwrap());
        assert_eq!(
            directory.find("5").unwrap().plans.as_deref(),
            Some("Invite to reading night")
        );
    }

    #[test]
    fn notes_survive_reopen() {
        let memory: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let directory = DonorDirectory::open(StoredRepository::new(memory.clone())).unwrap();

        directory
            .add_note("1", "Called about Q2 report", utc_day(2024, 2, 5))
            .unwrap();

        let reopened = DonorDirectory::open(StoredRepository::new(memory)).unwrap();
        let donor = reopened.find("1").unwrap();
        assert_eq!(donor.interactions.len(), 4);
        assert_eq!(donor.interactions[3].summary, "Called about Q2 report");
    }

    #[test]
    fn empty_store_is_seeded_and_written() {
        let memory: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        let directory = DonorDirectory::open(StoredRepository::new(memory.clone())).unwrap();

        assert_eq!(directory.get().len(), 20);
        assert!(memory.get("donors").unwrap().is_some());
    }

    #[tokio::test]
    async fn subscribers_see_new_notes() {
        let directory = DonorDirectory::default();
        let mut rx = directory.subscribe();

        directory.add_note("1", "Called about showcase", utc_day(2024, 2, 5)).unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow()[0].interactions.len(), 4);
    }
}
