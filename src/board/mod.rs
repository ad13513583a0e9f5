pub mod member;
pub mod seating;
pub mod seed;
pub mod stats;

use chrono::{DateTime, Utc};

use crate::storage::{RecordStore, Repository, StoreError, new_record_id};

pub use member::{BoardMember, MemberDraft, MemberProfile, MemberStatus, Position, PreferredContact};
pub use seating::{SeatPosition, seat_position, seating_plan};
pub use stats::{BoardStats, board_stats, months_until_term_end, term_expiring_soon};

pub struct BoardRoster {
    store: RecordStore<BoardMember>,
}

impl BoardRoster {
    pub fn open<R>(repo: R) -> Result<Self, StoreError>
    where
        R: Repository<BoardMember> + 'static,
    {
        let store = RecordStore::open(repo, seed::sample_members)?;
        Ok(Self { store })
    }

    pub fn members(&self) -> &[BoardMember] {
        self.store.records()
    }

    pub fn get(&self, id: &str) -> Option<&BoardMember> {
        self.store.get(id)
    }

    /// Appends a member whose seat number is the current roster size.
    pub fn add(&mut self, draft: MemberDraft, now: DateTime<Utc>) -> Result<BoardMember, StoreError> {
        let member = draft.into_member(new_record_id(), self.store.len(), now);
        self.store.append(member.clone())?;
        tracing::info!("Added board member {} in seat {}", member.name, member.seat_number);
        Ok(member)
    }

    pub fn update(&mut self, member: BoardMember) -> Result<bool, StoreError> {
        let id = member.id.clone();
        let updated = self.store.replace(member)?;
        if updated {
            tracing::info!("Updated board member {}", id);
        }
        Ok(updated)
    }

    /// Removes the member. Remaining seat numbers are left as they were.
    pub fn remove(&mut self, id: &str) -> Result<Option<BoardMember>, StoreError> {
        let removed = self.store.remove(id)?;
        if let Some(member) = &removed {
            tracing::info!("Removed board member {} from seat {}", member.name, member.seat_number);
        }
        Ok(removed)
    }

    pub fn search(&self, term: &str) -> Vec<&BoardMember> {
        self.members().iter().filter(|m| m.matches(term)).collect()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> BoardStats {
        board_stats(self.members(), now)
    }

    pub fn seating(&self) -> Vec<(&BoardMember, SeatPosition)> {
        seating_plan(self.members())
    }
}
