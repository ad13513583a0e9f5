pub mod agenda;
pub mod event;
pub mod grid;
pub mod seed;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::forms::CollectionError;
use crate::storage::{RecordStore, Repository, StoreError, new_record_id};

pub use agenda::{CalendarStats, UPCOMING_LIMIT, calendar_stats, upcoming_events};
pub use event::{CalendarEvent, EventDraft, EventStatus, EventType, Priority};
pub use grid::{DayCell, GridCell, MonthGrid, YearMonth, build_month_grid};

/// Midnight UTC on the given day; out-of-range dates clamp to the earliest instant.
pub fn utc_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub struct EventCalendar {
    store: RecordStore<CalendarEvent>,
}

impl EventCalendar {
    pub fn open<R>(repo: R) -> Result<Self, StoreError>
    where
        R: Repository<CalendarEvent> + 'static,
    {
        let store = RecordStore::open(repo, seed::sample_events)?;
        Ok(Self { store })
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.store.records()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.store.get(id)
    }

    pub fn add(&mut self, draft: EventDraft, date: DateTime<Utc>) -> Result<CalendarEvent, CollectionError> {
        let event = draft.into_event(new_record_id(), date)?;
        self.store.append(event.clone())?;
        tracing::info!("Added event {} ({})", event.id, event.title);
        Ok(event)
    }

    /// Replaces every editable field of the event and moves it to `date`.
    pub fn update(
        &mut self,
        id: &str,
        draft: EventDraft,
        date: DateTime<Utc>,
    ) -> Result<Option<CalendarEvent>, CollectionError> {
        if self.store.get(id).is_none() {
            return Ok(None);
        }
        let event = draft.into_event(id.to_string(), date)?;
        self.store.replace(event.clone())?;
        tracing::info!("Updated event {}", id);
        Ok(Some(event))
    }

    pub fn remove(&mut self, id: &str) -> Result<Option<CalendarEvent>, StoreError> {
        let removed = self.store.remove(id)?;
        if removed.is_some() {
            tracing::info!("Deleted event {}", id);
        }
        Ok(removed)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events().iter().filter(|event| event.falls_on(date)).collect()
    }

    pub fn month_grid(&self, month: YearMonth) -> MonthGrid<'_> {
        build_month_grid(month, self.events())
    }

    pub fn upcoming(&self, now: DateTime<Utc>, limit: usize) -> Vec<&CalendarEvent> {
        upcoming_events(self.events(), now, limit)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> CalendarStats {
        calendar_stats(self.events(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;
    use crate::storage::{KeyValueStore, MemoryStore, StoredRepository};
    use std::sync::Arc;

    fn open_calendar(store: &Arc<MemoryStore>) -> EventCalendar {
        let kv: Arc<dyn KeyValueStore> = store.clone();
        EventCalendar::open(StoredRepository::new(kv)).unwrap()
    }

    #[test]
    fn first_open_loads_sample_events() {
        let calendar = open_calendar(&Arc::new(MemoryStore::new()));

        assert_eq!(calendar.events().len(), 10);
        assert_eq!(calendar.get("1").map(|e| e.title.as_str()), Some("Board Meeting"));
    }

    #[test]
    fn added_event_persists_across_reopen() {
        let memory = Arc::new(MemoryStore::new());
        let mut calendar = open_calendar(&memory);

        let added = calendar
            .add(EventDraft::titled("Finance Committee"), utc_day(2024, 2, 15))
            .unwrap();

        let reopened = open_calendar(&memory);
        assert_eq!(reopened.get(&added.id), Some(&added));
        assert_eq!(reopened.events().len(), 11);
    }

    #[test]
    fn add_without_title_changes_nothing() {
        let memory = Arc::new(MemoryStore::new());
        let mut calendar = open_calendar(&memory);

        let result = calendar.add(EventDraft::default(), utc_day(2024, 2, 15));

        assert!(matches!(
            result,
            Err(CollectionError::Validation(ValidationError::MissingField("title")))
        ));
        assert_eq!(calendar.events().len(), 10);
    }

    #[test]
    fn overlapping_events_are_all_kept() {
        let mut calendar = open_calendar(&Arc::new(MemoryStore::new()));

        calendar.add(EventDraft::titled("Clash"), utc_day(2024, 2, 15)).unwrap();

        assert_eq!(calendar.events_on(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()).len(), 2);
    }

    #[test]
    fn update_moves_event_to_new_date() {
        let mut calendar = open_calendar(&Arc::new(MemoryStore::new()));
        let mut draft = EventDraft::for_event(calendar.get("3").unwrap());
        draft.title = "Gala Planning Call (moved)".to_string();

        let updated = calendar.update("3", draft, utc_day(2024, 2, 21)).unwrap().unwrap();

        assert_eq!(updated.id, "3");
        assert_eq!(calendar.get("3").unwrap().date, utc_day(2024, 2, 21));
        assert_eq!(calendar.get("3").unwrap().title, "Gala Planning Call (moved)");
    }

    #[test]
    fn update_of_unknown_event_returns_none() {
        let mut calendar = open_calendar(&Arc::new(MemoryStore::new()));

        let result = calendar.update("missing", EventDraft::titled("x"), utc_day(2024, 1, 1)).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn remove_deletes_event() {
        let mut calendar = open_calendar(&Arc::new(MemoryStore::new()));

        let removed = calendar.remove("10").unwrap();

        assert_eq!(removed.map(|e| e.title), Some("Program Team Meeting".to_string()));
        assert!(calendar.get("10").is_none());
    }

    #[test]
    fn sample_month_grid_places_board_meeting() {
        let calendar = open_calendar(&Arc::new(MemoryStore::new()));

        let grid = calendar.month_grid(YearMonth::new(2024, 2).unwrap());

        let titles: Vec<&str> = grid.day(15).unwrap().events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Board Meeting"]);
    }

    #[test]
    fn utc_day_is_midnight() {
        assert_eq!(utc_day(2024, 2, 15).to_rfc3339(), "2024-02-15T00:00:00+00:00");
    }
}
