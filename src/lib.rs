pub mod app;
pub mod assistant;
pub mod board;
pub mod calendar;
pub mod donors;
pub mod finance;
pub mod forms;
pub mod storage;
pub mod ui;

pub use app::Crm;
pub use board::{BoardMember, BoardRoster};
pub use calendar::{CalendarEvent, EventCalendar};
pub use donors::{Donor, DonorDirectory};
pub use finance::{Ledger, Transaction};
pub use forms::{CollectionError, ValidationError};
