pub mod checkin;
pub mod commands;
pub mod controller;
pub mod ledger;

pub use checkin::CheckinPayload;
pub use controller::BookingController;
pub use ledger::{BookingDraft, BookingLedger, RequestResolution};
