//! Domain errors for operations the UI normally prevents by disabling
//! controls. The state layer rejects them explicitly instead of trusting
//! the view to never submit them.

use thiserror::Error;

use crate::models::BookingStatus;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("no active session")]
    NotSignedIn,

    #[error("no lesson slot selected")]
    MissingSelection,

    #[error("selected slot is already booked")]
    SlotUnavailable,

    #[error("unknown booking {0}")]
    UnknownBooking(String),

    #[error("request is already {}; only pending requests can be resolved", .0.as_str())]
    InvalidTransition(BookingStatus),

    #[error("check-in is only available for confirmed bookings")]
    NotConfirmed,

    #[error("chat target name must not be empty")]
    EmptyChatTarget,

    #[error("message text must not be empty")]
    EmptyMessage,
}
