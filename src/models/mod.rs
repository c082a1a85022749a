pub mod booking;
pub mod message;
pub mod user;

pub use booking::{BookingRecord, BookingStatus, LessonRequest};
pub use message::{ChatMessage, ChatPreview};
pub use user::{UserProfile, UserRole};
