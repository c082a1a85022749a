//! Booking records and their two role-scoped projections.
//!
//! A single ledger entry backs both the student's reservation history and
//! the instructor's request queue; `LessonRequest` is the instructor-facing
//! view of the same record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Rejected => "Rejected",
        }
    }

    /// Every status except `Pending` is terminal for the approval flow.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub instructor_name: String,
    pub instructor_image: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: String,
    pub status: BookingStatus,
    pub requested_at: DateTime<Utc>,
}

/// Instructor-side projection of a booking record. Derived on read, never
/// stored separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonRequest {
    pub id: String,
    pub student_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub status: BookingStatus,
}

impl From<&BookingRecord> for LessonRequest {
    fn from(record: &BookingRecord) -> Self {
        Self {
            id: record.id.clone(),
            student_name: record.student_name.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
            location: record.location.clone(),
            status: record.status,
        }
    }
}
