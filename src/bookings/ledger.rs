use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::FlowError,
    models::{BookingRecord, BookingStatus, LessonRequest, UserProfile},
};

/// Field set the booking flow submits after a slot is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub instructor_name: String,
    pub instructor_image: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: String,
}

/// The only two ways an instructor can resolve a pending request. Anything
/// else is unrepresentable at this boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RequestResolution {
    Confirmed,
    Rejected,
}

impl From<RequestResolution> for BookingStatus {
    fn from(resolution: RequestResolution) -> Self {
        match resolution {
            RequestResolution::Confirmed => BookingStatus::Confirmed,
            RequestResolution::Rejected => BookingStatus::Rejected,
        }
    }
}

/// One ordered booking collection for both roles, most-recent-first.
///
/// Students see the records they created; the instructor sees every record
/// as a lesson request. Records are never removed; status is the only field
/// that changes after creation.
#[derive(Debug, Default)]
pub struct BookingLedger {
    records: Vec<BookingRecord>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo requests the instructor dashboard starts with. They belong to
    /// other students, so a fresh student history is still empty.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let demo = |student_id: &str, student_name: &str, date: &str, time: &str, location: &str, status: BookingStatus| {
            BookingRecord {
                id: Uuid::new_v4().to_string(),
                student_id: student_id.into(),
                student_name: student_name.into(),
                instructor_name: "김프로 강사".into(),
                instructor_image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".into(),
                date: date.into(),
                time: time.into(),
                location: location.into(),
                price: "70,000원/시간".into(),
                status,
                requested_at: now,
            }
        };

        Self {
            records: vec![
                demo(
                    "user_2",
                    "이영희",
                    "12월 24일 (화)",
                    "14:00 - 16:00",
                    "비발디파크 초급 슬로프",
                    BookingStatus::Pending,
                ),
                demo(
                    "user_3",
                    "박철수",
                    "12월 25일 (수)",
                    "10:00 - 12:00",
                    "용평리조트 핑크 슬로프",
                    BookingStatus::Confirmed,
                ),
            ],
        }
    }

    /// Appends a new pending booking at the front of the ledger. No
    /// uniqueness constraint applies to (date, time): double-booking a slot
    /// is allowed.
    pub fn create(
        &mut self,
        student: &UserProfile,
        draft: BookingDraft,
        now: DateTime<Utc>,
    ) -> BookingRecord {
        let record = BookingRecord {
            id: Uuid::new_v4().to_string(),
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            instructor_name: draft.instructor_name,
            instructor_image: draft.instructor_image,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            price: draft.price,
            status: BookingStatus::Pending,
            requested_at: now,
        };
        self.records.insert(0, record.clone());
        record
    }

    pub fn get(&self, id: &str) -> Option<&BookingRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Student projection: the caller's own records, most-recent-first.
    pub fn bookings_for(&self, student_id: &str) -> Vec<BookingRecord> {
        self.records
            .iter()
            .filter(|record| record.student_id == student_id)
            .cloned()
            .collect()
    }

    /// Instructor projection: every record as a lesson request. Resolved
    /// requests stay in the collection; the dashboard groups them by status.
    pub fn requests(&self) -> Vec<LessonRequest> {
        self.records.iter().map(LessonRequest::from).collect()
    }

    /// Moves a pending request to its resolved status. Resolved requests
    /// are terminal: a second resolution is rejected, not ignored.
    pub fn resolve(
        &mut self,
        id: &str,
        resolution: RequestResolution,
    ) -> Result<LessonRequest, FlowError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| FlowError::UnknownBooking(id.to_string()))?;

        if record.status.is_terminal() {
            return Err(FlowError::InvalidTransition(record.status));
        }

        record.status = resolution.into();
        Ok(LessonRequest::from(&*record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn draft() -> BookingDraft {
        BookingDraft {
            instructor_name: "김프로 강사".into(),
            instructor_image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".into(),
            date: "12월 20일 (금)".into(),
            time: "10:00 - 12:00".into(),
            location: "비발디파크 스키장".into(),
            price: "70,000원/시간".into(),
        }
    }

    #[test]
    fn fresh_student_history_is_empty_even_with_seeded_requests() {
        let ledger = BookingLedger::seeded(Utc::now());
        let student = UserProfile::demo(UserRole::Student);

        assert!(ledger.bookings_for(&student.id).is_empty());
        assert_eq!(ledger.requests().len(), 2);
    }

    #[test]
    fn create_prepends_a_pending_record() {
        let mut ledger = BookingLedger::new();
        let student = UserProfile::demo(UserRole::Student);

        let first = ledger.create(&student, draft(), Utc::now());
        let second = ledger.create(&student, draft(), Utc::now());

        let history = ledger.bookings_for(&student.id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], second);
        assert_eq!(history[1], first);
        assert_eq!(history[0].status, BookingStatus::Pending);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn double_booking_the_same_slot_is_allowed() {
        let mut ledger = BookingLedger::new();
        let student = UserProfile::demo(UserRole::Student);

        ledger.create(&student, draft(), Utc::now());
        ledger.create(&student, draft(), Utc::now());

        assert_eq!(ledger.bookings_for(&student.id).len(), 2);
    }

    #[test]
    fn a_student_booking_shows_up_in_the_instructor_queue() {
        let mut ledger = BookingLedger::seeded(Utc::now());
        let student = UserProfile::demo(UserRole::Student);

        let record = ledger.create(&student, draft(), Utc::now());

        let requests = ledger.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].id, record.id);
        assert_eq!(requests[0].student_name, student.name);
        assert_eq!(requests[0].status, BookingStatus::Pending);
    }

    #[test]
    fn resolving_confirms_only_the_addressed_request() {
        let mut ledger = BookingLedger::seeded(Utc::now());
        let pending_id = ledger.requests()[0].id.clone();

        let resolved = ledger
            .resolve(&pending_id, RequestResolution::Confirmed)
            .unwrap();
        assert_eq!(resolved.status, BookingStatus::Confirmed);

        // The other seeded record is untouched.
        let others: Vec<_> = ledger
            .requests()
            .into_iter()
            .filter(|request| request.id != pending_id)
            .collect();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].status, BookingStatus::Confirmed);
    }

    #[test]
    fn resolved_requests_are_terminal() {
        let mut ledger = BookingLedger::new();
        let student = UserProfile::demo(UserRole::Student);
        let record = ledger.create(&student, draft(), Utc::now());

        ledger
            .resolve(&record.id, RequestResolution::Rejected)
            .unwrap();

        assert_eq!(
            ledger.resolve(&record.id, RequestResolution::Confirmed),
            Err(FlowError::InvalidTransition(BookingStatus::Rejected))
        );
    }

    #[test]
    fn resolving_an_unknown_id_is_rejected() {
        let mut ledger = BookingLedger::new();
        assert_eq!(
            ledger.resolve("nope", RequestResolution::Confirmed),
            Err(FlowError::UnknownBooking("nope".into()))
        );
    }
}
