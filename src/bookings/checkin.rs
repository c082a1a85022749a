use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::FlowError,
    models::{BookingRecord, BookingStatus},
};

/// Fixed tag the scanning side matches on.
const PAYLOAD_TYPE: &str = "PROFIT_LESSON_AUTH";

/// Record the frontend renders as the check-in QR code. Purely
/// illustrative: no signature, no expiry enforcement.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckinPayload {
    #[serde(rename = "type")]
    pub payload_type: &'static str,
    pub booking_id: String,
    pub timestamp: i64,
}

impl CheckinPayload {
    /// Check-in is only offered once the instructor has confirmed the
    /// lesson; any other status is rejected here rather than hidden by the
    /// view alone.
    pub fn for_booking(record: &BookingRecord, now: DateTime<Utc>) -> Result<Self, FlowError> {
        if record.status != BookingStatus::Confirmed {
            return Err(FlowError::NotConfirmed);
        }

        Ok(Self {
            payload_type: PAYLOAD_TYPE,
            booking_id: record.id.clone(),
            timestamp: now.timestamp_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::models::UserRole;

    fn record(status: BookingStatus) -> BookingRecord {
        let student = UserProfile::demo(UserRole::Student);
        BookingRecord {
            id: "booking_1".into(),
            student_id: student.id,
            student_name: student.name,
            instructor_name: "김프로 강사".into(),
            instructor_image: "img".into(),
            date: "12월 20일 (금)".into(),
            time: "10:00 - 12:00".into(),
            location: "비발디파크 스키장".into(),
            price: "70,000원/시간".into(),
            status,
            requested_at: Utc::now(),
        }
    }

    #[test]
    fn confirmed_bookings_get_a_tagged_payload() {
        let now = Utc::now();
        let payload = CheckinPayload::for_booking(&record(BookingStatus::Confirmed), now).unwrap();

        assert_eq!(payload.payload_type, "PROFIT_LESSON_AUTH");
        assert_eq!(payload.booking_id, "booking_1");
        assert_eq!(payload.timestamp, now.timestamp_millis());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "PROFIT_LESSON_AUTH");
        assert_eq!(json["bookingId"], "booking_1");
    }

    #[test]
    fn unconfirmed_bookings_are_rejected() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::Rejected,
        ] {
            assert_eq!(
                CheckinPayload::for_booking(&record(status), Utc::now()),
                Err(FlowError::NotConfirmed)
            );
        }
    }
}
