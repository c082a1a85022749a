use std::sync::Arc;

use chrono::Utc;
use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use crate::{
    error::FlowError,
    models::{BookingRecord, LessonRequest, UserProfile},
};

use super::{BookingDraft, BookingLedger, CheckinPayload, RequestResolution};

#[derive(Serialize, Clone)]
struct BookingCreatedEvent {
    booking: BookingRecord,
}

#[derive(Serialize, Clone)]
struct RequestResolvedEvent {
    request: LessonRequest,
}

/// Owns the booking ledger and notifies the webview whenever it changes.
#[derive(Clone)]
pub struct BookingController {
    ledger: Arc<Mutex<BookingLedger>>,
    app_handle: AppHandle,
}

impl BookingController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(BookingLedger::seeded(Utc::now()))),
            app_handle,
        }
    }

    pub async fn create(&self, student: &UserProfile, draft: BookingDraft) -> BookingRecord {
        let record = {
            let mut ledger = self.ledger.lock().await;
            ledger.create(student, draft, Utc::now())
        };

        info!(
            "Booking {} created for {} ({} {})",
            record.id, record.student_name, record.date, record.time
        );
        let _ = self.app_handle.emit(
            "booking-created",
            BookingCreatedEvent {
                booking: record.clone(),
            },
        );
        record
    }

    pub async fn bookings_for(&self, student_id: &str) -> Vec<BookingRecord> {
        self.ledger.lock().await.bookings_for(student_id)
    }

    pub async fn requests(&self) -> Vec<LessonRequest> {
        self.ledger.lock().await.requests()
    }

    pub async fn resolve(
        &self,
        id: &str,
        resolution: RequestResolution,
    ) -> Result<LessonRequest, FlowError> {
        let request = {
            let mut ledger = self.ledger.lock().await;
            ledger.resolve(id, resolution)?
        };

        info!("Request {} resolved as {}", request.id, request.status.as_str());
        let _ = self.app_handle.emit(
            "request-resolved",
            RequestResolvedEvent {
                request: request.clone(),
            },
        );
        Ok(request)
    }

    pub async fn checkin_payload(&self, booking_id: &str) -> Result<CheckinPayload, FlowError> {
        let ledger = self.ledger.lock().await;
        let record = ledger
            .get(booking_id)
            .ok_or_else(|| FlowError::UnknownBooking(booking_id.to_string()))?;
        CheckinPayload::for_booking(record, Utc::now())
    }
}
