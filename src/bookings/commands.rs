use tauri::State;

use crate::{
    bookings::{BookingDraft, CheckinPayload, RequestResolution},
    catalog,
    error::FlowError,
    models::{BookingRecord, LessonRequest},
    AppState,
};

/// The slot-selection booking flow: resolve the chosen slot, prepend the
/// booking, then atomically dismiss the overlay and land on the history
/// tab.
#[tauri::command]
pub async fn book_lesson(
    state: State<'_, AppState>,
    slot_index: usize,
) -> Result<BookingRecord, String> {
    let student = state
        .session
        .current()
        .await
        .ok_or_else(|| FlowError::NotSignedIn.to_string())?;

    let detail = catalog::instructor_detail();
    let slot = detail.select_slot(slot_index).map_err(|e| e.to_string())?;

    let draft = BookingDraft {
        instructor_name: detail.name.clone(),
        instructor_image: detail.image.clone(),
        date: slot.date.clone(),
        time: slot.time.clone(),
        location: detail.location.clone(),
        price: detail.hourly_rate.clone(),
    };

    let record = state.bookings.create(&student, draft).await;
    state.nav.finish_booking_flow().await;
    Ok(record)
}

#[tauri::command]
pub async fn list_bookings(state: State<'_, AppState>) -> Result<Vec<BookingRecord>, String> {
    let student = state
        .session
        .current()
        .await
        .ok_or_else(|| FlowError::NotSignedIn.to_string())?;
    Ok(state.bookings.bookings_for(&student.id).await)
}

#[tauri::command]
pub async fn list_requests(state: State<'_, AppState>) -> Result<Vec<LessonRequest>, String> {
    Ok(state.bookings.requests().await)
}

#[tauri::command]
pub async fn resolve_request(
    state: State<'_, AppState>,
    request_id: String,
    resolution: RequestResolution,
) -> Result<LessonRequest, String> {
    state
        .bookings
        .resolve(&request_id, resolution)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn checkin_payload(
    state: State<'_, AppState>,
    booking_id: String,
) -> Result<CheckinPayload, String> {
    state
        .bookings
        .checkin_payload(&booking_id)
        .await
        .map_err(|e| e.to_string())
}
