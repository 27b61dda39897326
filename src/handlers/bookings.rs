use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::{AppError, FieldError, FieldErrors};
use crate::models::{Booking, BookingStatus};
use crate::services::booking::{self, NewBooking};
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let now = Utc::now().naive_utc();
    let mut store = state.store.lock().unwrap();
    let booking = booking::create_booking(&mut store, &body, now.date(), now)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /api/bookings
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    let store = state.store.lock().unwrap();
    Json(booking::list_bookings(&store))
}

// GET /api/owner/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<usize>,
}

pub async fn owner_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let status = match query.status.as_deref() {
        Some(s) => Some(BookingStatus::from_str(s).ok_or_else(|| {
            AppError::Validation(FieldErrors(vec![FieldError {
                field: "status",
                reason: format!("unknown status {s:?}"),
            }]))
        })?),
        None => None,
    };
    let limit = query.limit.unwrap_or(50);

    let store = state.store.lock().unwrap();
    Ok(Json(booking::list_bookings_filtered(&store, status, limit)))
}

// POST /api/owner/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusChangeRequest {
    pub status: BookingStatus,
}

pub async fn change_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusChangeRequest>,
) -> Result<Json<Booking>, AppError> {
    let mut store = state.store.lock().unwrap();
    let booking = booking::set_status(&mut store, &id, body.status)?;
    Ok(Json(booking))
}
