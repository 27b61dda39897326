use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::{AppError, FieldError, FieldErrors};
use crate::models::{Booking, BookingStatus, CarSnapshot};
use crate::store::FleetStore;

#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub car_id: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Rental length in days, counting both the pickup and the return day.
/// A same-day rental is one day.
pub fn rental_days(pickup: NaiveDate, ret: NaiveDate) -> i64 {
    (ret - pickup).num_days() + 1
}

/// Creates a pending booking for the car. `today` anchors the
/// past-date check and `now` becomes `created_at`; both are passed in
/// so tests control the clock.
pub fn create_booking(
    store: &mut FleetStore,
    input: &NewBooking,
    today: NaiveDate,
    now: NaiveDateTime,
) -> Result<Booking, AppError> {
    let mut errors = Vec::new();

    if input.pickup_date < today {
        errors.push(FieldError {
            field: "pickup_date",
            reason: "must not be in the past".to_string(),
        });
    }
    if input.return_date < input.pickup_date {
        errors.push(FieldError {
            field: "return_date",
            reason: "must not be before the pickup date".to_string(),
        });
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(FieldErrors(errors)));
    }

    let car = store
        .find_car(&input.car_id)
        .ok_or_else(|| AppError::not_found("car", &input.car_id))?;

    let days = rental_days(input.pickup_date, input.return_date);
    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        car_id: car.id.clone(),
        car: CarSnapshot::from(car),
        pickup_date: input.pickup_date,
        return_date: input.return_date,
        price: car.price_per_day * days as f64,
        status: BookingStatus::Pending,
        created_at: now,
    };

    tracing::info!(
        booking_id = %booking.id,
        car_id = %booking.car_id,
        days,
        price = booking.price,
        "booking created"
    );
    store.insert_booking(booking.clone());
    Ok(booking)
}

/// The full booking collection in creation order. Renters and the
/// owner see the same global list; there is no per-user partitioning.
pub fn list_bookings(store: &FleetStore) -> Vec<Booking> {
    store.bookings().to_vec()
}

/// Owner view with an optional status filter and a result cap.
pub fn list_bookings_filtered(
    store: &FleetStore,
    status: Option<BookingStatus>,
    limit: usize,
) -> Vec<Booking> {
    store
        .bookings()
        .iter()
        .filter(|b| status.map_or(true, |s| b.status == s))
        .take(limit)
        .cloned()
        .collect()
}

/// Applies a status change. Only pending bookings move, and only to
/// confirmed or cancelled; everything else leaves the store untouched.
pub fn set_status(
    store: &mut FleetStore,
    id: &str,
    next: BookingStatus,
) -> Result<Booking, AppError> {
    let booking = store
        .find_booking_mut(id)
        .ok_or_else(|| AppError::not_found("booking", id))?;

    if !booking.status.can_transition_to(next) {
        return Err(AppError::InvalidTransition {
            from: booking.status,
            to: next,
        });
    }

    booking.status = next;
    tracing::info!(booking_id = %id, status = %next, "booking status changed");
    Ok(booking.clone())
}
