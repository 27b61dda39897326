use chrono::{Datelike, NaiveDateTime};

use crate::models::{Booking, BookingStatus, Car, DashboardSummary};

/// How many of the latest bookings the dashboard shows.
pub const RECENT_BOOKINGS: usize = 5;

/// Pure aggregation over the two collections. `now` anchors the
/// current-month revenue window; callers pass the wall clock, tests
/// pass whatever month they need.
pub fn compute_summary(cars: &[Car], bookings: &[Booking], now: NaiveDateTime) -> DashboardSummary {
    let pending_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .count();
    let complete_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .count();

    let monthly_revenue = bookings
        .iter()
        .filter(|b| {
            b.created_at.year() == now.year() && b.created_at.month() == now.month()
        })
        .map(|b| b.price)
        .sum();

    // Stable sort keeps insertion order among equal timestamps
    let mut recent: Vec<Booking> = bookings.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_BOOKINGS);

    DashboardSummary {
        total_cars: cars.len(),
        total_bookings: bookings.len(),
        pending_bookings,
        complete_bookings,
        monthly_revenue,
        recent_bookings: recent,
    }
}
