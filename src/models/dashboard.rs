use serde::Serialize;

use crate::models::Booking;

/// Derived summary over the fleet and booking collections. Always
/// recomputed from the source collections, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_cars: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub complete_bookings: usize,
    pub monthly_revenue: f64,
    pub recent_bookings: Vec<Booking>,
}
