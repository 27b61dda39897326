use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Car, CarCategory};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub car_id: String,
    /// Display fields frozen at booking time. Survives later edits or
    /// deletion of the car itself.
    pub car: CarSnapshot,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub price: f64,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSnapshot {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: CarCategory,
    pub location: String,
    pub image: String,
    pub price_per_day: f64,
}

impl From<&Car> for CarSnapshot {
    fn from(car: &Car) -> Self {
        Self {
            brand: car.brand.clone(),
            model: car.model.clone(),
            year: car.year,
            category: car.category,
            location: car.location.clone(),
            image: car.image.clone(),
            price_per_day: car.price_per_day,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Pending is the only non-terminal state; confirmed and cancelled
    /// bookings never change again.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (
                BookingStatus::Pending,
                BookingStatus::Confirmed | BookingStatus::Cancelled
            )
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
