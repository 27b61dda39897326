pub mod booking;
pub mod car;
pub mod dashboard;

pub use booking::{Booking, BookingStatus, CarSnapshot};
pub use car::{Car, CarCategory, FuelType, Transmission, LOCATIONS};
pub use dashboard::DashboardSummary;
