pub mod bookings;
pub mod cars;
pub mod dashboard;
pub mod health;
