pub mod booking;
pub mod dashboard;
pub mod fleet;
