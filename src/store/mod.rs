pub mod seed;

use crate::models::{Booking, Car};

/// The in-memory fleet and booking collections. Constructed once at
/// startup, shared behind the app state mutex, gone when the process
/// exits. All reads and writes go through the service layer.
#[derive(Debug, Default)]
pub struct FleetStore {
    cars: Vec<Car>,
    bookings: Vec<Booking>,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_fleet() -> Self {
        Self {
            cars: seed::demo_fleet(),
            bookings: Vec::new(),
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find_car(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn find_car_mut(&mut self, id: &str) -> Option<&mut Car> {
        self.cars.iter_mut().find(|c| c.id == id)
    }

    pub fn insert_car(&mut self, car: Car) {
        self.cars.push(car);
    }

    /// Removes the car and returns it, or `None` if the id is unknown.
    /// Bookings referencing the car are left alone; they carry their
    /// own snapshot.
    pub fn remove_car(&mut self, id: &str) -> Option<Car> {
        let idx = self.cars.iter().position(|c| c.id == id)?;
        Some(self.cars.remove(idx))
    }

    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn find_booking_mut(&mut self, id: &str) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == id)
    }

    pub fn insert_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }
}
