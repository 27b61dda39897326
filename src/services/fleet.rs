use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::{AppError, FieldError, FieldErrors};
use crate::models::{Car, CarCategory, FuelType, Transmission, LOCATIONS};
use crate::store::FleetStore;

pub const MIN_YEAR: i32 = 1900;

/// Owner input for listing a new car. Enum fields are already closed
/// sum types by the time this exists; the serde boundary rejects
/// unknown variants before the service runs.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: CarCategory,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seating_capacity: u32,
    pub location: String,
    pub price_per_day: f64,
    pub image: String,
    pub description: String,
}

/// Case-insensitive substring search over brand, model, category, fuel
/// type and location. An empty term returns the whole fleet, in
/// collection order. Does not filter on availability.
pub fn search_cars(store: &FleetStore, term: &str) -> Vec<Car> {
    let needle = term.to_lowercase();
    store
        .cars()
        .iter()
        .filter(|car| car.searchable_text().contains(&needle))
        .cloned()
        .collect()
}

pub fn get_car(store: &FleetStore, id: &str) -> Result<Car, AppError> {
    store
        .find_car(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("car", id))
}

/// Validates every field and reports all failures at once, so the form
/// round-trips a single time. On success the car gets a fresh id and
/// starts available.
pub fn add_car(store: &mut FleetStore, input: NewCar, today: NaiveDate) -> Result<Car, AppError> {
    let mut errors = Vec::new();

    if input.brand.trim().is_empty() {
        errors.push(FieldError {
            field: "brand",
            reason: "must not be empty".to_string(),
        });
    }
    if input.model.trim().is_empty() {
        errors.push(FieldError {
            field: "model",
            reason: "must not be empty".to_string(),
        });
    }

    let max_year = today.year() + 1;
    if input.year < MIN_YEAR || input.year > max_year {
        errors.push(FieldError {
            field: "year",
            reason: format!("must be between {MIN_YEAR} and {max_year}"),
        });
    }

    if !(input.price_per_day >= 0.0 && input.price_per_day.is_finite()) {
        errors.push(FieldError {
            field: "price_per_day",
            reason: "must be a non-negative number".to_string(),
        });
    }
    if input.seating_capacity < 1 {
        errors.push(FieldError {
            field: "seating_capacity",
            reason: "must be at least 1".to_string(),
        });
    }
    if !LOCATIONS.contains(&input.location.as_str()) {
        errors.push(FieldError {
            field: "location",
            reason: format!("must be one of: {}", LOCATIONS.join(", ")),
        });
    }
    if input.image.trim().is_empty() {
        errors.push(FieldError {
            field: "image",
            reason: "must not be empty".to_string(),
        });
    }
    if input.description.trim().is_empty() {
        errors.push(FieldError {
            field: "description",
            reason: "must not be empty".to_string(),
        });
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(FieldErrors(errors)));
    }

    let car = Car {
        id: Uuid::new_v4().to_string(),
        brand: input.brand,
        model: input.model,
        year: input.year,
        category: input.category,
        transmission: input.transmission,
        fuel_type: input.fuel_type,
        seating_capacity: input.seating_capacity,
        location: input.location,
        price_per_day: input.price_per_day,
        image: input.image,
        description: input.description,
        is_available: true,
    };

    tracing::info!(car_id = %car.id, brand = %car.brand, model = %car.model, "car listed");
    store.insert_car(car.clone());
    Ok(car)
}

/// Flips the availability flag and returns the new value. Independent
/// of booking state.
pub fn toggle_availability(store: &mut FleetStore, id: &str) -> Result<bool, AppError> {
    let car = store
        .find_car_mut(id)
        .ok_or_else(|| AppError::not_found("car", id))?;
    car.is_available = !car.is_available;
    Ok(car.is_available)
}

pub fn delete_car(store: &mut FleetStore, id: &str) -> Result<(), AppError> {
    store
        .remove_car(id)
        .ok_or_else(|| AppError::not_found("car", id))?;
    tracing::info!(car_id = %id, "car removed from fleet");
    Ok(())
}
