use uuid::Uuid;

use crate::models::{Car, CarCategory, FuelType, Transmission};

/// Sample fleet the service starts with unless SEED_DEMO_FLEET=false.
/// Fresh ids per process; nothing here persists.
pub fn demo_fleet() -> Vec<Car> {
    vec![
        car(
            "BMW",
            "X5",
            2022,
            CarCategory::Suv,
            Transmission::Automatic,
            FuelType::Hybrid,
            5,
            "New York",
            300.0,
            "/images/bmw-x5.jpg",
            "Spacious luxury SUV with a panoramic sunroof and advanced driver assistance.",
        ),
        car(
            "Toyota",
            "Corolla",
            2021,
            CarCategory::Sedan,
            Transmission::Manual,
            FuelType::Diesel,
            4,
            "Chicago",
            130.0,
            "/images/toyota-corolla.jpg",
            "Dependable compact sedan, great mileage for city and highway driving.",
        ),
        car(
            "Jeep",
            "Wrangler",
            2023,
            CarCategory::Suv,
            Transmission::Automatic,
            FuelType::Hybrid,
            4,
            "Los Angeles",
            200.0,
            "/images/jeep-wrangler.jpg",
            "Rugged off-roader with removable doors and a convertible soft top.",
        ),
        car(
            "Ford",
            "Neo 6",
            2022,
            CarCategory::Sedan,
            Transmission::SemiAutomatic,
            FuelType::Diesel,
            2,
            "Houston",
            209.0,
            "/images/ford-neo.jpg",
            "Sleek two-seater with a sport-tuned suspension and premium interior.",
        ),
        car(
            "Tesla",
            "Model 3",
            2024,
            CarCategory::Sedan,
            Transmission::Automatic,
            FuelType::Electric,
            5,
            "San Francisco",
            250.0,
            "/images/tesla-model3.jpg",
            "All-electric sedan with autopilot and a minimalist glass-roof cabin.",
        ),
        car(
            "Mercedes-Benz",
            "S-Class",
            2023,
            CarCategory::Luxury,
            Transmission::Automatic,
            FuelType::Gasoline,
            5,
            "Miami",
            450.0,
            "/images/mercedes-s-class.jpg",
            "Flagship luxury saloon with massaging seats and rear-cabin entertainment.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn car(
    brand: &str,
    model: &str,
    year: i32,
    category: CarCategory,
    transmission: Transmission,
    fuel_type: FuelType,
    seating_capacity: u32,
    location: &str,
    price_per_day: f64,
    image: &str,
    description: &str,
) -> Car {
    Car {
        id: Uuid::new_v4().to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        category,
        transmission,
        fuel_type,
        seating_capacity,
        location: location.to_string(),
        price_per_day,
        image: image.to_string(),
        description: description.to_string(),
        is_available: true,
    }
}
