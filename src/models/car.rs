use serde::{Deserialize, Serialize};

/// Cities a car can be listed in. Matches the fixed set offered by the
/// listing form; `add_car` rejects anything else.
pub const LOCATIONS: &[&str] = &[
    "New York",
    "Los Angeles",
    "Houston",
    "Chicago",
    "Miami",
    "San Francisco",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
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
    pub is_available: bool,
}

impl Car {
    /// Concatenation of the fields the catalog search matches against.
    pub fn searchable_text(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.brand,
            self.model,
            self.category.as_str(),
            self.fuel_type.as_str(),
            self.location
        )
        .to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarCategory {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Van,
    #[serde(rename = "Sports Car")]
    SportsCar,
    Luxury,
}

impl CarCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarCategory::Sedan => "Sedan",
            CarCategory::Suv => "SUV",
            CarCategory::Van => "Van",
            CarCategory::SportsCar => "Sports Car",
            CarCategory::Luxury => "Luxury",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
    #[serde(rename = "Semi-Automatic")]
    SemiAutomatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
            Transmission::SemiAutomatic => "Semi-Automatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}
