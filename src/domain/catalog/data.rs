use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::entities::Vehicle;
use super::value_objects::{BodyType, Condition, DriveType, EngineType, Rubles, Transmission, VehicleId};
use crate::domain::errors::CatalogError;

static CATALOG: Lazy<Vec<Vehicle>> = Lazy::new(build_catalog);

/// The compiled-in stock list, in display order.
pub fn catalog() -> &'static [Vehicle] {
    &CATALOG
}

pub fn find_vehicle(id: VehicleId) -> Option<&'static Vehicle> {
    CATALOG.iter().find(|vehicle| vehicle.id == id)
}

/// Brands in order of first appearance, for the brand select.
pub fn brands() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    CATALOG
        .iter()
        .map(|vehicle| vehicle.brand.as_str())
        .filter(|brand| seen.insert(*brand))
        .collect()
}

/// Checks the invariants a backend would normally enforce: unique ids and real discounts.
pub fn validate(vehicles: &[Vehicle]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for vehicle in vehicles {
        if !ids.insert(vehicle.id) {
            return Err(CatalogError::DuplicateId(vehicle.id.value()));
        }
        if let Some(old) = vehicle.old_price {
            if old <= vehicle.price {
                return Err(CatalogError::InvalidDiscount {
                    id: vehicle.id.value(),
                    price: vehicle.price.value(),
                    old_price: old.value(),
                });
            }
        }
    }
    Ok(())
}

struct StockEntry {
    id: u32,
    brand: &'static str,
    model: &'static str,
    year: u16,
    price: u64,
    old_price: Option<u64>,
    mileage: u32,
    body_type: BodyType,
    engine: EngineType,
    drive: DriveType,
    color: &'static str,
    owners: u8,
    condition: Condition,
    image: &'static str,
    power: u16,
    acceleration: f32,
    fuel_consumption: f32,
    max_speed: u16,
    features: [&'static str; 4],
}

impl From<StockEntry> for Vehicle {
    fn from(entry: StockEntry) -> Self {
        Vehicle {
            id: VehicleId::from(entry.id),
            brand: entry.brand.to_string(),
            model: entry.model.to_string(),
            year: entry.year,
            price: Rubles::new(entry.price),
            old_price: entry.old_price.map(Rubles::new),
            mileage: entry.mileage,
            body_type: entry.body_type,
            engine: entry.engine,
            transmission: Transmission::Auto,
            drive: entry.drive,
            color: entry.color.to_string(),
            owners: entry.owners,
            condition: entry.condition,
            image: entry.image.to_string(),
            power: entry.power,
            acceleration: entry.acceleration,
            fuel_consumption: entry.fuel_consumption,
            max_speed: entry.max_speed,
            features: entry.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

fn build_catalog() -> Vec<Vehicle> {
    let entries = [
        StockEntry {
            id: 1,
            brand: "BMW",
            model: "X5",
            year: 2023,
            price: 8_500_000,
            old_price: Some(9_200_000),
            mileage: 15_000,
            body_type: BodyType::Suv,
            engine: EngineType::Benzin,
            drive: DriveType::AllWheel,
            color: "black",
            owners: 1,
            condition: Condition::Used,
            image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?w=800&q=80",
            power: 340,
            acceleration: 5.5,
            fuel_consumption: 9.2,
            max_speed: 250,
            features: ["Панорама", "Кожаный салон", "Адаптивный круиз", "Камера 360"],
        },
        StockEntry {
            id: 2,
            brand: "Mercedes",
            model: "E-Class",
            year: 2024,
            price: 7_200_000,
            old_price: None,
            mileage: 0,
            body_type: BodyType::Sedan,
            engine: EngineType::Benzin,
            drive: DriveType::Rear,
            color: "white",
            owners: 0,
            condition: Condition::New,
            image: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=800&q=80",
            power: 258,
            acceleration: 6.4,
            fuel_consumption: 7.8,
            max_speed: 250,
            features: ["MBUX", "Пневмоподвеска", "Burmester", "Память сидений"],
        },
        StockEntry {
            id: 3,
            brand: "Audi",
            model: "Q7",
            year: 2023,
            price: 6_800_000,
            old_price: Some(7_500_000),
            mileage: 25_000,
            body_type: BodyType::Suv,
            engine: EngineType::Diesel,
            drive: DriveType::AllWheel,
            color: "gray",
            owners: 1,
            condition: Condition::Used,
            image: "https://images.unsplash.com/photo-1603584173870-7f23fdae1b7a?w=800&q=80",
            power: 286,
            acceleration: 6.3,
            fuel_consumption: 8.1,
            max_speed: 245,
            features: ["Matrix LED", "Виртуальная приборка", "Трехзонный климат", "Панорама"],
        },
        StockEntry {
            id: 4,
            brand: "Porsche",
            model: "Cayenne",
            year: 2024,
            price: 12_500_000,
            old_price: None,
            mileage: 0,
            body_type: BodyType::Suv,
            engine: EngineType::Hybrid,
            drive: DriveType::AllWheel,
            color: "blue",
            owners: 0,
            condition: Condition::New,
            image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?w=800&q=80",
            power: 462,
            acceleration: 4.9,
            fuel_consumption: 3.2,
            max_speed: 253,
            features: ["Sport Chrono", "Керамические тормоза", "Адаптивные сиденья", "BOSE"],
        },
        StockEntry {
            id: 5,
            brand: "Tesla",
            model: "Model S",
            year: 2024,
            price: 9_800_000,
            old_price: Some(10_500_000),
            mileage: 5_000,
            body_type: BodyType::Sedan,
            engine: EngineType::Electric,
            drive: DriveType::AllWheel,
            color: "red",
            owners: 1,
            condition: Condition::Used,
            image: "https://images.unsplash.com/photo-1560958089-b8a1929cea89?w=800&q=80",
            power: 1020,
            acceleration: 2.1,
            fuel_consumption: 0.0,
            max_speed: 322,
            features: ["Autopilot", "Игровой компьютер", "Стеклянная крыша", "22 динамика"],
        },
        StockEntry {
            id: 6,
            brand: "Lexus",
            model: "RX 350",
            year: 2023,
            price: 5_800_000,
            old_price: Some(6_200_000),
            mileage: 18_000,
            body_type: BodyType::Suv,
            engine: EngineType::Hybrid,
            drive: DriveType::AllWheel,
            color: "silver",
            owners: 1,
            condition: Condition::Used,
            image: "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?w=800&q=80",
            power: 313,
            acceleration: 7.7,
            fuel_consumption: 6.5,
            max_speed: 200,
            features: ["Mark Levinson", "Head-Up Display", "Вентиляция", "Массаж"],
        },
    ];

    entries.into_iter().map(Vehicle::from).collect()
}
