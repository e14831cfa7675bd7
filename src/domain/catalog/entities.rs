use serde::{Deserialize, Serialize};

use super::value_objects::{BodyType, Condition, DriveType, EngineType, Rubles, Transmission, VehicleId};

/// A car on sale. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price: Rubles,
    pub old_price: Option<Rubles>,
    pub mileage: u32,
    pub body_type: BodyType,
    pub engine: EngineType,
    pub transmission: Transmission,
    pub drive: DriveType,
    pub color: String,
    pub owners: u8,
    pub condition: Condition,
    pub image: String,
    pub power: u16,
    pub acceleration: f32,
    pub fuel_consumption: f32,
    pub max_speed: u16,
    pub features: Vec<String>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }

    /// Discount badge value, `round((1 - price / old_price) * 100)`.
    pub fn discount_percent(&self) -> Option<u8> {
        let old = self.old_price.filter(|old| *old > self.price)?;
        let ratio = self.price.value() as f64 / old.value() as f64;
        Some(((1.0 - ratio) * 100.0).round() as u8)
    }

    pub fn savings(&self) -> Option<Rubles> {
        let old = self.old_price.filter(|old| *old > self.price)?;
        Some(Rubles::new(old.value() - self.price.value()))
    }

    /// Zero mileage is shown as "Новый" regardless of the condition flag.
    pub fn mileage_label(&self) -> String {
        if self.mileage == 0 {
            "Новый".to_string()
        } else {
            format!("{} км", crate::format::group_thousands(self.mileage as u64))
        }
    }
}
