//! Bounded side-by-side comparison selection and the comparison table rows.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::domain::catalog::{Vehicle, VehicleId};
use crate::format::{decimal, group_thousands};

pub const COMPARISON_CAPACITY: usize = 4;
pub const CAPACITY_NOTICE: &str = "Можно сравнивать максимум 4 автомобиля";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Set already full; nothing changed.
    CapacityReached,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<VehicleId>,
}

impl ComparisonSet {
    pub fn toggle(&mut self, id: VehicleId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= COMPARISON_CAPACITY {
            return ToggleOutcome::CapacityReached;
        }
        self.ids.push(id);
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[VehicleId] {
        &self.ids
    }
}

/// Rows of the comparison table, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ComparisonRow {
    Price,
    Year,
    Power,
    Mileage,
    Acceleration,
    FuelConsumption,
}

impl ComparisonRow {
    pub fn all() -> impl Iterator<Item = ComparisonRow> {
        ComparisonRow::iter()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Цена",
            Self::Year => "Год",
            Self::Power => "Мощность",
            Self::Mileage => "Пробег",
            Self::Acceleration => "Разгон",
            Self::FuelConsumption => "Расход",
        }
    }

    pub fn cell(&self, vehicle: &Vehicle) -> String {
        match self {
            Self::Price => format!("{} ₽", group_thousands(vehicle.price.value())),
            Self::Year => vehicle.year.to_string(),
            Self::Power => format!("{} л.с.", vehicle.power),
            Self::Mileage => vehicle.mileage_label(),
            Self::Acceleration => format!("{} сек", decimal(vehicle.acceleration)),
            Self::FuelConsumption => format!("{} л/100км", decimal(vehicle.fuel_consumption)),
        }
    }
}
