use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString};

use super::entities::Vehicle;
use super::value_objects::{BodyType, Condition, EngineType, Rubles};

/// The user's current filter selection. Every field absent means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub brand: Option<String>,
    pub body_type: Option<BodyType>,
    pub engine: Option<EngineType>,
    pub condition: Option<Condition>,
    pub price_from: Option<Rubles>,
    pub price_to: Option<Rubles>,
}

/// Which control of the quick-search panel changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Brand,
    BodyType,
    Engine,
    Condition,
    PriceFrom,
    PriceTo,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply raw control input. Empty or non-numeric input clears the field.
    pub fn set_field(&mut self, field: FilterField, raw: &str) {
        let raw = raw.trim();
        match field {
            FilterField::Brand => self.brand = (!raw.is_empty()).then(|| raw.to_string()),
            FilterField::BodyType => self.body_type = BodyType::from_str(raw).ok(),
            FilterField::Engine => self.engine = EngineType::from_str(raw).ok(),
            FilterField::Condition => self.condition = Condition::from_str(raw).ok(),
            FilterField::PriceFrom => self.price_from = parse_price_bound(raw),
            FilterField::PriceTo => self.price_to = parse_price_bound(raw),
        }
    }

    /// Raw control value for a field, the inverse of `set_field`.
    pub fn field_value(&self, field: FilterField) -> String {
        match field {
            FilterField::Brand => self.brand.clone().unwrap_or_default(),
            FilterField::BodyType => self.body_type.map(|v| v.as_ref().to_string()).unwrap_or_default(),
            FilterField::Engine => self.engine.map(|v| v.as_ref().to_string()).unwrap_or_default(),
            FilterField::Condition => self.condition.map(|v| v.as_ref().to_string()).unwrap_or_default(),
            FilterField::PriceFrom => self.price_from.map(|v| v.value().to_string()).unwrap_or_default(),
            FilterField::PriceTo => self.price_to.map(|v| v.value().to_string()).unwrap_or_default(),
        }
    }

    /// Conjunction of every present criterion; price bounds are inclusive.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if self.brand.as_deref().is_some_and(|brand| brand != vehicle.brand) {
            return false;
        }
        if self.body_type.is_some_and(|body| body != vehicle.body_type) {
            return false;
        }
        if self.engine.is_some_and(|engine| engine != vehicle.engine) {
            return false;
        }
        if self.condition.is_some_and(|condition| condition != vehicle.condition) {
            return false;
        }
        if self.price_from.is_some_and(|from| vehicle.price < from) {
            return false;
        }
        if self.price_to.is_some_and(|to| vehicle.price > to) {
            return false;
        }
        true
    }
}

/// Any finite number is a bound: fractions round down, negatives clamp to zero and
/// values past `u64::MAX` saturate. Text that is not a number (or an empty box) is no bound.
pub fn parse_price_bound(raw: &str) -> Option<Rubles> {
    let raw = raw.trim();
    if let Ok(whole) = raw.parse::<u64>() {
        return Some(Rubles::new(whole));
    }
    let number = raw.parse::<f64>().ok().filter(|n| n.is_finite())?;
    Some(Rubles::new(number.trunc() as u64))
}

/// Stable filter over the catalog. Never fails; an empty result is a valid state.
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], criteria: &FilterCriteria) -> Vec<&'a Vehicle> {
    vehicles.iter().filter(|vehicle| criteria.matches(vehicle)).collect()
}
