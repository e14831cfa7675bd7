use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Catalog identity of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display, Serialize, Deserialize)]
pub struct VehicleId(u32);

impl VehicleId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Whole rubles. No minor units are ever displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize)]
pub struct Rubles(u64);

impl Rubles {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Rubles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ₽", crate::format::group_thousands(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Sedan,
    Suv,
    Hatchback,
}

impl BodyType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sedan => "Седан",
            Self::Suv => "Внедорожник",
            Self::Hatchback => "Хэтчбек",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    Benzin,
    Diesel,
    Hybrid,
    Electric,
}

impl EngineType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Benzin => "Бензин",
            Self::Diesel => "Дизель",
            Self::Hybrid => "Гибрид",
            Self::Electric => "Электро",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Auto,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum DriveType {
    #[strum(serialize = "fwd")]
    #[serde(rename = "fwd")]
    Front,
    #[strum(serialize = "rwd")]
    #[serde(rename = "rwd")]
    Rear,
    #[strum(serialize = "4wd")]
    #[serde(rename = "4wd")]
    AllWheel,
}

impl Transmission {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auto => "Автомат",
            Self::Manual => "Механика",
        }
    }
}

impl DriveType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Front => "Передний",
            Self::Rear => "Задний",
            Self::AllWheel => "Полный",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "Новый",
            Self::Used => "С пробегом",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_names_match_select_values() {
        assert_eq!(BodyType::Suv.as_ref(), "suv");
        assert_eq!(EngineType::from_str("electric").unwrap(), EngineType::Electric);
        assert_eq!(DriveType::AllWheel.to_string(), "4wd");
        assert!(Condition::from_str("").is_err());
    }

    #[test]
    fn rubles_display_groups_thousands() {
        assert_eq!(Rubles::new(8_500_000).to_string(), "8\u{a0}500\u{a0}000 ₽");
    }
}
