use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    /// Mean Earth radius in this unit.
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 6371.0,
            DistanceUnit::Miles => 3958.8,
            DistanceUnit::NauticalMiles => 3440.1,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nm",
        }
    }
}

// Unknown units fall back to kilometers
impl From<&str> for DistanceUnit {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mi" | "m" | "mile" | "miles" => DistanceUnit::Miles,
            "nm" | "n" | "nmi" | "nautical" | "nautical_miles" => DistanceUnit::NauticalMiles,
            _ => DistanceUnit::Kilometers,
        }
    }
}

impl From<String> for DistanceUnit {
    fn from(value: String) -> Self {
        DistanceUnit::from(value.as_str())
    }
}

impl From<DistanceUnit> for String {
    fn from(value: DistanceUnit) -> Self {
        value.abbreviation().to_string()
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
