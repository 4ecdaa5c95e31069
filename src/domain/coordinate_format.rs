use crate::domain::{Dms, GeoCoordinate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum CoordinateFormat {
    #[default]
    Decimal,
    Dms,
    Url,
    Array,
    Object,
}

// Unknown formats fall back to decimal
impl From<&str> for CoordinateFormat {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "dms" => CoordinateFormat::Dms,
            "url" => CoordinateFormat::Url,
            "array" => CoordinateFormat::Array,
            "object" => CoordinateFormat::Object,
            _ => CoordinateFormat::Decimal,
        }
    }
}

impl From<Option<&str>> for CoordinateFormat {
    fn from(value: Option<&str>) -> Self {
        value.map(CoordinateFormat::from).unwrap_or_default()
    }
}

/// A coordinate rendered for display. Serializes to the bare JSON shape of each presentation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormattedCoordinate {
    Decimal { latitude: String, longitude: String },
    Dms { latitude: Dms, longitude: Dms },
    Url(String),
    Array([f64; 2]),
    Object(GeoCoordinate),
}

impl Display for FormattedCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormattedCoordinate::Decimal { latitude, longitude } => write!(f, "{}, {}", latitude, longitude),
            FormattedCoordinate::Dms { latitude, longitude } => write!(f, "{}, {}", latitude, longitude),
            FormattedCoordinate::Url(value) => write!(f, "{}", value),
            FormattedCoordinate::Array([latitude, longitude]) => write!(f, "[{}, {}]", latitude, longitude),
            FormattedCoordinate::Object(coordinate) => write!(f, "{}", coordinate),
        }
    }
}
