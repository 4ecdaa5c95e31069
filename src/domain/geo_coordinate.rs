use crate::error::GeoError;
use crate::extensions::coordinate_value_ext::CoordinateValue;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in decimal degrees.
///
/// This is a plain value: it can hold out-of-range numbers, which is why every operation consuming it checks
/// [`GeoCoordinate::is_valid`] first. Use [`GeoCoordinate::parse`] to build one that is known to be valid.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude }
    }

    /// Builds a valid coordinate from numbers, numeric text or optional values.
    pub fn parse<La, Lo>(latitude: La, longitude: Lo) -> Result<Self, GeoError>
    where
        La: CoordinateValue,
        Lo: CoordinateValue,
    {
        match (latitude.to_coordinate_value(), longitude.to_coordinate_value()) {
            (Some(lat), Some(lng)) if is_valid_latitude(lat) && is_valid_longitude(lng) => Ok(GeoCoordinate::new(lat, lng)),
            _ => Err(GeoError::invalid(latitude.describe(), longitude.describe())),
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude)
    }

    /// Returns `self` if valid, `GeoError::InvalidCoordinate` otherwise.
    pub fn validated(self) -> Result<Self, GeoError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GeoError::invalid(self.latitude, self.longitude))
        }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<[f64; 2]> for GeoCoordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        GeoCoordinate::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoCoordinate::new(latitude, longitude)
    }
}

// Clipboard representation, e.g. "12.9716, 77.5946"
impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

fn is_valid_latitude(latitude: f64) -> bool {
    (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude)
}

fn is_valid_longitude(longitude: f64) -> bool {
    (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::origin(0.0, 0.0, true)]
    #[case::north_pole(90.0, 180.0, true)]
    #[case::south_pole(-90.0, -180.0, true)]
    #[case::latitude_too_high(90.0001, 0.0, false)]
    #[case::latitude_too_low(-90.0001, 0.0, false)]
    #[case::longitude_too_high(0.0, 180.0001, false)]
    #[case::longitude_too_low(0.0, -180.0001, false)]
    #[case::nan(f64::NAN, 0.0, false)]
    #[case::infinity(0.0, f64::NEG_INFINITY, false)]
    fn is_valid(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: bool) {
        assert_eq!(GeoCoordinate::new(latitude, longitude).is_valid(), expected);
    }

    #[test]
    fn parse_accepts_numeric_text() {
        assert_eq!(GeoCoordinate::parse("12.9716", " 77.5946"), Ok(GeoCoordinate::new(12.9716, 77.5946)));
    }

    #[test]
    fn parse_rejects_out_of_range_values() {
        assert_eq!(
            GeoCoordinate::parse(91.0, 0.0),
            Err(GeoError::InvalidCoordinate {
                latitude: "91".to_string(),
                longitude: "0".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_blank_text() {
        assert!(GeoCoordinate::parse("", "4.0").is_err());
    }

    #[test]
    fn parse_reports_missing_values() {
        assert_eq!(
            GeoCoordinate::parse(None::<&str>, Some("4.0")),
            Err(GeoError::InvalidCoordinate {
                latitude: "missing".to_string(),
                longitude: "4.0".to_string()
            })
        );
    }

    #[test]
    fn validated_returns_an_error_for_invalid_coordinates() {
        assert!(GeoCoordinate::new(0.0, 200.0).validated().is_err());
        assert_eq!(GeoCoordinate::new(1.0, 2.0).validated(), Ok(GeoCoordinate::new(1.0, 2.0)));
    }

    #[test]
    fn displays_as_clipboard_text() {
        assert_eq!(GeoCoordinate::new(51.8615899, 4.3580323).to_string(), "51.8615899, 4.3580323");
    }
}
