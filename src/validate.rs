use crate::domain::GeoCoordinate;
use crate::extensions::coordinate_value_ext::CoordinateValue;

/// Whether the inputs form a valid coordinate. Absent, blank, non-numeric and out-of-range inputs are `false`.
pub fn validate_coordinates<La, Lo>(latitude: La, longitude: Lo) -> bool
where
    La: CoordinateValue,
    Lo: CoordinateValue,
{
    GeoCoordinate::parse(latitude, longitude).is_ok()
}
