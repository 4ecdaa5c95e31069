use crate::domain::{CoordinateFormat, Dms, FormattedCoordinate, GeoCoordinate, Hemisphere};
use crate::extensions::float_ext::FixedPrecision;
use crate::links::position;
use tracing::debug;

/// Renders a valid coordinate in the requested presentation. Returns `None` for invalid coordinates.
pub fn format_coordinate(coordinate: GeoCoordinate, format: CoordinateFormat) -> Option<FormattedCoordinate> {
    if !coordinate.is_valid() {
        debug!("Not formatting invalid coordinate {}", coordinate);
        return None;
    }

    let formatted = match format {
        CoordinateFormat::Decimal => FormattedCoordinate::Decimal {
            latitude: coordinate.latitude.to_fixed(6),
            longitude: coordinate.longitude.to_fixed(6),
        },
        CoordinateFormat::Dms => FormattedCoordinate::Dms {
            latitude: to_dms(coordinate.latitude, Hemisphere::North, Hemisphere::South),
            longitude: to_dms(coordinate.longitude, Hemisphere::East, Hemisphere::West),
        },
        CoordinateFormat::Url => FormattedCoordinate::Url(position(coordinate).ok()?),
        CoordinateFormat::Array => FormattedCoordinate::Array(coordinate.as_array()),
        CoordinateFormat::Object => FormattedCoordinate::Object(coordinate),
    };
    Some(formatted)
}

// The hemisphere follows the sign of the input; zero (including -0.0) counts as positive
fn to_dms(decimal: f64, positive: Hemisphere, negative: Hemisphere) -> Dms {
    let absolute = decimal.abs();
    let degrees = absolute.floor();
    let minutes_decimal = (absolute - degrees) * 60.0;
    let minutes = minutes_decimal.floor();
    let seconds = ((minutes_decimal - minutes) * 60.0).round_to(2);
    let hemisphere = if decimal >= 0.0 { positive } else { negative };

    Dms::new(degrees as u32, minutes as u32, seconds, hemisphere)
}
