use crate::domain::{DistanceUnit, GeoCoordinate};
use crate::error::GeoError;
use crate::extensions::float_ext::FixedPrecision;
use tracing::trace;

/// Great-circle distance between two coordinates using the Haversine formula, rounded to two decimals.
///
/// The Earth is treated as a perfect sphere. `unit` defaults to kilometers.
pub fn distance(a: GeoCoordinate, b: GeoCoordinate, unit: Option<DistanceUnit>) -> Result<f64, GeoError> {
    let a = a.validated()?;
    let b = b.validated()?;
    let unit = unit.unwrap_or_default();

    let delta_latitude = (b.latitude - a.latitude).to_radians();
    let delta_longitude = (b.longitude - a.longitude).to_radians();

    let h = (delta_latitude / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (delta_longitude / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for near-antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let distance = (unit.earth_radius() * c).round_to(2);
    trace!("Distance between {} and {}: {} {}", a, b, distance, unit);
    Ok(distance)
}
