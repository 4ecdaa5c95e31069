mod map_links;

use crate::domain::GeoCoordinate;
use crate::error::GeoError;

pub use map_links::MapLinks;
pub(crate) use map_links::position;

/// See [`MapLinks::map_link`]. Uses the default settings.
pub fn build_map_link(coordinate: GeoCoordinate, label: Option<&str>, zoom: Option<u32>) -> Result<String, GeoError> {
    MapLinks::default().map_link(coordinate, label, zoom)
}

/// See [`MapLinks::directions_link`].
pub fn build_directions_link(destination: GeoCoordinate, origin: Option<&str>) -> Result<String, GeoError> {
    MapLinks::default().directions_link(destination, origin)
}

/// See [`MapLinks::street_view_link`].
pub fn build_street_view_link(coordinate: GeoCoordinate) -> Result<String, GeoError> {
    MapLinks::default().street_view_link(coordinate)
}
