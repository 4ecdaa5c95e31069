//! Map links, coordinate formatting and great-circle distances for an order-management admin panel.
//!
//! Every function is pure: invalid coordinates come back as [`GeoError::InvalidCoordinate`] (or `None` when
//! formatting) rather than as a malformed URL or a meaningless number.

pub mod distance;
pub mod domain;
pub mod error;
pub mod extensions;
pub mod format;
mod geo_coordinate_deserializer;
pub mod links;
pub mod location_parser;
pub mod settings;
pub mod validate;

pub use distance::distance;
pub use domain::{Address, CoordinateFormat, DistanceUnit, Dms, FormattedCoordinate, GeoCoordinate, Hemisphere, LocationData, MapViewEvent};
pub use error::GeoError;
pub use format::format_coordinate;
pub use links::{build_directions_link, build_map_link, build_street_view_link, MapLinks};
pub use location_parser::parse_location_data;
pub use settings::LinkSettings;
pub use validate::validate_coordinates;
