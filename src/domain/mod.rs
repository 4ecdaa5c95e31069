mod address;
mod coordinate_format;
mod distance_unit;
mod dms;
mod geo_coordinate;
mod location_data;
mod map_view_event;

pub use address::Address;
pub use coordinate_format::{CoordinateFormat, FormattedCoordinate};
pub use distance_unit::DistanceUnit;
pub use dms::{Dms, Hemisphere};
pub use geo_coordinate::GeoCoordinate;
pub use geo_coordinate::{MAX_LATITUDE, MAX_LONGITUDE};
pub use location_data::LocationData;
pub use map_view_event::MapViewEvent;
