use crate::domain::{GeoCoordinate, LocationData};
use std::num::ParseFloatError;
use tracing::debug;

const SEPARATOR: &str = " | ";

/// Parses a stored location string.
///
/// Auto-detected locations look like `"Address | LAT | LON | MAP_LINK"`. Anything else, including a combined
/// string whose coordinates don't parse, is treated as a manually entered address.
pub fn parse_location_data(text: &str) -> LocationData {
    if !text.contains(SEPARATOR) {
        return LocationData::manual(text.to_string());
    }

    let parts = text.split(SEPARATOR).collect::<Vec<_>>();
    if parts.len() < 4 {
        return LocationData::manual(text.to_string());
    }

    match (parse_part(parts[1]), parse_part(parts[2])) {
        (Ok(latitude), Ok(longitude)) => {
            let coordinate = latitude.zip(longitude).map(GeoCoordinate::from);
            let map_link = Some(parts[3].trim()).filter(|link| !link.is_empty()).map(str::to_string);
            LocationData::auto_detected(parts[0].to_string(), coordinate, map_link)
        }
        (latitude, longitude) => {
            debug!("Treating '{}' as a manual address: {:?}, {:?}", text, latitude, longitude);
            LocationData::manual(text.to_string())
        }
    }
}

// An empty part is a missing value, not an error
fn parse_part(part: &str) -> Result<Option<f64>, ParseFloatError> {
    let part = part.trim();
    if part.is_empty() {
        return Ok(None);
    }
    part.parse::<f64>().map(Some)
}
