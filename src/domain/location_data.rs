use crate::domain::GeoCoordinate;
use crate::links::MapLinks;

/// A customer location as stored by the backend, either auto-detected (`"Address | LAT | LON | MAP_LINK"`) or
/// typed in manually.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct LocationData {
    address: String,
    coordinate: Option<GeoCoordinate>,
    map_link: Option<String>,
    auto_detected: bool,
}

impl LocationData {
    pub fn auto_detected(address: String, coordinate: Option<GeoCoordinate>, map_link: Option<String>) -> Self {
        LocationData {
            address,
            coordinate,
            map_link,
            auto_detected: true,
        }
    }

    pub fn manual(address: String) -> Self {
        LocationData {
            address,
            coordinate: None,
            map_link: None,
            auto_detected: false,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// The stored coordinate. It is not range-checked; link building does that.
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        self.coordinate
    }

    pub fn stored_map_link(&self) -> Option<&str> {
        self.map_link.as_deref()
    }

    pub fn is_auto_detected(&self) -> bool {
        self.auto_detected
    }

    /// The stored map link, or one built from a valid coordinate.
    pub fn map_link(&self, links: &MapLinks) -> Option<String> {
        match &self.map_link {
            Some(link) => Some(link.clone()),
            None => links.map_link(self.coordinate?, None, None).ok(),
        }
    }
}
