use crate::domain::GeoCoordinate;
use crate::error::GeoError;
use crate::extensions::float_ext::FixedPrecision;
use crate::settings::LinkSettings;
use tracing::{debug, warn};
use urlencoding::encode;

const MAPS_URL: &str = "https://www.google.com/maps";

/// Builds map, directions and street-view URLs. None of them require an API key.
#[derive(Clone, Debug, Default)]
pub struct MapLinks {
    settings: LinkSettings,
}

impl MapLinks {
    pub fn new(settings: LinkSettings) -> Self {
        MapLinks { settings }
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    /// A map-viewer URL centered on `coordinate`.
    ///
    /// `zoom` falls back to the configured default; a zoom of 0 omits the parameter. A non-blank label is
    /// percent-encoded and attached, together with the street-view layer parameters when enabled.
    pub fn map_link(&self, coordinate: GeoCoordinate, label: Option<&str>, zoom: Option<u32>) -> Result<String, GeoError> {
        let position = position(coordinate)?;
        let mut url = format!("{}?q={}", MAPS_URL, position);

        let zoom = zoom.unwrap_or(self.settings.default_zoom());
        if zoom > 0 {
            url.push_str(&format!("&z={}", zoom));
        }

        if let Some(label) = encoded(label) {
            url.push_str(&format!("&label={}", label));
            if self.settings.street_view_hint() {
                url.push_str(&format!("&layer=c&cbll={}&cbp=", position));
            }
        }

        debug!("Built map link {}", url);
        Ok(url)
    }

    /// A driving-directions URL to `destination`, starting from `origin` when one is given.
    pub fn directions_link(&self, destination: GeoCoordinate, origin: Option<&str>) -> Result<String, GeoError> {
        let position = position(destination)?;
        let mut url = format!("{}/dir/?api=1", MAPS_URL);

        if let Some(origin) = encoded(origin) {
            url.push_str(&format!("&origin={}", origin));
        }
        url.push_str(&format!("&destination={}&travelmode=driving", position));

        debug!("Built directions link {}", url);
        Ok(url)
    }

    /// A panorama-viewer URL centered on `coordinate`.
    pub fn street_view_link(&self, coordinate: GeoCoordinate) -> Result<String, GeoError> {
        let position = position(coordinate)?;
        Ok(format!("{}/@?api=1&map_action=pano&viewpoint={}", MAPS_URL, position))
    }
}

/// Renders a valid coordinate as `lat,lng` with six fractional digits.
pub(crate) fn position(coordinate: GeoCoordinate) -> Result<String, GeoError> {
    let coordinate = coordinate.validated().inspect_err(|err| warn!("⚠️ No link for {}", err))?;
    Ok(format!("{},{}", coordinate.latitude.to_fixed(6), coordinate.longitude.to_fixed(6)))
}

fn encoded(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|text| !text.is_empty()).map(|text| encode(text).into_owned())
}
