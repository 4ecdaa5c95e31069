use crate::domain::GeoCoordinate;
use crate::error::GeoError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Analytics payload recorded when someone opens a map link.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapViewEvent {
    latitude: f64,
    longitude: f64,
    address: String,
    timestamp: DateTime<Utc>,
}

impl MapViewEvent {
    pub fn new(coordinate: GeoCoordinate, address: Option<&str>, timestamp: DateTime<Utc>) -> Result<Self, GeoError> {
        let coordinate = coordinate.validated()?;
        Ok(MapViewEvent {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            address: address.map(str::trim).unwrap_or_default().to_string(),
            timestamp,
        })
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_to_json() -> serde_json::Result<()> {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let event = MapViewEvent::new(GeoCoordinate::new(12.9716, 77.5946), Some(" MG Road, Bengaluru "), timestamp).unwrap();

        assert_eq!(
            event.to_json()?,
            r#"{"latitude":12.9716,"longitude":77.5946,"address":"MG Road, Bengaluru","timestamp":"2025-03-14T09:30:00Z"}"#
        );
        Ok(())
    }

    #[test]
    fn missing_address_is_empty() {
        let event = MapViewEvent::new(GeoCoordinate::new(0.0, 0.0), None, Utc::now()).unwrap();

        assert_eq!(event.address(), "");
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let result = MapViewEvent::new(GeoCoordinate::new(-91.0, 0.0), None, Utc::now());

        assert!(matches!(result, Err(GeoError::InvalidCoordinate { .. })));
    }
}
