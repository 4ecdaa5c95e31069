use crate::domain::GeoCoordinate;
use crate::geo_coordinate_deserializer::RawCoordinateValue;
use crate::links::MapLinks;
use serde::Deserialize;

/// A customer delivery address as returned by the admin backend.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct Address {
    address_line1: Option<String>,
    address_line2: Option<String>,
    landmark: Option<String>,
    city: Option<String>,
    state: Option<String>,
    pincode: Option<Pincode>,
    latitude: Option<RawCoordinateValue>,
    longitude: Option<RawCoordinateValue>,
}

impl Address {
    /// Joins the present parts, e.g. `12 MG Road, Near Metro Station, Bengaluru, Karnataka, Pincode: 560001`.
    pub fn formatted(&self) -> String {
        let parts = [
            self.address_line1.as_deref().map(str::to_string),
            self.address_line2.as_deref().map(str::to_string),
            non_blank(&self.landmark).map(|landmark| format!("Near {}", landmark)),
            self.city.as_deref().map(str::to_string),
            self.state.as_deref().map(str::to_string),
            self.pincode.as_ref().and_then(Pincode::non_blank).map(|pincode| format!("Pincode: {}", pincode)),
        ];

        parts
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The address' coordinate, if both parts are present and valid.
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        GeoCoordinate::parse(&self.latitude, &self.longitude).ok()
    }

    /// A map link labelled with the formatted address, if the address has a valid coordinate.
    pub fn map_link(&self, links: &MapLinks) -> Option<String> {
        let coordinate = self.coordinate()?;
        links.map_link(coordinate, Some(self.formatted().as_str()), None).ok()
    }
}

/// Postal codes arrive either as text or as a bare JSON number.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum Pincode {
    Number(u64),
    Text(String),
}

impl Pincode {
    fn non_blank(&self) -> Option<String> {
        match self {
            Pincode::Number(pincode) => Some(pincode.to_string()),
            Pincode::Text(pincode) => Some(pincode.trim()).filter(|pincode| !pincode.is_empty()).map(str::to_string),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn address(json: &str) -> Address {
        serde_json::from_str::<Address>(json).unwrap()
    }

    #[test]
    fn formats_all_parts() {
        let address = address(
            r#"{
                "address_line1": "12 MG Road",
                "address_line2": "Flat 4B",
                "landmark": "Metro Station",
                "city": "Bengaluru",
                "state": "Karnataka",
                "pincode": "560001"
            }"#,
        );

        assert_eq!(
            address.formatted(),
            "12 MG Road, Flat 4B, Near Metro Station, Bengaluru, Karnataka, Pincode: 560001"
        );
    }

    #[test]
    fn formats_skipping_missing_and_blank_parts() {
        let address = address(r#"{"address_line1": "12 MG Road", "address_line2": "", "landmark": " ", "city": "Bengaluru"}"#);

        assert_eq!(address.formatted(), "12 MG Road, Bengaluru");
    }

    #[test]
    fn formats_a_numeric_pincode() {
        let address = address(r#"{"city": "Bengaluru", "pincode": 560001, "latitude": 12.9716, "longitude": 77.5946}"#);

        assert_eq!(address.formatted(), "Bengaluru, Pincode: 560001");
        assert_eq!(address.coordinate(), Some(GeoCoordinate::new(12.9716, 77.5946)));
    }

    #[test]
    fn skips_a_blank_pincode() {
        let address = address(r#"{"city": "Bengaluru", "pincode": "  "}"#);

        assert_eq!(address.formatted(), "Bengaluru");
    }

    #[test]
    fn empty_address_formats_as_empty_text() {
        assert_eq!(Address::default().formatted(), "");
    }

    #[test]
    fn coordinate_accepts_numbers_and_numeric_strings() {
        let address = address(r#"{"latitude": "12.9716", "longitude": 77.5946}"#);

        assert_eq!(address.coordinate(), Some(GeoCoordinate::new(12.9716, 77.5946)));
    }

    #[test]
    fn coordinate_is_none_when_incomplete_or_invalid() {
        assert_eq!(address(r#"{"latitude": 12.9716}"#).coordinate(), None);
        assert_eq!(address(r#"{"latitude": 12.9716, "longitude": null}"#).coordinate(), None);
        assert_eq!(address(r#"{"latitude": 120, "longitude": 0}"#).coordinate(), None);
    }

    #[test]
    fn map_link_is_labelled_with_the_formatted_address() {
        let address = address(r#"{"city": "Bengaluru", "latitude": 12.9716, "longitude": 77.5946}"#);

        let link = address.map_link(&MapLinks::default());

        assert_eq!(
            link.as_deref(),
            Some("https://www.google.com/maps?q=12.971600,77.594600&z=15&label=Bengaluru&layer=c&cbll=12.971600,77.594600&cbp=")
        );
    }

    #[test]
    fn map_link_without_a_coordinate_is_none() {
        let address = address(r#"{"city": "Bengaluru"}"#);

        assert_eq!(address.map_link(&MapLinks::default()), None);
    }
}
