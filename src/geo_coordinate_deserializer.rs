use crate::domain::GeoCoordinate;
use crate::domain::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::extensions::coordinate_value_ext::CoordinateValue;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// A latitude or longitude as the backend sends it: a JSON number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue for RawCoordinateValue {
    fn to_coordinate_value(&self) -> Option<f64> {
        match self {
            RawCoordinateValue::Number(value) => value.to_coordinate_value(),
            RawCoordinateValue::Text(value) => value.to_coordinate_value(),
        }
    }

    fn describe(&self) -> String {
        match self {
            RawCoordinateValue::Number(value) => value.describe(),
            RawCoordinateValue::Text(value) => value.describe(),
        }
    }
}

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "lat")]
            latitude: RawCoordinateValue,
            #[serde(alias = "lng", alias = "lon")]
            longitude: RawCoordinateValue,
        }

        let inner = Inner::deserialize(deserializer)?;
        let latitude = inner
            .latitude
            .to_coordinate_value()
            .ok_or_else(|| D::Error::custom(format!("invalid location latitude: '{}', must be a number", inner.latitude.describe())))?;
        let longitude = inner
            .longitude
            .to_coordinate_value()
            .ok_or_else(|| D::Error::custom(format!("invalid location longitude: '{}', must be a number", inner.longitude.describe())))?;

        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(Error::custom(format!("invalid location latitude: {}, must be between -90 and 90", latitude)));
        }

        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(Error::custom(format!("invalid location longitude: {}, must be between -180 and 180", longitude)));
        }

        Ok(GeoCoordinate { latitude, longitude })
    }
}
