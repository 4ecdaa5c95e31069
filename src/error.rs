use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate: latitude '{latitude}', longitude '{longitude}'")]
    InvalidCoordinate { latitude: String, longitude: String },
}

impl GeoError {
    pub(crate) fn invalid(latitude: impl ToString, longitude: impl ToString) -> Self {
        GeoError::InvalidCoordinate {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn displays_the_offending_values() {
        let error = GeoError::invalid(91.0, "abc");

        assert_eq!(error.to_string(), "invalid coordinate: latitude '91', longitude 'abc'");
    }
}
