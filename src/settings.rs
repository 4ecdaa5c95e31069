use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument};

pub const DEFAULT_ZOOM: u32 = 15;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    default_zoom: u32,
    street_view_hint: bool,
}

impl LinkSettings {
    /// Loads settings from a single configuration file. Keys missing from the file keep their defaults.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize::<LinkSettings>()?;

        info!("✅  Loaded link settings from '{}'", path.display());
        Ok(settings)
    }

    /// Zoom level used when a map link is requested without one.
    pub fn default_zoom(&self) -> u32 {
        self.default_zoom
    }

    /// Whether labelled map links carry the street-view layer parameters.
    pub fn street_view_hint(&self) -> bool {
        self.street_view_hint
    }
}

impl Default for LinkSettings {
    fn default() -> Self {
        LinkSettings {
            default_zoom: DEFAULT_ZOOM,
            street_view_hint: true,
        }
    }
}

#[cfg(test)]
pub struct LinkSettingsBuilder {
    settings: LinkSettings,
}

#[cfg(test)]
impl LinkSettingsBuilder {
    pub fn new() -> Self {
        LinkSettingsBuilder {
            settings: LinkSettings::default(),
        }
    }

    pub fn default_zoom(mut self, zoom: u32) -> Self {
        self.settings.default_zoom = zoom;
        self
    }

    pub fn street_view_hint(mut self, enabled: bool) -> Self {
        self.settings.street_view_hint = enabled;
        self
    }

    pub fn build(self) -> LinkSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use std::fs;
    use test_log::test;

    #[test]
    fn defaults() {
        let settings = LinkSettings::default();

        assert_eq!(settings.default_zoom(), 15);
        assert!(settings.street_view_hint());
    }

    #[test]
    fn load_reads_all_keys() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_dir().join("geolink_settings_full.toml");
        fs::write(&path, "default_zoom = 12\nstreet_view_hint = false\n")?;

        let settings = LinkSettings::load(&path)?;

        assert_eq!(settings, LinkSettingsBuilder::new().default_zoom(12).street_view_hint(false).build());
        Ok(())
    }

    #[test]
    fn load_keeps_defaults_for_missing_keys() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_dir().join("geolink_settings_partial.toml");
        fs::write(&path, "default_zoom = 18\n")?;

        let settings = LinkSettings::load(&path)?;

        assert_eq!(settings.default_zoom(), 18);
        assert!(settings.street_view_hint());
        Ok(())
    }

    #[test]
    fn load_fails_for_a_missing_file() {
        let path = temp_dir().join("geolink_settings_does_not_exist.toml");

        assert!(LinkSettings::load(&path).is_err());
    }
}
