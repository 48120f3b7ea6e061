use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use bevy::prelude::*;
use ron::de::from_reader;
use crate::core::ride_config::RideConfig;
use crate::core::ride_error::RideError;

pub const DEFAULT_CONFIG_PATH: &str = "assets/ride.ron";

pub fn import_ride_config(path: impl AsRef<Path>) -> Result<RideConfig, RideError> {
    let file = File::open(path.as_ref())?;
    let config: RideConfig = from_reader(file)?;
    config.validate()?;
    Ok(config)
}

// Missing file means "use defaults"; anything else is worth a warning.
pub fn load_or_default(path: impl AsRef<Path>) -> RideConfig {
    let path = path.as_ref();
    match import_ride_config(path) {
        Ok(config) => {
            info!("[Ride] Loaded config from {}", path.display());
            config
        }
        Err(RideError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            debug!("[Ride] No config at {}, using defaults", path.display());
            RideConfig::default()
        }
        Err(e) => {
            warn!("[Ride] {} ({}), using defaults", e, path.display());
            RideConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("coaster_vr_{}_{}.ron", name, std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = import_ride_config("definitely/not/here.ron");
        assert!(matches!(result, Err(RideError::Io(_))));
        assert_eq!(load_or_default("definitely/not/here.ron"), RideConfig::default());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = write_temp("malformed", "(seed: ");
        assert!(matches!(import_ride_config(&path), Err(RideError::Parse(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn invalid_values_are_rejected_after_parsing() {
        let path = write_temp("invalid", "(physics: (min_velocity: 0.5, max_velocity: 0.1))");
        assert!(matches!(import_ride_config(&path), Err(RideError::Invalid(_))));
        assert_eq!(load_or_default(&path), RideConfig::default());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn shipped_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let config = import_ride_config(path).unwrap();
        assert_eq!(config, RideConfig::default());
    }
}
