use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::{Result, SimError};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub num_floors: u8,
    pub num_cars: usize,
    pub door_hold_ms: u64,
    pub travel_interval_ms: u64,
    pub tick_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_floors: 10,
            num_cars: 2,
            door_hold_ms: 10_000,
            travel_interval_ms: 2_000,
            tick_ms: 100,
        }
    }
}

impl SimulationConfig {
    /// Reads the config file at `path`. A missing file falls back to the
    /// default settings, a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "no configuration file provided, using default settings");
                SimulationConfig::default()
            }
            Err(e) => return Err(e.into()),
        };
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.num_floors < 1 {
            return Err(SimError::InvalidConfig("numFloors must be at least 1".into()));
        }
        if self.num_cars < 1 {
            return Err(SimError::InvalidConfig("numCars must be at least 1".into()));
        }
        if self.tick_ms == 0 {
            return Err(SimError::InvalidConfig("tickMs must be non-zero".into()));
        }
        Ok(self)
    }

    pub fn door_hold(&self) -> Duration {
        Duration::from_millis(self.door_hold_ms)
    }

    pub fn travel_interval(&self) -> Duration {
        Duration::from_millis(self.travel_interval_ms)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn car_settings(&self) -> CarSettings {
        CarSettings {
            num_floors: self.num_floors,
            door_hold: self.door_hold(),
            travel_interval: self.travel_interval(),
        }
    }
}

/// The part of the configuration a single car needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSettings {
    pub num_floors: u8,
    pub door_hold: Duration,
    pub travel_interval: Duration,
}

impl Default for CarSettings {
    fn default() -> Self {
        SimulationConfig::default().car_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_building() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_floors, 10);
        assert_eq!(config.num_cars, 2);
        assert_eq!(config.door_hold(), Duration::from_secs(10));
        assert_eq!(config.travel_interval(), Duration::from_secs(2));
        assert_eq!(config.tick_period(), Duration::from_millis(100));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let config: SimulationConfig = serde_json::from_str(r#"{ "numFloors": 4, "doorHoldMs": 3000 }"#).unwrap();
        assert_eq!(config.num_floors, 4);
        assert_eq!(config.door_hold_ms, 3000);
        assert_eq!(config.travel_interval_ms, 2000);
    }

    #[test]
    fn validation_rejects_empty_building() {
        let config = SimulationConfig { num_floors: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
        let config = SimulationConfig { num_cars: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
        let config = SimulationConfig { tick_ms: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("lift-sim-config-does-not-exist.json");
        let config = SimulationConfig::load(&path).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("lift-sim-bad-config-{}.json", std::process::id()));
        fs::write(&path, "{ numFloors: ").unwrap();
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SimError::Json(_))));
    }
}
