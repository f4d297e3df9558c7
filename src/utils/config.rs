use crate::validation::AdmissionPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Application configuration, stored as JSON
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Proximity gate constants
    pub admission: AdmissionPolicy,
    pub sensing: SensingConfig,
    pub refresh: RefreshConfig,
    pub points: PointsConfig,
}

/// Location acquisition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensingConfig {
    /// Simulated "checking location" delay before a reading is returned (ms)
    pub acquisition_delay_ms: u64,
    /// Seed for the mock location source and mock data; random when absent
    pub seed: Option<u64>,
}

/// Periodic crowdness refresh settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
}

/// Loyalty point settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    pub points_per_report: u32,
    /// Balance a new user starts with
    pub initial_points: u32,
}

impl Default for SensingConfig {
    fn default() -> Self {
        Self {
            acquisition_delay_ms: 1500,
            seed: None,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            points_per_report: 10,
            initial_points: 1250,
        }
    }
}

impl AppConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_secs)
    }

    pub fn acquisition_delay(&self) -> Duration {
        Duration::from_millis(self.sensing.acquisition_delay_ms)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// Outcome of validating a configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigReport {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

/// Loads, validates and saves the application configuration
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: AppConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Manager holding the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: AppConfig) -> Result<(), ConfigError> {
        Self::ensure_valid(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("failed to read config file '{}': {}", path_str, e),
        })?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
            message: format!("failed to parse config file '{}': {}", path_str, e),
        })?;

        Self::ensure_valid(&config)?;

        info!(path = %path_str, "configuration loaded");
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::Serialization {
            message: format!("failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("failed to write config file '{}': {}", path_str, e),
        })?;

        info!(path = %path_str, "configuration saved");
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the file the configuration was loaded from
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::Io {
                message: "no file path set for saving configuration".to_string(),
            }),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Change the gate constants at runtime
    pub fn set_admission_policy(&mut self, policy: AdmissionPolicy) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.admission = policy;
        self.update_config(config)
    }

    pub fn set_refresh_interval(&mut self, interval_secs: u64) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.refresh.interval_secs = interval_secs;
        self.update_config(config)
    }

    pub fn set_points_per_report(&mut self, points: u32) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.points.points_per_report = points;
        self.update_config(config)
    }

    /// Check every parameter and collect all problems
    pub fn validate_config(config: &AppConfig) -> ConfigReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let base = config.admission.base_max_distance_m;
        if !base.is_finite() || base < 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "admission.base_max_distance_m".to_string(),
                value: base.to_string(),
                reason: "must be a non-negative number of meters".to_string(),
            });
        } else if base > 1000.0 {
            warnings.push("base distance above 1km makes the proximity gate almost meaningless".to_string());
        }

        let multiplier = config.admission.accuracy_multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "admission.accuracy_multiplier".to_string(),
                value: multiplier.to_string(),
                reason: "must be a non-negative factor".to_string(),
            });
        }

        if config.refresh.interval_secs == 0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "refresh.interval_secs".to_string(),
                value: "0".to_string(),
                reason: "refresh interval must be at least one second".to_string(),
            });
        }

        if config.sensing.acquisition_delay_ms > 10_000 {
            warnings.push("location checks slower than 10s will feel unresponsive".to_string());
        }

        if config.points.points_per_report == 0 {
            warnings.push("reports earn no points".to_string());
        }

        ConfigReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn ensure_valid(config: &AppConfig) -> Result<(), ConfigError> {
        let report = Self::validate_config(config);
        match report.errors.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}
