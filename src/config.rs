//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the synthetic demo scenario. Load
/// from TOML with [`ScenarioConfig::from_toml_file`] or use a named
/// preset via [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Run span, seed, and policy selection.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Battery pack parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Optional on-disk price/production series.
    #[serde(default)]
    pub data: DataConfig,
    /// Synthetic series parameters, used when no data files are given.
    #[serde(default)]
    pub synthetic: SyntheticConfig,
}

/// Run span, seed, and policy selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of whole days to simulate (must be > 0).
    pub days: usize,
    /// Seed for synthetic series generation.
    pub seed: u64,
    /// Planning policy: `"spread"` or `"hold"`.
    pub policy: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 365,
            seed: 42,
            policy: "spread".to_string(),
        }
    }
}

/// Battery pack parameters. Defaults describe the community-storage
/// case study the simulator was built around: 43 modules of 4.56 kWh,
/// roughly 200 kWh of storage.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Capacity of one module (kWh).
    pub module_capacity_kwh: f64,
    /// Charge/discharge power of one module (kWh per hour).
    pub module_power_kw: f64,
    /// Rated cycle life of the pack.
    pub cycle_life: u32,
    /// Minimum price spread that justifies a cycle (ct/kWh).
    pub relative_cost_ct: f64,
    /// Number of identical modules in the pack.
    pub module_count: u32,
    /// Purchase price of one module (€).
    pub module_price_eur: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            module_capacity_kwh: 4.56,
            module_power_kw: 2.4,
            cycle_life: 6000,
            relative_cost_ct: 4.7,
            module_count: 43,
            module_price_eur: 1294.0,
        }
    }
}

/// Optional on-disk series: flat JSON arrays of hourly values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Hourly day-ahead prices (ct/kWh) for the simulated year.
    pub prices_path: Option<PathBuf>,
    /// Hourly produced energy (kWh) for the simulated year.
    pub production_path: Option<PathBuf>,
}

/// Synthetic series parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyntheticConfig {
    /// Peak production of the plant (kW).
    pub peak_kw: f64,
    /// Hour of sunrise (inclusive).
    pub sunrise_hour: usize,
    /// Hour of sunset (exclusive).
    pub sunset_hour: usize,
    /// Multiplicative production noise standard deviation.
    pub production_noise_std: f64,
    /// Mean price level (ct/kWh).
    pub price_base_ct: f64,
    /// Amplitude of the daily price sinusoid (ct/kWh).
    pub price_amp_ct: f64,
    /// Phase offset of the price sinusoid (radians).
    pub price_phase_rad: f64,
    /// Additive price noise standard deviation (ct/kWh).
    pub price_noise_std: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            peak_kw: 200.0,
            sunrise_hour: 6,
            sunset_hour: 18,
            production_noise_std: 0.05,
            price_base_ct: 22.0,
            price_amp_ct: 9.0,
            price_phase_rad: 1.2,
            price_noise_std: 1.5,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the synthetic demo scenario: defaults everywhere, series
    /// generated from the seed.
    pub fn synthetic() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            battery: BatteryConfig::default(),
            data: DataConfig::default(),
            synthetic: SyntheticConfig::default(),
        }
    }

    /// Returns the Buchtzig case study: the real 200 kWh community
    /// pack replayed against the measured 2022 price and production
    /// files.
    pub fn buchtzig() -> Self {
        Self {
            data: DataConfig {
                prices_path: Some(PathBuf::from("data/prices/2022.txt")),
                production_path: Some(PathBuf::from("data/production/production_2022.txt")),
            },
            ..Self::synthetic()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["synthetic", "buchtzig"];

    /// Valid policy names.
    pub const POLICIES: &[&str] = &["spread", "hold"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "synthetic" => Ok(Self::synthetic()),
            "buchtzig" => Ok(Self::buchtzig()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML
    /// is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains
    /// unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.days == 0 {
            errors.push(ConfigError {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }
        if !Self::POLICIES.contains(&s.policy.as_str()) {
            errors.push(ConfigError {
                field: "simulation.policy".into(),
                message: format!(
                    "must be one of {}, got \"{}\"",
                    Self::POLICIES.join(", "),
                    s.policy
                ),
            });
        }

        let b = &self.battery;
        if b.module_capacity_kwh <= 0.0 {
            errors.push(ConfigError {
                field: "battery.module_capacity_kwh".into(),
                message: "must be > 0".into(),
            });
        }
        if b.module_power_kw <= 0.0 {
            errors.push(ConfigError {
                field: "battery.module_power_kw".into(),
                message: "must be > 0".into(),
            });
        }
        if b.module_count == 0 {
            errors.push(ConfigError {
                field: "battery.module_count".into(),
                message: "must be > 0".into(),
            });
        }
        if b.cycle_life == 0 {
            errors.push(ConfigError {
                field: "battery.cycle_life".into(),
                message: "must be > 0".into(),
            });
        }
        if b.relative_cost_ct < 0.0 {
            errors.push(ConfigError {
                field: "battery.relative_cost_ct".into(),
                message: "must be >= 0".into(),
            });
        }
        if b.module_price_eur < 0.0 {
            errors.push(ConfigError {
                field: "battery.module_price_eur".into(),
                message: "must be >= 0".into(),
            });
        }

        let syn = &self.synthetic;
        if syn.sunrise_hour >= syn.sunset_hour {
            errors.push(ConfigError {
                field: "synthetic.sunrise_hour".into(),
                message: "must be < synthetic.sunset_hour".into(),
            });
        }
        if syn.sunset_hour > 24 {
            errors.push(ConfigError {
                field: "synthetic.sunset_hour".into(),
                message: "must be <= 24".into(),
            });
        }
        if syn.peak_kw < 0.0 {
            errors.push(ConfigError {
                field: "synthetic.peak_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if syn.price_amp_ct < 0.0 {
            errors.push(ConfigError {
                field: "synthetic.price_amp_ct".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }

    /// Purchase cost of the whole pack (€).
    pub fn capex_eur(&self) -> f64 {
        self.battery.module_price_eur * f64::from(self.battery.module_count)
    }
}
