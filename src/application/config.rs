use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::analyzers::SecurityChecks;
use crate::domain::value_objects::{
    PerformanceThresholds, ResourceThresholds, ThresholdError, ThresholdOverride,
};

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub collection: CollectionConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Per-domain analysis settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub thresholds: PerformanceOverrides,
}

/// Optional threshold overrides for the performance domain. Each bound can
/// be overridden independently; unset bounds keep the built-in defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceOverrides {
    #[serde(default)]
    pub cpu: ThresholdOverride,
    #[serde(default)]
    pub memory: ThresholdOverride,
    #[serde(default)]
    pub disk: ThresholdOverride,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub checks: SecurityChecks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub thresholds: ResourceOverrides,
}

/// Optional threshold overrides for the resources domain
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ResourceOverrides {
    #[serde(default)]
    pub disk: ThresholdOverride,
    #[serde(default)]
    pub memory: ThresholdOverride,
    #[serde(default)]
    pub swap: ThresholdOverride,
}

/// Collection settings: where and how far the filesystem walk goes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    #[serde(default = "default_root_directory")]
    pub root_directory: PathBuf,
    /// Walk stops once this many files have been counted.
    #[serde(default = "default_max_files")]
    pub max_files: u64,
    #[serde(default = "default_true")]
    pub scan_file_system: bool,
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_true")]
    pub charts: bool,
}

const fn default_true() -> bool {
    true
}

fn default_root_directory() -> PathBuf {
    PathBuf::from("/")
}

const fn default_max_files() -> u64 {
    1_000_000
}

fn default_format() -> String {
    "html".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thresholds: PerformanceOverrides::default(),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            checks: SecurityChecks::default(),
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thresholds: ResourceOverrides::default(),
        }
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            root_directory: default_root_directory(),
            max_files: default_max_files(),
            scan_file_system: true,
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output_dir: default_output_dir(),
            charts: true,
        }
    }
}

impl AppConfig {
    /// Load config from the default path, creating a default config file if
    /// none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, the
    /// file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// invalid, or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is
    /// invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, serialization
    /// fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("checkup").join("config.toml"))
    }

    /// Merged performance thresholds, validated once at load time so an
    /// inverted pair fails here instead of silently misclassifying later.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError` if any merged pair has warning > critical.
    pub fn performance_thresholds(&self) -> Result<PerformanceThresholds, ThresholdError> {
        let defaults = PerformanceThresholds::default();
        let overrides = &self.analysis.performance.thresholds;
        Ok(PerformanceThresholds {
            cpu: defaults.cpu.merged(&overrides.cpu, "cpu")?,
            memory: defaults.memory.merged(&overrides.memory, "memory")?,
            disk: defaults.disk.merged(&overrides.disk, "disk")?,
        })
    }

    /// Merged resource thresholds, validated like the performance ones.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError` if any merged pair has warning > critical.
    pub fn resource_thresholds(&self) -> Result<ResourceThresholds, ThresholdError> {
        let defaults = ResourceThresholds::default();
        let overrides = &self.analysis.resources.thresholds;
        Ok(ResourceThresholds {
            disk: defaults.disk.merged(&overrides.disk, "disk")?,
            memory: defaults.memory.merged(&overrides.memory, "memory")?,
            swap: defaults.swap.merged(&overrides.swap, "swap")?,
        })
    }
}
