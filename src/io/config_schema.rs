use anyhow::{anyhow, bail, Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
/// The [FillSettings] control the values written into a new grid.
pub struct FillSettings {
    #[serde(default)]
    /// Smallest value, inclusive.
    pub min: i32,
    #[serde(default = "default_fill_max")]
    /// Largest value, exclusive.
    pub max: i32,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    /// If set, the same grid is produced on every run.
    pub seed: Option<u64>,
}

impl Default for FillSettings {
    /// Values in `[0, 100)` from an unseeded generator.
    fn default() -> Self {
        Self {
            min: 0,
            max: default_fill_max(),
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
/// The [PrintSettings] control how grids are written to the terminal.
pub struct PrintSettings {
    #[serde(default = "default_cell_width")]
    /// Minimum width of each printed cell.
    pub cell_width: usize,
    #[serde(default = "default_bool_true")]
    /// If `show_spiral` is `false` the sorted spiral sequence is not printed.
    pub show_spiral: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            show_spiral: true,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone, Copy)]
/// The contents of a `snail_grid.toml` file.
pub struct SnailConfig {
    #[serde(skip_serializing_if = "skip_default")]
    #[serde(default)]
    pub fill: FillSettings,
    #[serde(skip_serializing_if = "skip_default")]
    #[serde(default)]
    pub print: PrintSettings,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version")]
/// A versioned [SnailConfig].
enum VersionedConfig {
    #[serde(rename = "0")]
    /// Initial release.
    V0(SnailConfig),
    #[serde(other)]
    /// An unknown version.
    Unsupported,
}

impl SnailConfig {
    /// Parses the TOML `text` of a config file.
    pub fn parse(text: &str) -> Result<Self> {
        let versioned: VersionedConfig =
            toml::from_str(text).with_context(|| anyhow!("Unable to parse config"))?;

        let config = match versioned {
            VersionedConfig::V0(config) => config,
            VersionedConfig::Unsupported => bail!("Unsupported config version"),
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, or the default config if no file exists there.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(
                "No config found at {}, using defaults",
                path.to_string_lossy()
            );
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).with_context(|| {
            anyhow!(
                "Unable to read config file {}",
                path.to_string_lossy()
            )
        })?;

        let config = Self::parse(&text)
            .with_context(|| anyhow!("Invalid config file {}", path.to_string_lossy()))?;
        trace!("Loaded config {:?}", config);

        Ok(config)
    }

    /// Serializes this config, including its version tag.
    pub fn to_toml(self) -> Result<String> {
        toml::to_string(&VersionedConfig::V0(self))
            .with_context(|| anyhow!("Unable to serialize config"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fill.min >= self.fill.max {
            bail!(
                "fill.min ({}) must be less than fill.max ({})",
                self.fill.min,
                self.fill.max
            );
        }
        Ok(())
    }
}

fn default_fill_max() -> i32 {
    100
}

fn default_cell_width() -> usize {
    5
}

/// Helper function providing a default `true` value.
fn default_bool_true() -> bool {
    true
}

/// A function that returns `true` if the `field` is equal to its default.
fn skip_default<T: Default + PartialEq>(field: &T) -> bool {
    field == &T::default()
}
