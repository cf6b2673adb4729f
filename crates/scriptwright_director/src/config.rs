//! Configuration for the orchestrator and CLI.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (include_str! from scriptwright.toml)
//! 2. `~/.config/scriptwright/scriptwright.toml`
//! 3. `./scriptwright.toml`
//! 4. An explicit file, when given
//! 5. `SCRIPTWRIGHT_*` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use scriptwright_error::{ConfigError, ScriptwrightResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../scriptwright.toml");

/// Runtime settings.
///
/// # Example
///
/// ```no_run
/// use scriptwright_director::ScriptwrightConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScriptwrightConfig::load()?;
/// println!("Generating with {}", config.generation_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScriptwrightConfig {
    /// Model for script generation
    pub generation_model: String,
    /// Model for keyword suggestion
    pub keyword_model: String,
    /// Sampling temperature for script generation
    pub temperature: f32,
    /// Turn blocking audit findings into contract violations
    #[serde(default)]
    pub strict_scene_audit: bool,
    /// Saved-script library file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_path: Option<PathBuf>,
}

impl Default for ScriptwrightConfig {
    fn default() -> Self {
        Self {
            generation_model: "gemini-2.5-pro".to_string(),
            keyword_model: "gemini-2.5-flash".to_string(),
            temperature: 0.8,
            strict_scene_audit: false,
            library_path: None,
        }
    }
}

impl ScriptwrightConfig {
    /// Load configuration from every default source.
    #[instrument]
    pub fn load() -> ScriptwrightResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration, adding `path` above the default files.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `path` does not exist or any source does not
    /// parse.
    #[instrument]
    pub fn load_with(path: Option<&Path>) -> ScriptwrightResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptwright/scriptwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scriptwright").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCRIPTWRIGHT")
                .prefix_separator("_")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Parse configuration from TOML text layered over the bundled defaults.
    pub fn from_toml_str(text: &str) -> ScriptwrightResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ScriptwrightResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::invalid(
                "temperature",
                format!("must be between 0.0 and 2.0, got {}", self.temperature),
            ));
        }
        if self.generation_model.trim().is_empty() || self.keyword_model.trim().is_empty() {
            return Err(ConfigError::invalid("model names", "must not be empty"));
        }
        Ok(())
    }

    /// Library file location: the configured path, or `<data dir>/scriptwright/library.json`.
    pub fn resolved_library_path(&self) -> PathBuf {
        if let Some(path) = &self.library_path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("scriptwright").join("library.json"))
            .unwrap_or_else(|| PathBuf::from("scriptwright-library.json"))
    }
}
