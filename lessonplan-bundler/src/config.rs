//! Bundler configuration.
//!
//! Every field has a default, so a `bundler.yaml` only needs to list what it
//! changes:
//!
//! ```yaml
//! mode: production
//! dev_server:
//!   port: 9000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BundlerError;

/// Webpack build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

/// Where the bundle is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, relative to the config file.
    pub path: String,
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: "static/dist".to_string(),
            filename: "bundle.js".to_string(),
        }
    }
}

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Directory served as static content.
    pub static_dir: String,
    pub port: u16,
    /// Hot module reload.
    pub hot: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        DevServerConfig {
            static_dir: "static".to_string(),
            port: 8080,
            hot: true,
        }
    }
}

/// Routes files matching `test` through `loaders`.
///
/// Loaders are listed in webpack order: the last entry runs first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderRule {
    /// JavaScript regular expression source, without slashes.
    pub test: String,
    pub loaders: Vec<String>,
}

impl LoaderRule {
    /// `.css` files: parsed by `css-loader`, applied by `style-loader`.
    pub fn stylesheets() -> Self {
        LoaderRule {
            test: r"\.css$".to_string(),
            loaders: vec!["style-loader".to_string(), "css-loader".to_string()],
        }
    }
}

/// Complete bundler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    pub mode: Mode,
    /// Entry module, relative to the config file.
    pub entry: String,
    pub output: OutputConfig,
    pub dev_server: DevServerConfig,
    pub rules: Vec<LoaderRule>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        BundlerConfig {
            mode: Mode::default(),
            entry: "./static/js/index.js".to_string(),
            output: OutputConfig::default(),
            dev_server: DevServerConfig::default(),
            rules: vec![LoaderRule::stylesheets()],
        }
    }
}

impl BundlerConfig {
    /// Parse a YAML config; missing fields take their defaults.
    pub fn from_yaml_str(contents: &str, origin: &Path) -> Result<Self, BundlerError> {
        serde_yaml::from_str(contents).map_err(|source| BundlerError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load and validate the YAML config at `path`.
    pub fn load(path: &Path) -> Result<Self, BundlerError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BundlerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot produce a bundle.
    pub fn validate(&self) -> Result<(), BundlerError> {
        if self.entry.trim().is_empty() {
            return Err(BundlerError::Invalid("entry must not be empty".into()));
        }
        if self.output.filename.trim().is_empty() {
            return Err(BundlerError::Invalid("output.filename must not be empty".into()));
        }
        if self.dev_server.port == 0 {
            return Err(BundlerError::Invalid("dev_server.port must be non-zero".into()));
        }
        for rule in &self.rules {
            if rule.test.is_empty() {
                return Err(BundlerError::Invalid("rule test must not be empty".into()));
            }
            if rule.loaders.is_empty() {
                return Err(BundlerError::Invalid(format!(
                    "rule '{}' has no loaders",
                    rule.test
                )));
            }
        }
        Ok(())
    }
}
