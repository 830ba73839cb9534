//! # lessonplan-bundler
//!
//! Typed configuration for the site's client-side asset bundle, emitted as a
//! `webpack.config.js`.
//!
//! - [`config`] — [`BundlerConfig`] with defaults, YAML loading, validation
//! - [`webpack`] — [`render_webpack_config`]

pub mod config;
pub mod error;
pub mod webpack;

pub use config::{BundlerConfig, DevServerConfig, LoaderRule, Mode, OutputConfig};
pub use error::BundlerError;
pub use webpack::render_webpack_config;
