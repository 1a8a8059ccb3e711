//! Refine Policy Configuration
//!
//! Two-tier configuration for refine-policy pipelines:
//! - Level 1: Preset - one-liner (`RefineConfig::from_preset(Preset::Balanced)`)
//! - Level 2: YAML v1 file - preset plus pipeline/pass overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_refine::config::{PolicySpec, Preset, RefineConfig};
//!
//! let config = RefineConfig::from_preset(Preset::Fast)
//!     .policies(vec![PolicySpec::Tuned { budget_per_pass: 2 }])
//!     .max_passes(8);
//! config.validate()?;
//!
//! let config = RefineConfig::from_yaml("refine.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod refine_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::RefineConfigExportV1;
pub use preset::Preset;
pub use refine_config::{PolicySpec, RefineConfig, CONTAINER_CLASS_PATTERN};
pub use validation::{Validatable, ValidatableCollection};
