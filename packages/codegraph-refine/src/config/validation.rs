//! Configuration validation
//!
//! Provides the `Validatable` trait shared by every refine config type.

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use codegraph_refine::config::Validatable;
///
/// fn build<C: Validatable>(config: &C) -> Result<(), ConfigError> {
///     config.validate()?;
///     // ... assemble policies
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Name used to locate this config in error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Extension trait for validating collections of configs
pub trait ValidatableCollection {
    /// Validate all configs in collection
    fn validate_all(&self) -> ConfigResult<()>;
}

impl<T: Validatable> ValidatableCollection for Vec<T> {
    /// Stops at the first invalid entry and reports its position
    fn validate_all(&self) -> ConfigResult<()> {
        for (index, config) in self.iter().enumerate() {
            config.validate().map_err(|source| ConfigError::Entry {
                config: config.config_name(),
                index,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}
