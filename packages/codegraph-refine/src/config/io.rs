//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading entry points live on `RefineConfig`.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::refine_config::{PolicySpec, RefineConfig};
use serde::{Deserialize, Serialize};

/// Schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefineConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Overrides the preset's pass bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passes: Option<usize>,

    /// Replaces the preset's pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<PolicySpec>>,
}

impl RefineConfigExportV1 {
    pub(crate) fn from_config(preset: Preset, config: &RefineConfig) -> Self {
        Self {
            version: Some(1),
            preset: preset.as_str().to_string(),
            max_passes: Some(config.max_passes),
            policies: Some(config.policies.clone()),
        }
    }

    /// Resolve preset + overrides into a validated config
    pub fn into_config(self) -> ConfigResult<RefineConfig> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&self.preset)
            .map_err(|_| ConfigError::UnknownPreset(self.preset.clone()))?;

        let mut config = RefineConfig::from_preset(preset);
        if let Some(max_passes) = self.max_passes {
            config.max_passes = max_passes;
        }
        if let Some(policies) = self.policies {
            config.policies = policies;
        }

        config.validate()?;
        Ok(config)
    }
}
