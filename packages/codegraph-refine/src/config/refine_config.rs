//! Refine policy pipeline configuration
//!
//! `RefineConfig` lists the policies of a pipeline in evaluation order.
//! The first policy is consulted first by `should_refine`; every policy
//! observes every `next_pass`.

use super::error::{ConfigError, ConfigResult};
use super::io::RefineConfigExportV1;
use super::preset::Preset;
use super::validation::{Validatable, ValidatableCollection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declaring-class pattern for collection classes
pub const CONTAINER_CLASS_PATTERN: &str = r"^java/util/";

/// One entry of a refine policy pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PolicySpec {
    /// Refine every field
    Always,

    /// Never refine
    Never,

    /// Refine fields whose declaring class matches `class_pattern`
    Manual {
        class_pattern: String,
        #[serde(default)]
        refine_array_contents: bool,
    },

    /// Admit `budget_per_pass * pass` declaring classes per pass
    Tuned { budget_per_pass: usize },
}

impl PolicySpec {
    /// Short name used in logs and errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Manual { .. } => "manual",
            Self::Tuned { .. } => "tuned",
        }
    }
}

impl Validatable for PolicySpec {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Self::Always | Self::Never => Ok(()),
            Self::Manual { class_pattern, .. } => {
                if class_pattern.trim().is_empty() {
                    return Err(ConfigError::Validation(
                        "manual.class_pattern must not be empty".to_string(),
                    ));
                }
                regex::Regex::new(class_pattern).map_err(|e| {
                    ConfigError::Validation(format!(
                        "manual.class_pattern '{}' is not a valid regex: {}",
                        class_pattern, e
                    ))
                })?;
                Ok(())
            }
            Self::Tuned { budget_per_pass } => {
                if *budget_per_pass == 0 || *budget_per_pass > 10_000 {
                    return Err(ConfigError::range_with_hint(
                        "tuned.budget_per_pass",
                        budget_per_pass,
                        1,
                        10_000,
                        "A zero budget never refines; use kind: never instead",
                    ));
                }
                Ok(())
            }
        }
    }

    fn config_name(&self) -> &'static str {
        "PolicySpec"
    }
}

/// Refine policy pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineConfig {
    /// Upper bound on refinement passes (tuned policies stop here)
    pub max_passes: usize,

    /// Policies in evaluation order
    pub policies: Vec<PolicySpec>,
}

impl RefineConfig {
    /// Create config from preset
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                max_passes: 1,
                policies: vec![PolicySpec::Never],
            },
            Preset::Balanced => Self {
                max_passes: 4,
                policies: vec![
                    PolicySpec::Manual {
                        class_pattern: CONTAINER_CLASS_PATTERN.to_string(),
                        refine_array_contents: true,
                    },
                    PolicySpec::Tuned { budget_per_pass: 1 },
                ],
            },
            Preset::Thorough => Self {
                max_passes: 16,
                policies: vec![PolicySpec::Tuned { budget_per_pass: 4 }],
            },
        }
    }

    /// Builder: Set max_passes
    pub fn max_passes(mut self, v: usize) -> Self {
        self.max_passes = v;
        self
    }

    /// Builder: Append a policy at the end of the pipeline
    pub fn then(mut self, spec: PolicySpec) -> Self {
        self.policies.push(spec);
        self
    }

    /// Builder: Replace the pipeline
    pub fn policies(mut self, v: Vec<PolicySpec>) -> Self {
        self.policies = v;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_passes == 0 || self.max_passes > 1000 {
            return Err(ConfigError::range_with_hint(
                "max_passes",
                self.max_passes,
                1,
                1000,
                "At least one refinement pass is required",
            ));
        }

        if self.policies.is_empty() {
            return Err(ConfigError::EmptyPipeline);
        }

        self.policies.validate_all()
    }

    /// Parse a v1 YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: RefineConfigExportV1 = serde_yaml::from_str(content)?;
        export.into_config()
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize as a v1 YAML document
    pub fn to_yaml(&self, preset: Preset) -> ConfigResult<String> {
        let export = RefineConfigExportV1::from_config(preset, self);
        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}
