//! Refine policy factory
//!
//! Turns a validated [`RefineConfig`] into a single [`PolicyHandle`]. Multi-entry
//! pipelines become a [`FieldRefinePolicyChain`] in config order.
//!
//! # Example
//! ```ignore
//! use codegraph_refine::config::Preset;
//! use codegraph_refine::RefinePolicyFactory;
//!
//! let policy = RefinePolicyFactory::from_preset(Preset::Balanced)?;
//! while policy.lock().next_pass()? {
//!     // ... next refinement pass
//! }
//! ```

use crate::config::{PolicySpec, Preset, RefineConfig};
use crate::errors::RefineResult;
use crate::features::refine_policy::infrastructure::{
    AlwaysRefineFieldsPolicy, FieldRefinePolicyChain, ManualFieldPolicy, NeverRefineFieldsPolicy,
    TunedFieldRefinePolicy,
};
use crate::features::refine_policy::ports::{share, PolicyHandle};
use tracing::debug;

/// Builds policy pipelines from configuration
pub struct RefinePolicyFactory;

impl RefinePolicyFactory {
    /// Build the pipeline described by `config`
    pub fn build(config: &RefineConfig) -> RefineResult<PolicyHandle> {
        config.validate()?;

        let mut handles = config
            .policies
            .iter()
            .map(|spec| Self::build_spec(spec, config.max_passes))
            .collect::<RefineResult<Vec<_>>>()?;

        debug!(
            "Assembled refine policy pipeline [{}] (max_passes={})",
            config
                .policies
                .iter()
                .map(PolicySpec::kind_name)
                .collect::<Vec<_>>()
                .join(" → "),
            config.max_passes
        );

        if handles.len() == 1 {
            if let Some(only) = handles.pop() {
                return Ok(only);
            }
        }
        Ok(share(FieldRefinePolicyChain::new(handles)?))
    }

    /// Build the preset pipeline
    pub fn from_preset(preset: Preset) -> RefineResult<PolicyHandle> {
        Self::build(&RefineConfig::from_preset(preset))
    }

    /// Build a single leaf policy
    pub fn build_spec(spec: &PolicySpec, max_passes: usize) -> RefineResult<PolicyHandle> {
        let handle = match spec {
            PolicySpec::Always => share(AlwaysRefineFieldsPolicy),
            PolicySpec::Never => share(NeverRefineFieldsPolicy),
            PolicySpec::Manual {
                class_pattern,
                refine_array_contents,
            } => share(
                ManualFieldPolicy::new(class_pattern)?.with_array_contents(*refine_array_contents),
            ),
            PolicySpec::Tuned { budget_per_pass } => {
                share(TunedFieldRefinePolicy::new(*budget_per_pass, max_passes))
            }
        };
        Ok(handle)
    }
}
