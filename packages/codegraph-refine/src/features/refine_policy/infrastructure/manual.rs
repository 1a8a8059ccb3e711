//! Manual field policy
//!
//! Refines fields whose declaring class matches a user-supplied regex, e.g.
//! `^java/util/` to track collection internals precisely.

use crate::errors::{RefineError, RefineResult};
use crate::features::refine_policy::domain::{AutomatonState, FieldRef, FlowLabel, PointerKey};
use crate::features::refine_policy::ports::FieldRefinePolicy;
use regex::Regex;

/// Refines fields of classes matching a pattern
#[derive(Debug, Clone)]
pub struct ManualFieldPolicy {
    class_pattern: Regex,
    refine_array_contents: bool,
}

impl ManualFieldPolicy {
    pub fn new(class_pattern: &str) -> RefineResult<Self> {
        let class_pattern = Regex::new(class_pattern).map_err(|source| RefineError::InvalidPattern {
            pattern: class_pattern.to_string(),
            source,
        })?;
        Ok(Self {
            class_pattern,
            refine_array_contents: false,
        })
    }

    /// Also refine the array-contents pseudo-field
    pub fn with_array_contents(mut self, refine: bool) -> Self {
        self.refine_array_contents = refine;
        self
    }

    pub fn class_pattern(&self) -> &str {
        self.class_pattern.as_str()
    }
}

impl FieldRefinePolicy for ManualFieldPolicy {
    fn next_pass(&mut self) -> RefineResult<bool> {
        Ok(false)
    }

    fn should_refine(
        &mut self,
        field: &FieldRef,
        _base_ptr: &PointerKey,
        _val_ptr: &PointerKey,
        _label: &FlowLabel,
        _state: &AutomatonState,
    ) -> RefineResult<bool> {
        if field.is_array_contents() {
            return Ok(self.refine_array_contents);
        }
        Ok(self.class_pattern.is_match(&field.declaring_class))
    }
}
