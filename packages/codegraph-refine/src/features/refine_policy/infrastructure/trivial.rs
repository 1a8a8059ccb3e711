//! Constant policies
//!
//! Useful as the tail of a pipeline and as the two extremes of precision:
//! fully field-sensitive vs. fully field-insensitive.

use crate::errors::RefineResult;
use crate::features::refine_policy::domain::{AutomatonState, FieldRef, FlowLabel, PointerKey};
use crate::features::refine_policy::ports::FieldRefinePolicy;

/// Refines every field access; never asks for another pass
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRefineFieldsPolicy;

impl FieldRefinePolicy for AlwaysRefineFieldsPolicy {
    fn next_pass(&mut self) -> RefineResult<bool> {
        Ok(false)
    }

    fn should_refine(
        &mut self,
        _field: &FieldRef,
        _base_ptr: &PointerKey,
        _val_ptr: &PointerKey,
        _label: &FlowLabel,
        _state: &AutomatonState,
    ) -> RefineResult<bool> {
        Ok(true)
    }
}

/// Refines nothing; never asks for another pass
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRefineFieldsPolicy;

impl FieldRefinePolicy for NeverRefineFieldsPolicy {
    fn next_pass(&mut self) -> RefineResult<bool> {
        Ok(false)
    }

    fn should_refine(
        &mut self,
        _field: &FieldRef,
        _base_ptr: &PointerKey,
        _val_ptr: &PointerKey,
        _label: &FlowLabel,
        _state: &AutomatonState,
    ) -> RefineResult<bool> {
        Ok(false)
    }
}
