//! Delegating field refine policy
//!
//! Composes two policies: `should_refine` asks the first and only falls back
//! to the second when the first declines, while `next_pass` always asks both.
//! The two rules are deliberately asymmetric.

use crate::errors::{RefineError, RefineResult};
use crate::features::refine_policy::domain::{AutomatonState, FieldRef, FlowLabel, PointerKey};
use crate::features::refine_policy::ports::{FieldRefinePolicy, PolicyHandle};

/// Policy that first checks `first`, then delegates to `second`
pub struct DelegatingFieldRefinePolicy {
    first: PolicyHandle,
    second: PolicyHandle,
}

impl DelegatingFieldRefinePolicy {
    pub fn new(first: PolicyHandle, second: PolicyHandle) -> Self {
        Self { first, second }
    }

    /// Construct from optional delegates, rejecting a missing one up front
    pub fn try_new(first: Option<PolicyHandle>, second: Option<PolicyHandle>) -> RefineResult<Self> {
        let first = first.ok_or_else(|| RefineError::missing_delegate("first"))?;
        let second = second.ok_or_else(|| RefineError::missing_delegate("second"))?;
        Ok(Self::new(first, second))
    }

    pub fn first(&self) -> &PolicyHandle {
        &self.first
    }

    pub fn second(&self) -> &PolicyHandle {
        &self.second
    }
}

impl FieldRefinePolicy for DelegatingFieldRefinePolicy {
    fn next_pass(&mut self) -> RefineResult<bool> {
        // Never short-circuit: next_pass() advances per-policy pass state,
        // so both delegates must see every pass.
        let first_next = self.first.lock().next_pass()?;
        let second_next = self.second.lock().next_pass()?;
        Ok(first_next || second_next)
    }

    /// Returns `first.should_refine(..) || second.should_refine(..)`.
    ///
    /// When `first` says yes, `second` is *not* consulted.
    fn should_refine(
        &mut self,
        field: &FieldRef,
        base_ptr: &PointerKey,
        val_ptr: &PointerKey,
        label: &FlowLabel,
        state: &AutomatonState,
    ) -> RefineResult<bool> {
        // Explicit branch rather than `||` so the skip is visible.
        let first_refines = self
            .first
            .lock()
            .should_refine(field, base_ptr, val_ptr, label, state)?;
        if first_refines {
            return Ok(true);
        }
        self.second
            .lock()
            .should_refine(field, base_ptr, val_ptr, label, state)
    }
}
