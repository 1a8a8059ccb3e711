//! Ordered chain of field refine policies
//!
//! N-ary form of [`DelegatingFieldRefinePolicy`]: the chain `[p0, p1, .., pn]`
//! behaves exactly like `Delegating(p0, Delegating(p1, .. pn))`.
//! - `next_pass`: every member, in order, no short-circuit
//! - `should_refine`: first member that says yes wins; later members are skipped

use super::delegating::DelegatingFieldRefinePolicy;
use crate::errors::{RefineError, RefineResult};
use crate::features::refine_policy::domain::{AutomatonState, FieldRef, FlowLabel, PointerKey};
use crate::features::refine_policy::ports::{share, FieldRefinePolicy, PolicyHandle};

/// Left-to-right sequence of policies
pub struct FieldRefinePolicyChain {
    policies: Vec<PolicyHandle>,
}

impl FieldRefinePolicyChain {
    /// Create a chain; an empty chain is rejected
    pub fn new(policies: Vec<PolicyHandle>) -> RefineResult<Self> {
        if policies.is_empty() {
            return Err(RefineError::missing_delegate("chain[0]"));
        }
        Ok(Self { policies })
    }

    /// Create a chain from optional members, rejecting any missing one
    pub fn try_from_options(
        policies: impl IntoIterator<Item = Option<PolicyHandle>>,
    ) -> RefineResult<Self> {
        let policies = policies
            .into_iter()
            .enumerate()
            .map(|(idx, p)| p.ok_or_else(|| RefineError::missing_delegate(format!("chain[{}]", idx))))
            .collect::<RefineResult<Vec<_>>>()?;
        Self::new(policies)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn policies(&self) -> &[PolicyHandle] {
        &self.policies
    }

    /// Rebuild as right-nested delegating policies
    ///
    /// A single-member chain yields that member's handle unchanged.
    pub fn into_nested(self) -> RefineResult<PolicyHandle> {
        let mut policies = self.policies;
        let last = policies
            .pop()
            .ok_or_else(|| RefineError::missing_delegate("chain[0]"))?;
        Ok(policies
            .into_iter()
            .rev()
            .fold(last, |nested, policy| {
                share(DelegatingFieldRefinePolicy::new(policy, nested))
            }))
    }
}

impl FieldRefinePolicy for FieldRefinePolicyChain {
    fn next_pass(&mut self) -> RefineResult<bool> {
        // Every member observes the pass, even after one has said yes.
        let mut any_next = false;
        for policy in &self.policies {
            let next = policy.lock().next_pass()?;
            any_next = any_next || next;
        }
        Ok(any_next)
    }

    fn should_refine(
        &mut self,
        field: &FieldRef,
        base_ptr: &PointerKey,
        val_ptr: &PointerKey,
        label: &FlowLabel,
        state: &AutomatonState,
    ) -> RefineResult<bool> {
        for policy in &self.policies {
            let refines = policy
                .lock()
                .should_refine(field, base_ptr, val_ptr, label, state)?;
            if refines {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
