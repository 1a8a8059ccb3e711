//! Ports (Interfaces) for field refine policies
//!
//! Every policy, leaf or composite, implements [`FieldRefinePolicy`]. The
//! refinement driver only ever holds a [`PolicyHandle`], so it cannot tell a
//! leaf from a composed pipeline.

use crate::errors::RefineResult;
use crate::features::refine_policy::domain::{AutomatonState, FieldRef, FlowLabel, PointerKey};
use parking_lot::Mutex;
use std::sync::Arc;

/// Refinement decisions for a demand-driven points-to analysis
///
/// Both operations may mutate the policy (pass counters, budgets), so callers
/// must not assume they are pure predicates. An `Err` is a fault of the
/// policy and is surfaced to the driver as-is.
///
/// # Example
/// ```ignore
/// fn drive(policy: &PolicyHandle) -> RefineResult<()> {
///     loop {
///         // ... run one pass, consulting should_refine per field access
///         if !policy.lock().next_pass()? {
///             break;
///         }
///     }
///     Ok(())
/// }
/// ```
pub trait FieldRefinePolicy: Send {
    /// Called once per finished pass: should the analysis run another one?
    fn next_pass(&mut self) -> RefineResult<bool>;

    /// Should the access of `field` on the `base_ptr` → `val_ptr` flow be
    /// handled field-sensitively?
    ///
    /// `state` is read-only. The driver owns the automaton and advances it;
    /// a policy that needs to remember states copies them (`AutomatonState`
    /// is `Copy`). Composites forward the caller's `state` unchanged.
    fn should_refine(
        &mut self,
        field: &FieldRef,
        base_ptr: &PointerKey,
        val_ptr: &PointerKey,
        label: &FlowLabel,
        state: &AutomatonState,
    ) -> RefineResult<bool>;
}

/// Shared handle to a policy
///
/// Cloning the handle never clones the policy. The mutex serializes calls when
/// one policy is reachable from several pipelines.
pub type PolicyHandle = Arc<Mutex<dyn FieldRefinePolicy>>;

/// Wrap a policy in a shared handle
pub fn share<P>(policy: P) -> PolicyHandle
where
    P: FieldRefinePolicy + 'static,
{
    Arc::new(Mutex::new(policy))
}
