//! Tuned field refine policy
//!
//! Grows field sensitivity pass by pass. Each pass admits a bounded number of
//! new declaring classes; fields of admitted classes are refined from then on.
//!
//! # Budget
//! Pass `p` (1-based) allows up to `budget_per_pass * p` admitted classes in
//! total. Inner classes count as their outermost class, so
//! `HashMap$Node.next` and `HashMap.table` share one slot.
//!
//! Array contents are always refined.

use crate::errors::RefineResult;
use crate::features::refine_policy::domain::{AutomatonState, FieldRef, FlowLabel, PointerKey};
use crate::features::refine_policy::ports::FieldRefinePolicy;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Pass-bounded, budgeted class admission
#[derive(Debug, Clone)]
pub struct TunedFieldRefinePolicy {
    budget_per_pass: usize,
    max_passes: usize,
    pass: usize,
    admitted: FxHashSet<String>,
}

impl TunedFieldRefinePolicy {
    pub fn new(budget_per_pass: usize, max_passes: usize) -> Self {
        Self {
            budget_per_pass,
            max_passes,
            pass: 1,
            admitted: FxHashSet::default(),
        }
    }

    /// Current pass (1-based)
    #[inline]
    pub fn pass(&self) -> usize {
        self.pass
    }

    #[inline]
    pub fn admitted_count(&self) -> usize {
        self.admitted.len()
    }

    pub fn is_admitted(&self, class: &str) -> bool {
        self.admitted.contains(class)
    }

    #[inline]
    fn budget(&self) -> usize {
        self.budget_per_pass.saturating_mul(self.pass)
    }
}

impl FieldRefinePolicy for TunedFieldRefinePolicy {
    fn next_pass(&mut self) -> RefineResult<bool> {
        if self.pass >= self.max_passes {
            debug!(
                "Tuned refine policy exhausted after {} passes ({} classes admitted)",
                self.pass,
                self.admitted.len()
            );
            return Ok(false);
        }
        self.pass += 1;
        debug!("Tuned refine policy advanced to pass {} (budget {})", self.pass, self.budget());
        Ok(true)
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
            return Ok(true);
        }

        let class = field.outermost_class();
        if self.admitted.contains(class) {
            return Ok(true);
        }

        if self.admitted.len() < self.budget() {
            trace!("Admitting {} for refinement in pass {}", class, self.pass);
            self.admitted.insert(class.to_string());
            return Ok(true);
        }

        Ok(false)
    }
}
