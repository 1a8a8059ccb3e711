//! Common test utilities for codegraph-refine
//!
//! Recording policies that log every call into a shared log and answer with
//! configured outcomes.

#![allow(dead_code)]

use codegraph_refine::{
    share, AutomatonState, FieldRef, FieldRefinePolicy, FlowLabel, PointerKey, PolicyHandle,
    RefineError, RefineResult,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// What a recording policy answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Yes,
    No,
    Fault,
}

impl Outcome {
    pub fn from_bool(b: bool) -> Self {
        if b {
            Outcome::Yes
        } else {
            Outcome::No
        }
    }

    fn answer(self, policy: &str, op: &str) -> RefineResult<bool> {
        match self {
            Outcome::Yes => Ok(true),
            Outcome::No => Ok(false),
            Outcome::Fault => Err(RefineError::delegate(policy, format!("{} faulted", op))),
        }
    }
}

/// Arguments of one should_refine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub field: FieldRef,
    pub base_ptr: PointerKey,
    pub val_ptr: PointerKey,
    pub label: FlowLabel,
    pub state: AutomatonState,
}

impl Query {
    pub fn sample() -> Self {
        Self {
            field: FieldRef::new("java/util/HashMap", "table"),
            base_ptr: PointerKey::local(7),
            val_ptr: PointerKey::instance_field(11),
            label: FlowLabel::put_field().bar(),
            state: AutomatonState::new(3),
        }
    }

    pub fn ask(&self, policy: &mut dyn FieldRefinePolicy) -> RefineResult<bool> {
        policy.should_refine(
            &self.field,
            &self.base_ptr,
            &self.val_ptr,
            &self.label,
            &self.state,
        )
    }
}

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NextPass(&'static str),
    ShouldRefine(&'static str, Query),
}

impl Call {
    pub fn policy(&self) -> &'static str {
        match self {
            Call::NextPass(name) | Call::ShouldRefine(name, _) => name,
        }
    }
}

/// Shared call log
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    /// Names of the policies called, in call order
    pub fn order(&self) -> Vec<&'static str> {
        self.0.lock().iter().map(Call::policy).collect()
    }

    pub fn next_pass_count(&self, name: &str) -> usize {
        self.0
            .lock()
            .iter()
            .filter(|c| matches!(c, Call::NextPass(n) if *n == name))
            .count()
    }

    pub fn should_refine_count(&self, name: &str) -> usize {
        self.0
            .lock()
            .iter()
            .filter(|c| matches!(c, Call::ShouldRefine(n, _) if *n == name))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    fn push(&self, call: Call) {
        self.0.lock().push(call);
    }
}

/// Policy answering configured outcomes and logging every call
pub struct RecordingPolicy {
    name: &'static str,
    next_pass: Outcome,
    should_refine: Outcome,
    log: CallLog,
}

impl RecordingPolicy {
    pub fn new(name: &'static str, next_pass: Outcome, should_refine: Outcome, log: &CallLog) -> Self {
        Self {
            name,
            next_pass,
            should_refine,
            log: log.clone(),
        }
    }
}

impl FieldRefinePolicy for RecordingPolicy {
    fn next_pass(&mut self) -> RefineResult<bool> {
        self.log.push(Call::NextPass(self.name));
        self.next_pass.answer(self.name, "next_pass")
    }

    fn should_refine(
        &mut self,
        field: &FieldRef,
        base_ptr: &PointerKey,
        val_ptr: &PointerKey,
        label: &FlowLabel,
        state: &AutomatonState,
    ) -> RefineResult<bool> {
        self.log.push(Call::ShouldRefine(
            self.name,
            Query {
                field: field.clone(),
                base_ptr: *base_ptr,
                val_ptr: *val_ptr,
                label: *label,
                state: *state,
            },
        ));
        self.should_refine.answer(self.name, "should_refine")
    }
}

/// Shared handle to a recording policy
pub fn recording(
    name: &'static str,
    next_pass: Outcome,
    should_refine: Outcome,
    log: &CallLog,
) -> PolicyHandle {
    share(RecordingPolicy::new(name, next_pass, should_refine, log))
}

/// Recording policy with the same outcome for both operations
pub fn answering(name: &'static str, outcome: Outcome, log: &CallLog) -> PolicyHandle {
    recording(name, outcome, outcome, log)
}
