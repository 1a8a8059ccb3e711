//! # Field Refine Policies
//!
//! Decision layer of a refinement-based demand-driven points-to analysis.
//! After each pass the driver asks its policy whether to run another one, and
//! during a pass it asks, per field access, whether to track that field
//! precisely.
//!
//! Policies compose:
//! - [`DelegatingFieldRefinePolicy`]: `(A, B)` — `should_refine` stops at the
//!   first yes, `next_pass` always asks both
//! - [`FieldRefinePolicyChain`]: the same rules over an ordered list
//!
//! ## References
//! - Sridharan & Bodík "Refinement-Based Context-Sensitive Points-To Analysis for Java" (PLDI 2006)
//!
//! ## Usage
//! ```text
//! use codegraph_refine::{share, DelegatingFieldRefinePolicy, ManualFieldPolicy,
//!                        TunedFieldRefinePolicy};
//!
//! let containers = share(ManualFieldPolicy::new("^java/util/")?);
//! let tuned = share(TunedFieldRefinePolicy::new(1, 4));
//! let policy = share(DelegatingFieldRefinePolicy::new(containers, tuned));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for public API
pub use application::RefinePolicyFactory;
pub use domain::{
    AutomatonState, FieldRef, FlowLabel, FlowLabelKind, PointerKey, PointerKeyId, PointerKeyKind,
};
pub use infrastructure::{
    AlwaysRefineFieldsPolicy, DelegatingFieldRefinePolicy, FieldRefinePolicyChain,
    ManualFieldPolicy, NeverRefineFieldsPolicy, TunedFieldRefinePolicy,
};
pub use ports::{share, FieldRefinePolicy, PolicyHandle};
