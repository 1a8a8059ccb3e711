/*
 * Codegraph Refine - Field Refine Policies for Demand-Driven PTA
 *
 * Feature-First Hexagonal Architecture:
 * - config/    : Presets, YAML v1 schema, validation
 * - features/  : refine_policy (domain → ports → infrastructure → application)
 * - errors.rs  : Crate-wide error type
 *
 * A refinement driver asks one `FieldRefinePolicy` two questions:
 * - next_pass()      : run another global refinement pass?
 * - should_refine()  : treat this field access field-sensitively?
 *
 * Policies compose through `DelegatingFieldRefinePolicy` and
 * `FieldRefinePolicyChain`, so the driver never sees leaf vs. composite.
 */

#![allow(clippy::too_many_arguments)] // should_refine carries the full query tuple
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration system (presets, YAML, validation)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

pub use errors::{RefineError, RefineResult};
pub use features::refine_policy::{
    share, AlwaysRefineFieldsPolicy, AutomatonState, DelegatingFieldRefinePolicy,
    FieldRefinePolicy, FieldRefinePolicyChain, FieldRef, FlowLabel, FlowLabelKind,
    ManualFieldPolicy, NeverRefineFieldsPolicy, PointerKey, PointerKeyKind, PolicyHandle,
    RefinePolicyFactory, TunedFieldRefinePolicy,
};
