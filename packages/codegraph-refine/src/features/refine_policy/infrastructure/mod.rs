//! Infrastructure: concrete refine policies
//!
//! - Composites: DelegatingFieldRefinePolicy (binary), FieldRefinePolicyChain (n-ary)
//! - Leaves: Always / Never / Manual (regex) / Tuned (pass budget)

pub mod chain;
pub mod delegating;
pub mod manual;
pub mod trivial;
pub mod tuned;

pub use chain::FieldRefinePolicyChain;
pub use delegating::DelegatingFieldRefinePolicy;
pub use manual::ManualFieldPolicy;
pub use trivial::{AlwaysRefineFieldsPolicy, NeverRefineFieldsPolicy};
pub use tuned::TunedFieldRefinePolicy;
