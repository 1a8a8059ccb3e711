//! Domain models for field refine policies
//!
//! Values a policy receives with each query:
//! - FieldRef: field being accessed
//! - PointerKey: base and value locations of the access
//! - FlowLabel: kind of flow edge traversed
//! - AutomatonState: current refinement automaton state

pub mod automaton_state;
pub mod field;
pub mod flow_label;
pub mod pointer_key;

pub use automaton_state::AutomatonState;
pub use field::FieldRef;
pub use flow_label::{FlowLabel, FlowLabelKind};
pub use pointer_key::{PointerKey, PointerKeyId, PointerKeyKind};
