//! Flow labels
//!
//! Classify the edge of the pointer flow graph being traversed. Every label
//! has a "bar" form for traversing the edge backwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of pointer-flow edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowLabelKind {
    /// x = y
    Assign,
    /// x = C.f or C.f = y
    AssignGlobal,
    /// x = y.f
    GetField,
    /// x.f = y
    PutField,
    /// x = new T()
    New,
    /// Actual → formal at a call site
    Param,
    /// Return value → caller
    Return,
    /// Matched field store/load pair
    Match,
}

impl FlowLabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowLabelKind::Assign => "assign",
            FlowLabelKind::AssignGlobal => "assign_global",
            FlowLabelKind::GetField => "getfield",
            FlowLabelKind::PutField => "putfield",
            FlowLabelKind::New => "new",
            FlowLabelKind::Param => "param",
            FlowLabelKind::Return => "return",
            FlowLabelKind::Match => "match",
        }
    }
}

/// Label on a pointer-flow edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowLabel {
    pub kind: FlowLabelKind,

    /// Edge traversed in reverse
    pub bar: bool,
}

impl FlowLabel {
    #[inline]
    pub fn new(kind: FlowLabelKind) -> Self {
        Self { kind, bar: false }
    }

    #[inline]
    pub fn get_field() -> Self {
        Self::new(FlowLabelKind::GetField)
    }

    #[inline]
    pub fn put_field() -> Self {
        Self::new(FlowLabelKind::PutField)
    }

    /// The same label on the reversed edge
    #[inline]
    pub fn bar(self) -> Self {
        Self {
            kind: self.kind,
            bar: !self.bar,
        }
    }
}

impl fmt::Display for FlowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bar {
            write!(f, "{}_bar", self.kind.as_str())
        } else {
            f.write_str(self.kind.as_str())
        }
    }
}
