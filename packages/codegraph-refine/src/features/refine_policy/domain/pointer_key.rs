//! Pointer keys
//!
//! Abstract memory locations taking part in a flow. Policies only forward and
//! compare them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for pointer keys
pub type PointerKeyId = u32;

/// What a pointer key abstracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKeyKind {
    /// Local variable / SSA value
    Local,
    /// Field of an abstract object
    InstanceField,
    /// Static field
    StaticField,
    /// Elements of an abstract array
    ArrayContents,
    /// Method return value
    ReturnValue,
}

/// Abstract memory location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerKey {
    pub id: PointerKeyId,
    pub kind: PointerKeyKind,
}

impl PointerKey {
    #[inline]
    pub fn new(id: PointerKeyId, kind: PointerKeyKind) -> Self {
        Self { id, kind }
    }

    #[inline]
    pub fn local(id: PointerKeyId) -> Self {
        Self::new(id, PointerKeyKind::Local)
    }

    #[inline]
    pub fn instance_field(id: PointerKeyId) -> Self {
        Self::new(id, PointerKeyKind::InstanceField)
    }
}

impl fmt::Display for PointerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            PointerKeyKind::Local => "local",
            PointerKeyKind::InstanceField => "ifield",
            PointerKeyKind::StaticField => "sfield",
            PointerKeyKind::ArrayContents => "array",
            PointerKeyKind::ReturnValue => "ret",
        };
        write!(f, "{}:{}", tag, self.id)
    }
}
