//! Field reference
//!
//! Identifies a field by declaring class and name. Array elements are modelled
//! as the distinguished pseudo-field returned by [`FieldRef::array_contents`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaring class of the array-contents pseudo-field
const ARRAY_CONTENTS_CLASS: &str = "<array>";

/// Name of the array-contents pseudo-field
const ARRAY_CONTENTS_NAME: &str = "[]";

/// A field of a class (or the contents of an array)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    /// Declaring class in internal form (e.g., "java/util/HashMap")
    pub declaring_class: String,

    /// Field name
    pub name: String,
}

impl FieldRef {
    /// Create a new field reference
    #[inline]
    pub fn new(declaring_class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
        }
    }

    /// The pseudo-field standing for all elements of an array
    #[inline]
    pub fn array_contents() -> Self {
        Self::new(ARRAY_CONTENTS_CLASS, ARRAY_CONTENTS_NAME)
    }

    #[inline]
    pub fn is_array_contents(&self) -> bool {
        self.declaring_class == ARRAY_CONTENTS_CLASS && self.name == ARRAY_CONTENTS_NAME
    }

    /// Declaring class with any inner-class suffix removed
    ///
    /// `java/util/HashMap$Entry` → `java/util/HashMap`
    pub fn outermost_class(&self) -> &str {
        match self.declaring_class.find('$') {
            Some(idx) => &self.declaring_class[..idx],
            None => &self.declaring_class,
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_class, self.name)
    }
}
