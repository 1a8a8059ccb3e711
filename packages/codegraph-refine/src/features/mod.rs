//! Feature modules (vertical slices)

pub mod refine_policy;
