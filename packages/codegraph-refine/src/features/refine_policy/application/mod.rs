//! Application layer: pipeline assembly

pub mod factory;

pub use factory::RefinePolicyFactory;
