//! Command implementations for the quotes CLI

pub mod serve;

pub use serve::run_serve;
