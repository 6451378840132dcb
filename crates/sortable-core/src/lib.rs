//! Sortable Core
//!
//! Shared building blocks for the Sortable crates: math types, hash
//! collections, logging and profiling setup.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, ProfilingMode};
