//! Side-effecting operations: configuration, spec files, assistant processes.

pub mod assistant;
pub mod config;
pub mod process;
pub mod project;
