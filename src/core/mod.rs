//! Pure, deterministic workflow logic. No filesystem or process access.

pub mod context;
pub mod model;
pub mod prompt;
