//! CLI command implementations.

pub mod bench;
pub mod check;
pub mod common;
pub mod eval;
