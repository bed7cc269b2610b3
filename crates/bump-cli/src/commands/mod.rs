//! Command implementations for bump-cli

pub mod bump;

pub use bump::{BumpOptions, run_bump};
