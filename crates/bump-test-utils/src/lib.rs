//! Shared test utilities for the bump-version workspace.

pub mod project;

pub use project::TestProject;
