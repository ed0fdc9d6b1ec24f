//! Utils module - Shared utilities and helpers

/// Cell text truncation for terminal output
pub mod text;

/// Argument guards for the public entry points
pub mod validation;
