//! Argument guards for the public entry points.
//!
//! The type system already enforces what the remote API cannot: kinds of
//! arguments are fixed at compile time. What remains is rejecting blank
//! identifiers before they are baked into a request URL.

use crate::error::ArgumentError;

/// Reject empty or whitespace-only parameter values.
pub fn non_empty(value: &str, parameter: &str) -> Result<(), ArgumentError> {
    if value.trim().is_empty() {
        return Err(ArgumentError::Empty {
            parameter: parameter.to_string(),
        });
    }
    Ok(())
}
