//! Environment variable helpers used by each service's `from_env` constructor.

use std::str::FromStr;

/// Read a required variable.
///
/// # Panics
///
/// Panics with the variable name if it is missing. Only call at startup.
pub fn required(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

/// Read an optional variable. Blank values count as unset.
pub fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Read and parse an optional variable. Unparseable values count as unset.
pub fn parsed<T: FromStr>(name: &str) -> Option<T> {
    optional(name).and_then(|value| value.trim().parse().ok())
}

/// Read and parse a variable, falling back to `default`.
pub fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    parsed(name).unwrap_or(default)
}
