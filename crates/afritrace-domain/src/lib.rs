//! Domain types shared across all AfriTrace services.
//!
//! This crate contains only pure types with no framework dependencies. Enums
//! round-trip through their lowercase `as_str` form, which is also the storage
//! format.

pub mod certification;
pub mod compliance;
pub mod feedback;
pub mod role;

/// Returned when a stored or submitted string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
