//! Auth types shared across AfriTrace services.
//!
//! Provides bearer-token extraction and validation of access tokens issued
//! by the hosted auth provider.

pub mod bearer;
pub mod token;
