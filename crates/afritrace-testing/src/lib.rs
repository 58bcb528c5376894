//! Test utilities for AfriTrace services.
//!
//! Provides bearer-token minting, mock database connections (`mock-db` feature) and response
//! body helpers. Import in tests only.

pub mod auth;
#[cfg(feature = "mock-db")]
pub mod db;
pub mod http;
