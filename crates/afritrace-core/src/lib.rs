//! Cross-cutting plumbing shared by AfriTrace services: env config helpers,
//! health checks, HTTP middleware, serde helpers and tracing setup.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
