use afritrace_core::config::{optional, parsed_or, required};

/// Registry service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RegistryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3113). Env var: `REGISTRY_PORT`.
    pub registry_port: u16,
    /// HS256 secret of the hosted auth provider. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// REMA company registry endpoint. Unset selects the built-in list.
    pub rema_api_url: Option<String>,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: required("DATABASE_URL"),
            registry_port: parsed_or("REGISTRY_PORT", 3113),
            jwt_secret: required("JWT_SECRET"),
            rema_api_url: optional("REMA_API_URL"),
        }
    }
}
