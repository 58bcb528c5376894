use afritrace_core::config::{parsed, parsed_or, required};

/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3112). Env var: `AUTH_PORT`.
    pub auth_port: u16,
    /// Failed attempts after which a code stops being accepted.
    /// Unset means unlimited. Env var: `OTP_MAX_ATTEMPTS`.
    pub otp_max_attempts: Option<u32>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: required("DATABASE_URL"),
            auth_port: parsed_or("AUTH_PORT", 3112),
            otp_max_attempts: parsed("OTP_MAX_ATTEMPTS"),
        }
    }
}
