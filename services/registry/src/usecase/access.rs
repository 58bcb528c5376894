use uuid::Uuid;

use afritrace_auth_types::bearer::BearerToken;
use afritrace_auth_types::token::{TokenInfo, validate_access_token};
use afritrace_domain::role::UserRole;

use crate::domain::repository::RoleRepository;
use crate::error::RegistryServiceError;

/// Validate a bearer token against the auth provider's secret.
pub fn authenticate(
    token: &BearerToken,
    jwt_secret: &str,
) -> Result<TokenInfo, RegistryServiceError> {
    validate_access_token(token.as_str(), jwt_secret).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        RegistryServiceError::Unauthorized
    })
}

/// Gate for `/admin/*` routes. Roles come from `user_roles`, never from the token.
pub struct RequireAdminUseCase<'a, R: RoleRepository> {
    pub roles: R,
    pub jwt_secret: &'a str,
}

impl<R: RoleRepository> RequireAdminUseCase<'_, R> {
    /// Returns the administrator's user id.
    pub async fn execute(&self, token: &BearerToken) -> Result<Uuid, RegistryServiceError> {
        let info = authenticate(token, self.jwt_secret)?;
        if !self
            .roles
            .has_role(info.user_id, UserRole::Administrator)
            .await?
        {
            return Err(RegistryServiceError::Forbidden);
        }
        Ok(info.user_id)
    }
}
