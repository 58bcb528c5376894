use uuid::Uuid;

use afritrace_auth_types::bearer::BearerToken;
use afritrace_registry::error::RegistryServiceError;
use afritrace_registry::usecase::access::{RequireAdminUseCase, authenticate};
use afritrace_testing::auth::{MockAuth, TEST_JWT_SECRET};

use crate::helpers::MockRoleRepo;

#[test]
fn should_authenticate_valid_token() {
    let user_id = Uuid::new_v4();
    let token = BearerToken(MockAuth::new(user_id).token());

    let info = authenticate(&token, TEST_JWT_SECRET).unwrap();

    assert_eq!(info.user_id, user_id);
}

#[test]
fn should_reject_token_signed_with_other_secret() {
    let token = BearerToken(MockAuth::new(Uuid::new_v4()).token());

    let result = authenticate(&token, "some-other-secret");

    assert!(matches!(result, Err(RegistryServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_return_admin_id_for_administrator() {
    let admin_id = Uuid::new_v4();
    let usecase = RequireAdminUseCase {
        roles: MockRoleRepo::admins(vec![admin_id]),
        jwt_secret: TEST_JWT_SECRET,
    };

    let id = usecase
        .execute(&BearerToken(MockAuth::new(admin_id).token()))
        .await
        .unwrap();

    assert_eq!(id, admin_id);
}

#[tokio::test]
async fn should_forbid_citizen() {
    let usecase = RequireAdminUseCase {
        roles: MockRoleRepo::admins(vec![Uuid::new_v4()]),
        jwt_secret: TEST_JWT_SECRET,
    };

    let result = usecase
        .execute(&BearerToken(MockAuth::new(Uuid::new_v4()).token()))
        .await;

    assert!(matches!(result, Err(RegistryServiceError::Forbidden)));
}

#[tokio::test]
async fn should_reject_expired_token_before_role_check() {
    let admin_id = Uuid::new_v4();
    let usecase = RequireAdminUseCase {
        roles: MockRoleRepo::admins(vec![admin_id]),
        jwt_secret: TEST_JWT_SECRET,
    };

    let result = usecase
        .execute(&BearerToken(MockAuth::new(admin_id).expired_token()))
        .await;

    assert!(matches!(result, Err(RegistryServiceError::Unauthorized)));
}
