use plantdesk_access::error::AccessServiceError;
use plantdesk_access::usecase::roster::ListUserRolesUseCase;
use plantdesk_domain::{id::UserId, role::Role};

use crate::helpers::{MockIdentityVerifier, MockProfileRepo, MockRoleRepo, assignment, profile};

const ADMIN_TOKEN: &str = "admin-token";
const ADMIN_ID: &str = "admin-1";

#[tokio::test]
async fn should_join_profiles_with_their_assignments() {
    let usecase = ListUserRolesUseCase {
        identity: MockIdentityVerifier::single(ADMIN_TOKEN, ADMIN_ID),
        profiles: MockProfileRepo::new(vec![
            profile(ADMIN_ID, "Root"),
            profile("u1", "Ada"),
            profile("u2", "Grace"),
        ]),
        roles: MockRoleRepo::new(vec![
            assignment(ADMIN_ID, Role::Admin),
            assignment("u1", Role::ProductionManager),
        ]),
    };

    let entries = usecase.execute(Some(ADMIN_TOKEN)).await.unwrap();

    assert_eq!(entries.len(), 3);
    let by_user = |id: &str| {
        entries
            .iter()
            .find(|e| e.profile.user_id == UserId::from(id))
            .unwrap()
    };
    assert_eq!(by_user(ADMIN_ID).role, Some(Role::Admin));
    assert_eq!(by_user("u1").role, Some(Role::ProductionManager));
    // Unassigned users appear with no role, not as an error.
    assert_eq!(by_user("u2").role, None);
}

#[tokio::test]
async fn should_require_a_bearer_token() {
    let usecase = ListUserRolesUseCase {
        identity: MockIdentityVerifier::single(ADMIN_TOKEN, ADMIN_ID),
        profiles: MockProfileRepo::new(vec![]),
        roles: MockRoleRepo::new(vec![assignment(ADMIN_ID, Role::Admin)]),
    };

    let result = usecase.execute(None).await;
    assert!(matches!(result, Err(AccessServiceError::NoAuthHeader)));
}

#[tokio::test]
async fn should_require_the_admin_role() {
    let usecase = ListUserRolesUseCase {
        identity: MockIdentityVerifier::single("pm-token", "pm-1"),
        profiles: MockProfileRepo::new(vec![profile("pm-1", "Pat")]),
        roles: MockRoleRepo::new(vec![assignment("pm-1", Role::PlantManager)]),
    };

    let result = usecase.execute(Some("pm-token")).await;
    assert!(matches!(result, Err(AccessServiceError::AdminRequired)));
}
