use std::collections::HashMap;

use plantdesk_domain::{id::UserId, profile::Profile, role::Role};

use crate::domain::repository::{IdentityVerifier, ProfileRepository, RoleRepository};
use crate::error::AccessServiceError;
use crate::usecase::role::authorize_admin;

// ── ListUserRoles ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct UserRoleEntry {
    pub profile: Profile,
    /// `None` for users with no assignment yet.
    pub role: Option<Role>,
}

/// Read side of the role-management screen: every profile joined with its
/// current assignment. Same admin gate as the update operation.
pub struct ListUserRolesUseCase<I, P, R> {
    pub identity: I,
    pub profiles: P,
    pub roles: R,
}

impl<I, P, R> ListUserRolesUseCase<I, P, R>
where
    I: IdentityVerifier,
    P: ProfileRepository,
    R: RoleRepository,
{
    pub async fn execute(
        &self,
        bearer_token: Option<&str>,
    ) -> Result<Vec<UserRoleEntry>, AccessServiceError> {
        authorize_admin(&self.identity, &self.roles, bearer_token).await?;

        let profiles = self.profiles.list().await?;
        let assignments = self.roles.list().await?;
        let role_by_user: HashMap<&UserId, Role> = assignments
            .iter()
            .map(|a| (&a.user_id, a.role))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let role = role_by_user.get(&profile.user_id).copied();
                UserRoleEntry { profile, role }
            })
            .collect())
    }
}
