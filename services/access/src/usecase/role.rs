use tracing::{info, warn};

use plantdesk_auth_types::Identity;
use plantdesk_domain::{id::UserId, profile::Profile, role::Role};

use crate::domain::repository::{IdentityVerifier, ProfileRepository, RoleRepository};
use crate::error::AccessServiceError;

/// Checks shared by every privileged operation, in contract order: the
/// bearer credential is present, it resolves to an identity, and the caller
/// holds an admin assignment in the role store (admin status is never taken
/// from token claims).
pub(crate) async fn authorize_admin<I: IdentityVerifier, R: RoleRepository>(
    identity: &I,
    roles: &R,
    bearer_token: Option<&str>,
) -> Result<Identity, AccessServiceError> {
    let Some(token) = bearer_token else {
        warn!("privileged call rejected: no authorization header");
        return Err(AccessServiceError::NoAuthHeader);
    };

    let Some(caller) = identity.verify(token).await? else {
        warn!("privileged call rejected: token did not verify");
        return Err(AccessServiceError::InvalidToken);
    };

    let assignment = roles.find_by_user(&caller.user_id).await?;
    if !assignment.is_some_and(|a| a.role.is_admin()) {
        warn!(caller = %caller.user_id, "privileged call rejected: caller is not an admin");
        return Err(AccessServiceError::AdminRequired);
    }

    Ok(caller)
}

// ── UpdateUserRole ───────────────────────────────────────────────────────────

/// Raw request material for a role change. Field presence is validated here
/// rather than at the extractor so that failure ordering matches the
/// contract: authorization is decided before the body is looked at.
pub struct UpdateUserRoleInput {
    pub bearer_token: Option<String>,
    pub target_user_id: Option<String>,
    pub new_role: Option<String>,
}

#[derive(Debug)]
pub struct UpdateUserRoleOutput {
    pub target: Profile,
    /// Role read before the write; `None` when this was a first assignment.
    pub previous_role: Option<Role>,
    pub new_role: Role,
}

/// The only sanctioned path to change a user's role.
pub struct UpdateUserRoleUseCase<I, P, R> {
    pub identity: I,
    pub profiles: P,
    pub roles: R,
}

impl<I, P, R> UpdateUserRoleUseCase<I, P, R>
where
    I: IdentityVerifier,
    P: ProfileRepository,
    R: RoleRepository,
{
    pub async fn execute(
        &self,
        input: UpdateUserRoleInput,
    ) -> Result<UpdateUserRoleOutput, AccessServiceError> {
        let caller =
            authorize_admin(&self.identity, &self.roles, input.bearer_token.as_deref()).await?;

        let (target_user_id, new_role_value) = match (input.target_user_id, input.new_role) {
            (Some(target), Some(role)) => (target, role),
            _ => {
                warn!(caller = %caller.user_id, "role change rejected: missing fields");
                return Err(AccessServiceError::MissingFields);
            }
        };

        let Some(new_role) = Role::parse(&new_role_value) else {
            warn!(
                caller = %caller.user_id,
                requested = %new_role_value,
                "role change rejected: role outside the enumeration"
            );
            return Err(AccessServiceError::InvalidRole);
        };

        let target_user_id = UserId::from(target_user_id);
        if target_user_id == caller.user_id {
            warn!(caller = %caller.user_id, "role change rejected: self-modification");
            return Err(AccessServiceError::SelfModification);
        }

        let Some(target) = self.profiles.find_by_user(&target_user_id).await? else {
            warn!(
                caller = %caller.user_id,
                target_user = %target_user_id,
                "role change rejected: target has no profile"
            );
            return Err(AccessServiceError::TargetNotFound);
        };

        // `previous_role` is read before the write and is best-effort only:
        // a concurrent change committing between this read and the write
        // below makes it stale (last writer wins at the row level).
        let previous_role = self
            .roles
            .find_by_user(&target_user_id)
            .await?
            .map(|a| a.role);

        match previous_role {
            Some(_) => self.roles.update_role(&target_user_id, new_role).await?,
            None => self.roles.insert(&target_user_id, new_role).await?,
        }

        info!(
            target_user = %target_user_id,
            target_name = %target.name,
            previous_role = previous_role.map(Role::as_str).unwrap_or("none"),
            new_role = new_role.as_str(),
            acting_admin = %caller.user_id,
            "user role changed"
        );

        Ok(UpdateUserRoleOutput {
            target,
            previous_role,
            new_role,
        })
    }
}
