#![allow(async_fn_in_trait)]

use plantdesk_auth_types::Identity;
use plantdesk_domain::{id::UserId, profile::Profile, role::Role};

use crate::domain::types::RoleAssignment;
use crate::error::AccessServiceError;

/// Port for the external identity provider.
pub trait IdentityVerifier: Send + Sync {
    /// Resolve a bearer token to a caller identity. `None` means the token
    /// is invalid or expired; `Err` is reserved for provider outages.
    async fn verify(&self, token: &str) -> Result<Option<Identity>, AccessServiceError>;
}

/// Read-only port over the profile store.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, AccessServiceError>;

    /// All profiles, ordered by display name.
    async fn list(&self) -> Result<Vec<Profile>, AccessServiceError>;
}

/// Port over the role store. At most one assignment exists per user.
pub trait RoleRepository: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<RoleAssignment>, AccessServiceError>;

    /// Insert a first-time assignment. Fails with `AssignFailed` on any write
    /// error, including a uniqueness-constraint violation.
    async fn insert(&self, user_id: &UserId, role: Role) -> Result<(), AccessServiceError>;

    /// Update the existing assignment in place, preserving row identity and
    /// `created_at`. Fails with `UpdateFailed` on any write error.
    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), AccessServiceError>;

    async fn list(&self) -> Result<Vec<RoleAssignment>, AccessServiceError>;
}
