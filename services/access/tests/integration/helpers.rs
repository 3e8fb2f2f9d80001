use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use plantdesk_access::domain::repository::{IdentityVerifier, ProfileRepository, RoleRepository};
use plantdesk_access::domain::types::RoleAssignment;
use plantdesk_access::error::AccessServiceError;
use plantdesk_auth_types::Identity;
use plantdesk_domain::{id::UserId, profile::Profile, role::Role};

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests";

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn profile(user_id: &str, name: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        user_id: UserId::from(user_id),
        name: name.to_owned(),
        is_active: true,
    }
}

pub fn assignment(user_id: &str, role: Role) -> RoleAssignment {
    let now = Utc::now();
    RoleAssignment {
        id: Uuid::new_v4(),
        user_id: UserId::from(user_id),
        role,
        created_at: now,
        updated_at: now,
    }
}

// ── MockIdentityVerifier ─────────────────────────────────────────────────────

/// Maps fixed token strings to identities; every other token is invalid.
pub struct MockIdentityVerifier {
    pub identities: Vec<(String, Identity)>,
}

impl MockIdentityVerifier {
    pub fn single(token: &str, user_id: &str) -> Self {
        Self {
            identities: vec![(
                token.to_owned(),
                Identity {
                    user_id: UserId::from(user_id),
                    email: format!("{user_id}@plantdesk.example"),
                },
            )],
        }
    }
}

impl IdentityVerifier for MockIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Option<Identity>, AccessServiceError> {
        Ok(self
            .identities
            .iter()
            .find(|(known, _)| known == token)
            .map(|(_, identity)| identity.clone()))
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub profiles: Vec<Profile>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, AccessServiceError> {
        Ok(self
            .profiles
            .iter()
            .find(|p| &p.user_id == user_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Profile>, AccessServiceError> {
        Ok(self.profiles.clone())
    }
}

// ── MockRoleRepo ─────────────────────────────────────────────────────────────

/// In-memory role store with switchable write failures.
pub struct MockRoleRepo {
    rows: Arc<Mutex<Vec<RoleAssignment>>>,
    fail_writes: bool,
}

impl MockRoleRepo {
    pub fn new(rows: Vec<RoleAssignment>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            fail_writes: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing(rows: Vec<RoleAssignment>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            fail_writes: true,
        }
    }

    /// Shared handle to the stored rows for post-execution inspection.
    pub fn rows_handle(&self) -> Arc<Mutex<Vec<RoleAssignment>>> {
        Arc::clone(&self.rows)
    }
}

impl RoleRepository for MockRoleRepo {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<RoleAssignment>, AccessServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.user_id == user_id)
            .cloned())
    }

    async fn insert(&self, user_id: &UserId, role: Role) -> Result<(), AccessServiceError> {
        if self.fail_writes {
            return Err(AccessServiceError::AssignFailed(anyhow::anyhow!(
                "write refused by test double"
            )));
        }
        let now = Utc::now();
        self.rows.lock().unwrap().push(RoleAssignment {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            role,
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), AccessServiceError> {
        if self.fail_writes {
            return Err(AccessServiceError::UpdateFailed(anyhow::anyhow!(
                "write refused by test double"
            )));
        }
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| &r.user_id == user_id) {
            row.role = role;
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RoleAssignment>, AccessServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}
