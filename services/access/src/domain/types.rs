use chrono::{DateTime, Utc};
use uuid::Uuid;

use plantdesk_domain::{id::UserId, role::Role};

/// Persisted mapping of a user to their single assigned role.
///
/// Row identity and `created_at` survive role changes; only `role` and
/// `updated_at` move on an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub id: Uuid,
    pub user_id: UserId,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
