//! User profile record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::UserId;

/// Profile owned by the profile-management flows; consumed read-only here.
///
/// A profile with `is_active = false` must never pass authentication gating,
/// regardless of any role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub is_active: bool,
}
