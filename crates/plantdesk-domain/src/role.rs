//! Role enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Privilege level assigned to a user.
///
/// Wire format: camelCase string (`"admin"`, `"plantManager"`, …). The set
/// is closed; anything else is rejected at the boundary and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    PlantManager,
    ProductionManager,
    Accountant,
}

impl Role {
    /// All assignable roles, in wire order.
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::PlantManager,
        Role::ProductionManager,
        Role::Accountant,
    ];

    /// Parse a wire string. Returns `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "plantManager" => Some(Self::PlantManager),
            "productionManager" => Some(Self::ProductionManager),
            "accountant" => Some(Self::Accountant),
            _ => None,
        }
    }

    /// Wire string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::PlantManager => "plantManager",
            Self::ProductionManager => "productionManager",
            Self::Accountant => "accountant",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Comma-separated list of valid wire values, for error messages.
    pub fn valid_values() -> String {
        Self::ALL.map(Role::as_str).join(", ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
