use sea_orm::DatabaseConnection;

use crate::infra::db::{DbProfileRepository, DbRoleRepository};
use crate::infra::identity::JwtIdentityVerifier;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn identity_verifier(&self) -> JwtIdentityVerifier {
        JwtIdentityVerifier {
            jwt_secret: self.jwt_secret.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }
}
