use axum::{Json, extract::State, http::HeaderMap};
use serde::Serialize;

use plantdesk_domain::{id::UserId, role::Role};

use crate::error::AccessServiceError;
use crate::handlers::bearer_token;
use crate::state::AppState;
use crate::usecase::roster::ListUserRolesUseCase;

// ── GET /access/users ────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleResponse {
    pub user_id: UserId,
    pub name: String,
    pub is_active: bool,
    /// `null` for users with no assignment yet.
    pub role: Option<Role>,
}

pub async fn list_user_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserRoleResponse>>, AccessServiceError> {
    let usecase = ListUserRolesUseCase {
        identity: state.identity_verifier(),
        profiles: state.profile_repo(),
        roles: state.role_repo(),
    };

    let entries = usecase.execute(bearer_token(&headers).as_deref()).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(|entry| UserRoleResponse {
                user_id: entry.profile.user_id,
                name: entry.profile.name,
                is_active: entry.profile.is_active,
                role: entry.role,
            })
            .collect(),
    ))
}
