use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};

use plantdesk_domain::role::Role;

use crate::error::AccessServiceError;
use crate::handlers::bearer_token;
use crate::state::AppState;
use crate::usecase::role::{UpdateUserRoleInput, UpdateUserRoleUseCase};

// ── POST /access/roles ───────────────────────────────────────────────────────

/// Fields are optional so that presence is checked inside the usecase, after
/// the caller's authorization.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub target_user_id: Option<String>,
    pub new_role: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleResponse {
    pub success: bool,
    pub message: String,
    /// Wire string of the prior role, or the sentinel `"none"`.
    pub previous_role: String,
    pub new_role: Role,
}

pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UpdateRoleResponse>, AccessServiceError> {
    // An unreadable body never short-circuits: it surfaces as missing fields,
    // and only after the authorization checks have run.
    let request: UpdateRoleRequest = serde_json::from_slice(&body).unwrap_or_default();

    let usecase = UpdateUserRoleUseCase {
        identity: state.identity_verifier(),
        profiles: state.profile_repo(),
        roles: state.role_repo(),
    };

    let out = usecase
        .execute(UpdateUserRoleInput {
            bearer_token: bearer_token(&headers),
            target_user_id: request.target_user_id,
            new_role: request.new_role,
        })
        .await?;

    Ok(Json(UpdateRoleResponse {
        success: true,
        message: format!("Updated {}'s role to {}", out.target.name, out.new_role),
        previous_role: out
            .previous_role
            .map(|role| role.as_str().to_owned())
            .unwrap_or_else(|| "none".to_owned()),
        new_role: out.new_role,
    }))
}
