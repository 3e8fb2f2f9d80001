use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Access service failure modes, one variant per early-return branch of the
/// privileged operations.
#[derive(Debug, thiserror::Error)]
pub enum AccessServiceError {
    #[error("No authorization header")]
    NoAuthHeader,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unauthorized: Admin access required")]
    AdminRequired,
    #[error("Missing required fields: targetUserId and newRole")]
    MissingFields,
    #[error("Invalid role. Must be one of: admin, plantManager, productionManager, accountant")]
    InvalidRole,
    #[error("You cannot modify your own role")]
    SelfModification,
    #[error("Target user not found")]
    TargetNotFound,
    #[error("Failed to update role")]
    UpdateFailed(#[source] anyhow::Error),
    #[error("Failed to assign role")]
    AssignFailed(#[source] anyhow::Error),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AccessServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoAuthHeader => "NO_AUTH_HEADER",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidRole => "INVALID_ROLE",
            Self::SelfModification => "SELF_MODIFICATION",
            Self::TargetNotFound => "TARGET_NOT_FOUND",
            Self::UpdateFailed(_) => "UPDATE_FAILED",
            Self::AssignFailed(_) => "ASSIGN_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccessServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoAuthHeader | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::AdminRequired => StatusCode::FORBIDDEN,
            Self::MissingFields | Self::InvalidRole | Self::SelfModification => {
                StatusCode::BAD_REQUEST
            }
            Self::TargetNotFound => StatusCode::NOT_FOUND,
            Self::UpdateFailed(_) | Self::AssignFailed(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // 4xx denials are logged with request context at the decision site;
        // the 5xx variants carry an anyhow chain whose root cause is only
        // visible here.
        match &self {
            Self::UpdateFailed(e) | Self::AssignFailed(e) | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "role store failure");
            }
            _ => {}
        }
        // The admin UI surfaces `error` verbatim; the shape is part of the
        // wire contract.
        let body = serde_json::json!({
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
