//! Email verification handler.

use axum::extract::State;
use axum::{Extension, Json};

use jobboard_entity::User;

use crate::dto::response::{ApiResponse, VerifiedUserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /users/{id}/verify (signed)
pub async fn verify_user(
    State(state): State<AppState>,
    Extension(mut user): Extension<User>,
) -> Result<Json<ApiResponse<VerifiedUserResponse>>, ApiError> {
    if !user.verified {
        state.users.set_user_verified(user.id, true).await?;
        user.verified = true;
        tracing::info!(user_id = %user.id, "Email verified");
    }
    Ok(Json(ApiResponse::ok(VerifiedUserResponse { user })))
}
