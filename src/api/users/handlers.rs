use crate::api::models::*;
use crate::storage::UserProfile;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

pub async fn register_user_handler(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RegisterUserRequest>,
) -> Json<UserProfile> {
    let profile = state.users.register(request.full_name, request.email).await;
    Json(profile)
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state.users.get(&user_id).await?;
    info!(user_id = %profile.user_id, "User fetched");
    Ok(Json(profile))
}
