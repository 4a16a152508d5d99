use crate::api::models::AppState;
use crate::api::users::handlers::{get_user_handler, register_user_handler};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(register_user_handler))
        .route("/users/{user_id}", get(get_user_handler))
}
