use crate::api::models::AppState;
use crate::api::news::handlers::news_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news/", get(news_handler))
        .route("/news", get(news_handler))
}
