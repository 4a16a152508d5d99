use crate::api::models::*;
use axum::{extract::State, Json};

pub async fn news_handler(State(state): State<AppState>) -> Json<NewsResponse> {
    Json(NewsResponse {
        news: state.news.list().to_vec(),
    })
}
