use crate::api::assessments::handlers::{create_assessment_handler, list_assessments_handler};
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/assessments/",
            get(list_assessments_handler).post(create_assessment_handler),
        )
        .route(
            "/assessments",
            get(list_assessments_handler).post(create_assessment_handler),
        )
}
