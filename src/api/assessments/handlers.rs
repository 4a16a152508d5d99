use crate::api::models::*;
use crate::storage::{HealthAssessment, RiskLevel};
use axum::{extract::State, Json};
use tracing::{info, warn};

pub async fn create_assessment_handler(
    State(state): State<AppState>,
    ValidJson(assessment): ValidJson<HealthAssessment>,
) -> Json<AssessmentCreatedResponse> {
    // Submitted risk levels are stored as-is; only flag disagreement.
    if let (Some(score), Some(submitted)) = (assessment.score, assessment.risk_level) {
        let derived = RiskLevel::from_score(score);
        if derived != submitted {
            warn!(score, ?submitted, ?derived, "Submitted risk level disagrees with score");
        }
    }

    let assessment = state.assessments.append(assessment).await;

    info!(
        user_id = assessment.user_id,
        assessment_type = %assessment.assessment_type,
        "Assessment stored"
    );

    Json(AssessmentCreatedResponse {
        message: "Assessment saved successfully".to_string(),
        assessment,
    })
}

pub async fn list_assessments_handler(State(state): State<AppState>) -> Json<Vec<HealthAssessment>> {
    Json(state.assessments.list().await)
}
