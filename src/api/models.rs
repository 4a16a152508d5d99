use crate::advice::AdviceResponder;
use crate::config::ChatConfig;
use crate::storage::{
    ConversationRecord, HealthAssessment, NewsFeed, RecordLog, StorageError, UserRegistry,
};
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRegistry>,
    pub assessments: Arc<RecordLog<HealthAssessment>>,
    pub conversations: Arc<RecordLog<ConversationRecord>>,
    pub news: Arc<NewsFeed>,
    pub responder: AdviceResponder,
    pub chat: ChatConfig,
}

impl AppState {
    pub fn new(chat: ChatConfig) -> Self {
        Self {
            users: Arc::new(UserRegistry::new()),
            assessments: Arc::new(RecordLog::new()),
            conversations: Arc::new(RecordLog::new()),
            news: Arc::new(NewsFeed::default()),
            responder: AdviceResponder::new(),
            chat,
        }
    }
}

/// Request to register a new user
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub full_name: String,
    pub email: String,
}

/// Response after storing an assessment
#[derive(Debug, Serialize)]
pub struct AssessmentCreatedResponse {
    pub message: String,
    pub assessment: HealthAssessment,
}

/// Response after storing a conversation
#[derive(Debug, Serialize)]
pub struct ConversationCreatedResponse {
    pub message: String,
    pub conversation: ConversationRecord,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub news: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub users: usize,
    pub assessments: usize,
    pub conversations: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            detail,
        }))
        .into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UserNotFound { .. } => AppError::NotFound("User not found".to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // well-formed JSON that doesn't fit the schema
            JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// `Json` extractor whose rejections render as [`AppError`].
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
