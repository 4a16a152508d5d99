pub mod log;
pub mod news;
pub mod records;
pub mod registry;

pub use log::RecordLog;
pub use news::NewsFeed;
pub use records::{ConversationRecord, ConversationUser, HealthAssessment, RiskLevel, UserProfile};
pub use registry::UserRegistry;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },
}
