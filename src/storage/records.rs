use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Bucket a 0-100 style score: below 30 low, below 70 moderate, else high.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

/// A submitted self-assessment. Stored as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// e.g. `diabetes`, `heart_health`
    pub assessment_type: String,
    pub questions_answers: BTreeMap<String, String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    pub user_id: i64,
}

/// Conversation owners show up both as numeric ids and as string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConversationUser {
    Id(i64),
    Name(String),
}

impl std::fmt::Display for ConversationUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationUser::Id(id) => write!(f, "{id}"),
            ConversationUser::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub user_message: String,
    pub bot_response: String,
    #[serde(default = "empty_context")]
    pub context: Option<Map<String, Value>>,
    pub user_id: ConversationUser,
}

fn empty_context() -> Option<Map<String, Value>> {
    Some(Map::new())
}
