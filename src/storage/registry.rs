use crate::storage::records::UserProfile;
use crate::storage::StorageError;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory user table. Ids are `user1`, `user2`, ... in registration order.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, full_name: String, email: String) -> UserProfile {
        let mut users = self.users.write().await;

        // Entries are never removed, so len + 1 is always fresh.
        let user_id = format!("user{}", users.len() + 1);
        let profile = UserProfile {
            user_id: user_id.clone(),
            full_name,
            email,
        };
        users.insert(user_id, profile.clone());

        info!(user_id = %profile.user_id, total = users.len(), "User registered");
        profile
    }

    pub async fn get(&self, user_id: &str) -> Result<UserProfile, StorageError> {
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| StorageError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
