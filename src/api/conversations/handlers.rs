use crate::api::models::*;
use crate::storage::{ConversationRecord, ConversationUser};
use axum::{extract::State, Json};
use serde_json::{Map, Value};
use tracing::info;

pub async fn add_conversation_handler(
    State(state): State<AppState>,
    ValidJson(conversation): ValidJson<ConversationRecord>,
) -> Json<ConversationCreatedResponse> {
    let conversation = state.conversations.append(conversation).await;
    info!(user_id = %conversation.user_id, "Conversation stored");

    Json(ConversationCreatedResponse {
        message: "Conversation saved".to_string(),
        conversation,
    })
}

pub async fn list_conversations_handler(
    State(state): State<AppState>,
) -> Json<Vec<ConversationRecord>> {
    Json(state.conversations.list().await)
}

pub async fn chat_handler(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ChatRequest>,
) -> Json<ChatResponse> {
    let response = state.responder.respond(&request.user_id, &request.message);
    info!(user_id = %request.user_id, "Chat answered");

    if state.chat.record_conversations {
        let mut context = Map::new();
        context.insert("source".to_string(), Value::from("chat"));

        state
            .conversations
            .append(ConversationRecord {
                user_message: request.message,
                bot_response: response.clone(),
                context: Some(context),
                user_id: ConversationUser::Name(request.user_id),
            })
            .await;
    }

    Json(ChatResponse { response })
}
