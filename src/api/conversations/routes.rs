use crate::api::conversations::handlers::{
    add_conversation_handler, chat_handler, list_conversations_handler,
};
use crate::api::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/conversations/",
            get(list_conversations_handler).post(add_conversation_handler),
        )
        .route(
            "/conversations",
            get(list_conversations_handler).post(add_conversation_handler),
        )
        .route("/conversations/chat", post(chat_handler))
}
