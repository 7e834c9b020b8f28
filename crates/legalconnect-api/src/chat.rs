use axum::{
    Json,
    extract::{Query, State},
};

use legalconnect_db::{DEFAULT_HISTORY_LIMIT, Storage};
use legalconnect_types::api::{ChatRequest, HistoryQuery, LegalResponse};
use legalconnect_types::models::ChatMessage;

use crate::error::AppError;
use crate::state::AppState;

const MAX_QUESTION_CHARS: usize = 2000;
const MAX_HISTORY_LIMIT: usize = 200;

/// POST /api/chat
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<LegalResponse>, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question must not be empty".into()));
    }
    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(AppError::Validation(format!(
            "question must be at most {} characters",
            MAX_QUESTION_CHARS
        )));
    }

    let response = state.chat.answer(question, req.language).await?;
    Ok(Json(response))
}

/// GET /api/chat/history?limit=n
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).min(MAX_HISTORY_LIMIT);
    let messages = state.store.get_chat_history(limit).await?;
    Ok(Json(messages))
}
