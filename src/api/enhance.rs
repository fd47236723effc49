//! `POST /enhance-idea` handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::agent::build_enhance_prompt;

use super::error::ApiError;
use super::routes::AppState;
use super::types::{EnhanceResponse, IdeaRequest};

/// Evaluate a submitted idea: agent opinion plus a direct summary.
pub async fn enhance_idea(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("Field 'text' must not be empty"));
    }

    let request_id = Uuid::new_v4();
    info!(
        "Processing idea [{}] (search: {})",
        request_id, request.enhance_with_search
    );

    let prompt = build_enhance_prompt(&request.text, request.enhance_with_search);
    let opinion = state.agent.run(&prompt).await?;

    // Summarize the raw idea text, not the agent's output
    let summary = state.summarizer.summarize(&request.text).await?;

    info!("Idea [{}] processed", request_id);

    Ok(Json(EnhanceResponse {
        summary,
        opinion,
        search_performed: request.enhance_with_search,
    }))
}
