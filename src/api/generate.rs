//! 出题端点

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{GenerateRequest, Question};
use crate::state::AppState;

/// 生成短请求 ID，用于关联同一请求的日志
fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// 生成选择题
async fn generate_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Question>>> {
    let request_id = generate_request_id();

    let Json(req) = payload.map_err(|rejection| {
        warn!("[{}] Rejected request body: {}", request_id, rejection.body_text());
        AppError::Validation(rejection.body_text())
    })?;

    info!(
        "[{}] Generate request: topic={:?}, n_questions={}",
        request_id, req.topic, req.n_questions
    );

    match state.questions.generate(&req).await {
        Ok(questions) => {
            info!("[{}] Generated {} questions", request_id, questions.len());
            Ok(Json(questions))
        }
        Err(e @ AppError::Validation(_)) => {
            warn!("[{}] Invalid request: {}", request_id, e);
            Err(e)
        }
        Err(e) => {
            error!("[{}] Question generation failed: {}", request_id, e);
            Err(e)
        }
    }
}

pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(generate_questions))
}
