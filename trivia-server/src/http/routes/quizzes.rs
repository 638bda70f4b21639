//! Quiz endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{pick_next, PlayQuizRequest, Question, QuizRound};

/// POST /quizzes response; `question` is null once the pool is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - next random question not yet played
///
/// Request-shape problems answer 422 here, not 400.
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PlayQuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = body.map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;
    let round = QuizRound::new(req).map_err(|e| ApiError::unprocessable(e.to_string()))?;

    let pool = state.store.quiz_pool(round.category).await?;
    let pool_size = pool.len();
    let question = pick_next(pool, &round.previous, &mut rand::thread_rng());

    tracing::debug!(
        category = ?round.category,
        category_type = round.label.as_deref().unwrap_or("all"),
        pool_size,
        played = round.previous.len(),
        exhausted = question.is_none(),
        "quiz question selected"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
