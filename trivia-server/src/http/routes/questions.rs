//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;
use crate::models::{
    CategoryId, CategoryMap, CategoryOrder, CreateQuestionRequest, NewQuestion, PageParams,
    Question, QuestionId, SearchRequest, SearchTerm,
};

/// Question list response; `categories` is only present on the full listing.
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<CategoryId>,
}

/// DELETE /questions/{id} response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// POST /questions response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub new_question: QuestionId,
}

/// GET /questions - one page of all questions plus every category
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let page = params.resolve(state.page_size);

    let result = state.store.list_questions(None, page).await?;
    if result.is_empty() {
        return Err(ApiError::not_found("questions page", page.page));
    }

    let categories = state.store.categories(CategoryOrder::ById).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        categories: Some(CategoryMap::from(categories)),
        current_category: None,
    }))
}

/// POST /questions - add a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = NewQuestion::new(req)?;
    let id = state.store.create_question(question).await?;

    tracing::info!(question_id = %id, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        new_question: id,
    }))
}

/// DELETE /questions/{id} - remove a question permanently
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = state.store.delete_question(QuestionId(id)).await?;

    tracing::info!(question_id = %deleted, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// No match is still a success with an empty list.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let term = SearchTerm::new(req)?;
    let questions = state.store.search_questions(&term).await?;

    tracing::debug!(term = term.as_str(), matches = questions.len(), "search complete");

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        categories: None,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}
