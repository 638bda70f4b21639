//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{CategoryId, CategoryMap, CategoryOrder, PageParams, Question};

/// GET /categories response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// GET /categories/{id}/questions response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: CategoryId,
}

/// GET /categories - every category keyed by id, ordered by type
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryMap::from(state.store.categories(CategoryOrder::ByType).await?);

    if categories.is_empty() {
        return Err(ApiError::not_found("categories", "*"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
///
/// An unknown category and a page past the end both answer 404.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = CategoryId(id);
    let page = params.resolve(state.page_size);

    let result = state.store.list_questions(Some(category), page).await?;
    if result.is_empty() {
        return Err(ApiError::not_found(
            "category page",
            format!("{}?page={}", category, page.page),
        ));
    }

    tracing::debug!(
        %category,
        page = page.page,
        count = result.items.len(),
        "listed category questions"
    );

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(list_category_questions))
}
