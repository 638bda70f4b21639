//! Store abstraction used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, QuestionRepo};
use crate::models::{
    Category, CategoryId, CategoryOrder, NewQuestion, Paginated, Pagination, Question, QuestionId,
    SearchTerm,
};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violated: {reason}")]
    Constraint { reason: String },
}

pub type DbResult<T> = Result<T, DbError>;

/// Questions and categories persistence.
///
/// Every method is a single store operation; consistency across calls
/// is whatever the backing store provides.
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories in the requested order.
    async fn categories(&self, order: CategoryOrder) -> DbResult<Vec<Category>>;

    /// One page of questions ordered by id, optionally scoped to a category.
    ///
    /// `total` counts every question matching the same filter.
    async fn list_questions(
        &self,
        category: Option<CategoryId>,
        page: Pagination,
    ) -> DbResult<Paginated<Question>>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &SearchTerm) -> DbResult<Vec<Question>>;

    /// Every question eligible for a quiz in `category` (`None` = all).
    async fn quiz_pool(&self, category: Option<CategoryId>) -> DbResult<Vec<Question>>;

    /// Insert a question, returning its assigned id.
    async fn create_question(&self, question: NewQuestion) -> DbResult<QuestionId>;

    /// Delete a question; `DbError::NotFound` if it does not exist.
    async fn delete_question(&self, id: QuestionId) -> DbResult<QuestionId>;

    /// Cheap round trip to the backing store. Stores without a
    /// connection are always reachable.
    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self, order: CategoryOrder) -> DbResult<Vec<Category>> {
        CategoryRepo::new(&self.pool).list(order).await
    }

    async fn list_questions(
        &self,
        category: Option<CategoryId>,
        page: Pagination,
    ) -> DbResult<Paginated<Question>> {
        QuestionRepo::new(&self.pool).list(category, page).await
    }

    async fn search_questions(&self, term: &SearchTerm) -> DbResult<Vec<Question>> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn quiz_pool(&self, category: Option<CategoryId>) -> DbResult<Vec<Question>> {
        QuestionRepo::new(&self.pool).all_in(category).await
    }

    async fn create_question(&self, question: NewQuestion) -> DbResult<QuestionId> {
        QuestionRepo::new(&self.pool).create(question).await
    }

    async fn delete_question(&self, id: QuestionId) -> DbResult<QuestionId> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
