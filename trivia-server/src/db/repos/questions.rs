//! Question repository
//!
//! - list: `COUNT(*) OVER()` for the total in the same query
//! - create/delete: single statement with `RETURNING id`
//! - foreign key violations surface as `DbError::Constraint`

use sqlx::{PgPool, Row};

use super::DbError;
use crate::models::{
    CategoryId, NewQuestion, Paginated, Pagination, Question, QuestionId, SearchTerm,
};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of questions ordered by id, optionally for one category.
    pub async fn list(
        &self,
        category: Option<CategoryId>,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id,
                question,
                answer,
                category,
                difficulty,
                COUNT(*) OVER() as total
            FROM questions
            WHERE ($1::int IS NULL OR category = $1)
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
        let items = rows
            .into_iter()
            .map(|r| Question {
                id: r.get("id"),
                question: r.get("question"),
                answer: r.get("answer"),
                category: r.get("category"),
                difficulty: r.get("difficulty"),
            })
            .collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Case-insensitive literal substring search on question text.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Every question, optionally restricted to one category.
    pub async fn all_in(&self, category: Option<CategoryId>) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::int IS NULL OR category = $1)
            ORDER BY id ASC
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a question.
    pub async fn create(&self, question: NewQuestion) -> Result<QuestionId, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_foreign_key_violation() => DbError::Constraint {
                reason: format!("category {} does not exist", question.category()),
            },
            _ => DbError::Sqlx(e),
        })?;

        Ok(row.get("id"))
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: QuestionId) -> Result<QuestionId, DbError> {
        let row = sqlx::query("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        Ok(row.get("id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::{CreateQuestionRequest, IntOrString, SearchRequest};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn repo_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed_categories(&pool).await.expect("seed failed");
        pool
    }

    fn new_question(text: &str) -> NewQuestion {
        question_in(text, CategoryId(1))
    }

    fn question_in(text: &str, category: CategoryId) -> NewQuestion {
        NewQuestion::new(CreateQuestionRequest {
            question: Some(text.into()),
            answer: Some("Yes".into()),
            difficulty: Some(IntOrString::Int(1)),
            category: Some(IntOrString::Int(category.0.into())),
        })
        .expect("valid question")
    }

    /// Fresh category holding `count` questions; dropping the category
    /// cascades to its questions.
    async fn scratch_category(pool: &PgPool, name: &str, count: usize) -> CategoryId {
        let (id,): (CategoryId,) =
            sqlx::query_as("INSERT INTO categories (type) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(pool)
                .await
                .expect("category insert failed");

        let repo = QuestionRepo::new(pool);
        for i in 0..count {
            repo.create(question_in(&format!("{} question {}?", name, i), id))
                .await
                .expect("question insert failed");
        }
        id
    }

    async fn drop_categories(pool: &PgPool, ids: &[CategoryId]) {
        let ids: Vec<i32> = ids.iter().map(|c| c.0).collect();
        sqlx::query("DELETE FROM categories WHERE id = ANY($1)")
            .bind(&ids)
            .execute(pool)
            .await
            .expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_scopes_total_to_category() {
        let pool = repo_pool().await;
        let repo = QuestionRepo::new(&pool);
        let busy = scratch_category(&pool, "Repo paging", 12).await;
        let other = scratch_category(&pool, "Repo paging other", 1).await;

        let second = repo.list(Some(busy), Pagination::new(2, 10)).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.total, 12);
        assert!(second.items.iter().all(|q| q.category == busy));
        assert!(second.items.windows(2).all(|w| w[0].id < w[1].id));

        let first = repo.list(Some(busy), Pagination::new(1, 10)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert!(first.items.last().unwrap().id < second.items[0].id);

        let everything = repo.list(None, Pagination::new(1, 10)).await.unwrap();
        assert!(everything.total >= 13);
        assert!(everything.total > second.total);
        assert!(everything.items.len() <= 10);

        drop_categories(&pool, &[busy, other]).await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_past_last_page_is_empty() {
        let pool = repo_pool().await;
        let repo = QuestionRepo::new(&pool);
        let category = scratch_category(&pool, "Repo past end", 12).await;

        let past = repo.list(Some(category), Pagination::new(3, 10)).await.unwrap();
        assert!(past.is_empty());
        assert_eq!(past.total, 0);

        let below = repo.list(Some(category), Pagination::new(0, 10)).await.unwrap();
        assert!(below.is_empty());

        drop_categories(&pool, &[category]).await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn all_in_filters_by_category() {
        let pool = repo_pool().await;
        let repo = QuestionRepo::new(&pool);
        let chosen = scratch_category(&pool, "Repo quiz", 3).await;
        let other = scratch_category(&pool, "Repo quiz other", 2).await;

        let pool_for_quiz = repo.all_in(Some(chosen)).await.unwrap();
        assert_eq!(pool_for_quiz.len(), 3);
        assert!(pool_for_quiz.iter().all(|q| q.category == chosen));

        let everything = repo.all_in(None).await.unwrap();
        assert!(everything.iter().any(|q| q.category == chosen));
        assert!(everything.iter().any(|q| q.category == other));

        drop_categories(&pool, &[chosen, other]).await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete() {
        let pool = repo_pool().await;
        let repo = QuestionRepo::new(&pool);

        let id = repo.create(new_question("Is this a repo test question?")).await.unwrap();
        assert_eq!(repo.delete(id).await.unwrap(), id);

        let err = repo.delete(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_wildcards_literally() {
        let pool = repo_pool().await;
        let repo = QuestionRepo::new(&pool);

        let id = repo.create(new_question("Is 100% of this literal?")).await.unwrap();
        let term = SearchTerm::new(SearchRequest {
            search_term: Some("100%".into()),
        })
        .unwrap();

        let found = repo.search(&term).await.unwrap();
        assert!(found.iter().any(|q| q.id == id));
        assert!(found.iter().all(|q| q.question.contains("100%")));

        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_category_is_constraint_error() {
        let pool = repo_pool().await;
        let repo = QuestionRepo::new(&pool);

        let question = NewQuestion::new(CreateQuestionRequest {
            question: Some("Orphan?".into()),
            answer: Some("No".into()),
            difficulty: Some(IntOrString::Int(1)),
            category: Some(IntOrString::Int(99_999)),
        })
        .unwrap();

        let err = repo.create(question).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint { .. }));
    }
}
