//! In-memory store with the same semantics as the PostgreSQL tables
//!
//! Ids are assigned monotonically and never reused. Inserting a question
//! for an unknown category fails like a foreign key violation would.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::migrations::DEFAULT_CATEGORIES;
use super::store::{DbError, DbResult, TriviaStore};
use crate::models::{
    Category, CategoryId, CategoryOrder, NewQuestion, Paginated, Pagination, Question, QuestionId,
    SearchTerm,
};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_question_id: i32,
}

/// In-memory [`TriviaStore`]
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty store: no categories, no questions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default categories with ids 1..=6.
    pub fn seeded() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category::new(id, *kind))
            .collect();
        Self::with_categories(categories)
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                categories,
                ..Tables::default()
            }),
        }
    }

    fn filtered(tables: &Tables, category: Option<CategoryId>) -> Vec<Question> {
        tables
            .questions
            .values()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self, order: CategoryOrder) -> DbResult<Vec<Category>> {
        let mut categories = self.tables.read().await.categories.clone();
        match order {
            CategoryOrder::ById => categories.sort_by_key(|c| c.id),
            CategoryOrder::ByType => {
                categories.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)))
            }
        }
        Ok(categories)
    }

    async fn list_questions(
        &self,
        category: Option<CategoryId>,
        page: Pagination,
    ) -> DbResult<Paginated<Question>> {
        let tables = self.tables.read().await;
        let matching = Self::filtered(&tables, category);

        Ok(Paginated {
            items: page.window(&matching),
            total: matching.len() as i64,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn search_questions(&self, term: &SearchTerm) -> DbResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| term.matches(&q.question))
            .cloned()
            .collect())
    }

    async fn quiz_pool(&self, category: Option<CategoryId>) -> DbResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, category))
    }

    async fn create_question(&self, question: NewQuestion) -> DbResult<QuestionId> {
        let mut tables = self.tables.write().await;

        if !tables.categories.iter().any(|c| c.id == question.category()) {
            return Err(DbError::Constraint {
                reason: format!("category {} does not exist", question.category()),
            });
        }

        tables.next_question_id += 1;
        let id = QuestionId(tables.next_question_id);
        tables.questions.insert(id, question.into_question(id));
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> DbResult<QuestionId> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|q| q.id)
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateQuestionRequest, IntOrString, SearchRequest};

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion::new(CreateQuestionRequest {
            question: Some(text.into()),
            answer: Some("Answer".into()),
            difficulty: Some(IntOrString::Int(2)),
            category: Some(IntOrString::Int(category.into())),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn seeded_categories_by_type() {
        let store = MemoryStore::seeded();
        let kinds: Vec<_> = store
            .categories(CategoryOrder::ByType)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();

        assert_eq!(
            kinds,
            ["Art", "Entertainment", "Geography", "History", "Science", "Sports"]
        );
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryStore::seeded();
        let first = store.create_question(new_question("First?", 1)).await.unwrap();
        store.delete_question(first).await.unwrap();
        let second = store.create_question(new_question("Second?", 1)).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn unknown_category_violates_constraint() {
        let store = MemoryStore::seeded();
        let err = store.create_question(new_question("Orphan?", 42)).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint { .. }));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::seeded();
        let err = store.delete_question(QuestionId(500)).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn category_total_is_scoped() {
        let store = MemoryStore::seeded();
        for i in 0..12 {
            store.create_question(new_question(&format!("Science {}?", i), 1)).await.unwrap();
        }
        store.create_question(new_question("Art?", 2)).await.unwrap();

        let page = store
            .list_questions(Some(CategoryId(1)), Pagination::new(2, 10))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 12);

        let all = store.list_questions(None, Pagination::new(1, 10)).await.unwrap();
        assert_eq!(all.items.len(), 10);
        assert_eq!(all.total, 13);
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::seeded();
        store.create_question(new_question("Which planet is red?", 1)).await.unwrap();
        store.create_question(new_question("Who painted it?", 2)).await.unwrap();

        let term = SearchTerm::new(SearchRequest {
            search_term: Some("which".into()),
        })
        .unwrap();
        let found = store.search_questions(&term).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "Which planet is red?");
    }
}
