//! Category repository (read-only)

use sqlx::PgPool;

use super::DbError;
use crate::models::{Category, CategoryOrder};

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every category.
    pub async fn list(&self, order: CategoryOrder) -> Result<Vec<Category>, DbError> {
        let sql = match order {
            CategoryOrder::ById => "SELECT id, type FROM categories ORDER BY id ASC",
            CategoryOrder::ByType => "SELECT id, type FROM categories ORDER BY type ASC, id ASC",
        };

        let categories = sqlx::query_as::<_, Category>(sql)
            .fetch_all(self.pool)
            .await?;

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ordered_by_type() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed_categories(&pool).await.expect("seed failed");

        let categories = CategoryRepo::new(&pool).list(CategoryOrder::ByType).await.unwrap();
        let kinds: Vec<_> = categories.iter().map(|c| c.kind.as_str()).collect();

        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
    }
}
