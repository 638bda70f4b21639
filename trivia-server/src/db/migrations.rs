//! Schema migrations and default data

use sqlx::PgPool;

use super::DbError;

/// Categories inserted by [`seed_categories`], in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Create the categories and questions tables if missing.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL CHECK (btrim(question) <> ''),
            answer TEXT NOT NULL CHECK (btrim(answer) <> ''),
            category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`] when the categories table is empty.
///
/// Returns the number of categories inserted.
pub async fn seed_categories(pool: &PgPool) -> Result<u64, DbError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::debug!(existing, "categories already present, skipping seed");
        return Ok(0);
    }

    let result = sqlx::query("INSERT INTO categories (type) SELECT * FROM UNNEST($1::text[])")
        .bind(&DEFAULT_CATEGORIES[..])
        .execute(pool)
        .await?;

    tracing::info!(inserted = result.rows_affected(), "seeded default categories");
    Ok(result.rows_affected())
}
