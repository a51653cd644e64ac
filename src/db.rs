use crate::{
    error::{map_sqlx_error, StorageError},
    models::UrlMapping,
};
use sqlx::SqlitePool;

/// Insert the mapping, or overwrite the short code of the row that already
/// holds `original_url`, and return the stored row.
///
/// A single `INSERT .. ON CONFLICT .. RETURNING` statement, so two identical
/// submissions racing each other still leave exactly one row.
pub async fn upsert_mapping(
    pool: &SqlitePool,
    original_url: &str,
    short_url: &str,
) -> Result<UrlMapping, StorageError> {
    sqlx::query_as(
        "INSERT INTO urls (original_url, short_url) VALUES (?1, ?2)
         ON CONFLICT (original_url) DO UPDATE SET short_url = excluded.short_url
         RETURNING original_url, short_url",
    )
    .bind(original_url)
    .bind(short_url)
    .fetch_one(pool)
    .await
    .map_err(map_sqlx_error)
}

/// Fetch the mapping for a short code, if any.
pub async fn find_by_short_url(
    pool: &SqlitePool,
    short_url: &str,
) -> Result<Option<UrlMapping>, StorageError> {
    sqlx::query_as("SELECT original_url, short_url FROM urls WHERE short_url = ?1")
        .bind(short_url)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx_error)
}

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use sqlx::SqlitePool;
    use std::str::FromStr;

    /// Fresh in-memory database with migrations applied.
    ///
    /// One connection only, since every `:memory:` connection is its own
    /// database.
    pub async fn memory_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }
}
