//! Shared test harness: in-memory SQLite with the embedded migrations.

use cms_access::db::MIGRATOR;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Fresh in-memory database. A single connection keeps every handle on the
/// same memory store.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("enable foreign keys");
    MIGRATOR.run(&pool).await.expect("apply migrations");
    pool
}

/// Insert a directory user the way the identity service would.
#[allow(dead_code)]
pub async fn insert_user(pool: &SqlitePool, username: &str, display_name: &str, role: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (username, display_name, role) VALUES (?, ?, ?) RETURNING id")
        .bind(username)
        .bind(display_name)
        .bind(role)
        .fetch_one(pool)
        .await
        .expect("insert user")
}
