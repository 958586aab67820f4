#![allow(dead_code)]

use shortly::state::AppState;
use sqlx::PgPool;

pub const TEST_BASE_URL: &str = "https://s.test.com";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool, TEST_BASE_URL.to_string())
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
