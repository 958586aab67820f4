mod common;

use std::sync::Arc;

use shortly::application::services::LinkService;
use shortly::domain::entities::NewLink;
use shortly::domain::repositories::{InsertError, LinkRepository};
use shortly::error::AppError;
use shortly::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;

fn repository(pool: PgPool) -> Arc<PgLinkRepository> {
    Arc::new(PgLinkRepository::new(Arc::new(pool)))
}

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_and_find_round_trip(pool: PgPool) {
    let repo = repository(pool);

    let created = repo
        .insert(new_link("abc123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(created.code, "abc123");
    assert_eq!(created.long_url, "https://example.com");

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.long_url, "https://example.com");
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test]
async fn test_find_unknown_code_returns_none(pool: PgPool) {
    let repo = repository(pool);

    let found = repo.find_by_code("nosuch").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_duplicate_insert_reports_duplicate_code(pool: PgPool) {
    let repo = repository(pool);

    repo.insert(new_link("abc123", "https://first.com"))
        .await
        .unwrap();

    let result = repo.insert(new_link("abc123", "https://second.com")).await;

    assert!(matches!(result.unwrap_err(), InsertError::DuplicateCode));

    // The original mapping is untouched.
    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.long_url, "https://first.com");
}

#[sqlx::test]
async fn test_concurrent_inserts_of_same_code_one_winner(pool: PgPool) {
    let repo = repository(pool.clone());

    let insert = |url: &str| {
        let repo = repo.clone();
        let link = new_link("race01", url);
        async move { repo.insert(link).await }
    };

    let (a, b, c, d) = tokio::join!(
        insert("https://example.com/a"),
        insert("https://example.com/b"),
        insert("https://example.com/c"),
        insert("https://example.com/d"),
    );

    let results = [a, b, c, d];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(InsertError::DuplicateCode)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 3);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_concurrent_allocations_with_distinct_codes_all_succeed(pool: PgPool) {
    let service = Arc::new(LinkService::new(repository(pool)));

    let shorten = |code: &str| {
        let service = service.clone();
        let code = code.to_string();
        async move {
            service
                .shorten(format!("https://example.com/{code}"), Some(code))
                .await
        }
    };

    let (a, b, c, d) = tokio::join!(
        shorten("alpha1"),
        shorten("bravo2"),
        shorten("charlie3"),
        shorten("delta4"),
    );

    for result in [a, b, c, d] {
        let link = result.unwrap();
        let resolved = service.resolve(&link.code).await.unwrap();
        assert_eq!(resolved.long_url, link.long_url);
    }
}

#[sqlx::test]
async fn test_concurrent_allocations_of_same_custom_code_one_winner(pool: PgPool) {
    let service = Arc::new(LinkService::new(repository(pool)));

    let shorten = |url: &str| {
        let service = service.clone();
        let url = url.to_string();
        async move { service.shorten(url, Some("race02".to_string())).await }
    };

    let (a, b, c, d) = tokio::join!(
        shorten("https://example.com/a"),
        shorten("https://example.com/b"),
        shorten("https://example.com/c"),
        shorten("https://example.com/d"),
    );

    let results = [a, b, c, d];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict { .. })))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 3);
}
