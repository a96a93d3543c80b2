//! Integration tests for ResponseRepository.
//!
//! These tests verify the query filters and ordering against a real
//! PostgreSQL database. Each test runs in an isolated container.

use futures::TryStreamExt;
use mindscope_core::StatusText;
use mindscope_db::ResponseRepository;

use crate::integration::common::{insert_response, setup_test_db};

#[tokio::test]
async fn test_status_counts_groups_raw_values() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 1, Some("a"), Some("Anxiety")).await;
    insert_response(&pool, 2, Some("b"), Some(" Anxiety ")).await;
    insert_response(&pool, 3, Some("c"), Some("Anxiety")).await;
    insert_response(&pool, 4, Some("d"), Some("")).await;
    insert_response(&pool, 5, Some("e"), None).await;
    let repo = ResponseRepository::new(pool);

    let mut rows = repo.status_counts().await.expect("query should succeed");
    rows.sort_by(|a, b| a.status.cmp(&b.status));

    let pairs: Vec<(&str, i64)> = rows.iter().map(|r| (r.status.as_str(), r.count)).collect();
    assert_eq!(pairs, vec![(" Anxiety ", 1), ("Anxiety", 2)]);
}

#[tokio::test]
async fn test_status_counts_skip_control_whitespace_labels() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 1, Some("a"), Some("\t")).await;
    insert_response(&pool, 2, Some("b"), Some(" \r\n ")).await;
    insert_response(&pool, 3, Some("c"), Some("\tStress")).await;
    let repo = ResponseRepository::new(pool);

    let rows = repo.status_counts().await.expect("query should succeed");

    let pairs: Vec<(&str, i64)> = rows.iter().map(|r| (r.status.as_str(), r.count)).collect();
    assert_eq!(pairs, vec![("\tStress", 1)]);

    let texts: Vec<StatusText> = repo
        .status_texts_stream()
        .try_collect()
        .await
        .expect("stream should succeed");
    assert_eq!(texts, vec![StatusText::new("\tStress", "c")]);
}

#[tokio::test]
async fn test_status_texts_filters_and_orders_by_id() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 30, Some("third"), Some("Stress")).await;
    insert_response(&pool, 10, Some("first"), Some("Stress")).await;
    insert_response(&pool, 20, None, Some("Stress")).await;
    insert_response(&pool, 25, Some(""), Some("Stress")).await;
    insert_response(&pool, 15, Some("no status"), Some("  ")).await;
    insert_response(&pool, 12, Some("second"), Some("Normal")).await;
    let repo = ResponseRepository::new(pool);

    let rows: Vec<StatusText> = repo
        .status_texts_stream()
        .try_collect()
        .await
        .expect("stream should succeed");

    assert_eq!(
        rows,
        vec![
            StatusText::new("Stress", "first"),
            StatusText::new("Normal", "second"),
            StatusText::new("Stress", "third"),
        ]
    );
}

#[tokio::test]
async fn test_examples_exact_match_ordered_and_limited() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 12, Some("twelve"), Some("Anxiety")).await;
    insert_response(&pool, 10, Some("ten"), Some("Anxiety")).await;
    insert_response(&pool, 11, Some("eleven"), Some("Anxiety")).await;
    insert_response(&pool, 13, Some("padded"), Some("Anxiety ")).await;
    insert_response(&pool, 14, Some("lower"), Some("anxiety")).await;
    let repo = ResponseRepository::new(pool);

    let texts = repo.examples("Anxiety", 2).await.expect("query should succeed");
    assert_eq!(texts, vec!["ten", "eleven"]);

    let texts = repo.examples("Anxiety ", 5).await.expect("query should succeed");
    assert_eq!(texts, vec!["padded"]);

    let texts = repo.examples("Bipolar", 5).await.expect("query should succeed");
    assert!(texts.is_empty());
}

#[tokio::test]
async fn test_list_pages_by_id() {
    let (pool, _container) = setup_test_db().await;
    for id in [5, 3, 1, 4, 2] {
        insert_response(&pool, id, Some("text"), Some("Normal")).await;
    }
    let repo = ResponseRepository::new(pool);

    let page = repo.list(1, 3).await.expect("query should succeed");
    let ids: Vec<i64> = page.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);

    let past_end = repo.list(10, 3).await.expect("query should succeed");
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_get_by_id() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 42, Some("calm today"), Some("Normal")).await;
    insert_response(&pool, 43, None, None).await;
    let repo = ResponseRepository::new(pool);

    let record = repo
        .get(42)
        .await
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.id, 42);
    assert_eq!(record.clean_statement.as_deref(), Some("calm today"));
    assert_eq!(record.statement.as_deref(), Some("RAW: calm today"));
    assert_eq!(record.status.as_deref(), Some("Normal"));

    let bare = repo
        .get(43)
        .await
        .expect("query should succeed")
        .expect("record should exist");
    assert!(bare.clean_statement.is_none());
    assert!(bare.status.is_none());

    assert!(repo.get(999).await.expect("query should succeed").is_none());
}

#[tokio::test]
async fn test_health_check() {
    let (pool, _container) = setup_test_db().await;
    let repo = ResponseRepository::new(pool);

    repo.health_check().await.expect("health check should pass");
}
