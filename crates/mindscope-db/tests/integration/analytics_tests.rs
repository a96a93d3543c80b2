//! End-to-end analytics against PostgreSQL.

use std::collections::BTreeMap;

use mindscope_core::{AnalyticsService, WordFrequency};
use mindscope_db::ResponseRepository;

use crate::integration::common::{insert_response, setup_test_db, words};

#[tokio::test]
async fn test_distribution_sums_trimmed_variants() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 1, Some("a"), Some("Anxiety")).await;
    insert_response(&pool, 2, Some("b"), Some(" Anxiety ")).await;
    insert_response(&pool, 3, Some("c"), Some("Depression")).await;
    insert_response(&pool, 4, Some("d"), Some("")).await;
    insert_response(&pool, 5, Some("e"), None).await;
    let service = AnalyticsService::new(ResponseRepository::new(pool));

    let result = service.distribution().await.expect("distribution should succeed");

    let expected = BTreeMap::from([("Anxiety".to_string(), 2), ("Depression".to_string(), 1)]);
    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_top_words_with_tie_break() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 1, Some("anxiety panic anxiety"), Some("X")).await;
    insert_response(&pool, 2, Some("panic worry"), Some("X")).await;
    let service = AnalyticsService::new(ResponseRepository::new(pool));

    let result = service.top_words(2).await.expect("top words should succeed");

    assert_eq!(
        result["X"],
        vec![
            WordFrequency {
                word: "anxiety".to_string(),
                freq: 2
            },
            WordFrequency {
                word: "panic".to_string(),
                freq: 2
            },
        ]
    );
}

#[tokio::test]
async fn test_length_stats_excludes_outliers() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 1, Some(&words(3)), Some("Stress")).await;
    insert_response(&pool, 2, Some(&words(5)), Some("Stress")).await;
    insert_response(&pool, 3, Some(&words(7)), Some("Stress")).await;
    insert_response(&pool, 4, Some(&words(9)), Some("Stress")).await;
    insert_response(&pool, 5, Some(&words(401)), Some("Stress")).await;
    let service = AnalyticsService::new(ResponseRepository::new(pool));

    let result = service.length_stats().await.expect("length stats should succeed");

    assert_eq!(result["Stress"], 6.0);
}

#[tokio::test]
async fn test_examples_first_ids_only() {
    let (pool, _container) = setup_test_db().await;
    insert_response(&pool, 10, Some("ten"), Some("Anxiety")).await;
    insert_response(&pool, 11, Some("eleven"), Some("Anxiety")).await;
    insert_response(&pool, 12, Some("twelve"), Some("Anxiety")).await;
    let service = AnalyticsService::new(ResponseRepository::new(pool));

    let result = service.examples("Anxiety", 2).await.expect("examples should succeed");

    assert_eq!(result, vec!["ten", "eleven"]);
}
