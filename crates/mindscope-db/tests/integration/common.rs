//! Test utilities for integration tests.
//!
//! Provides helper functions to set up isolated PostgreSQL containers
//! holding the statement table for each test.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

/// Schema mirroring the production table. Each statement runs separately.
const MIGRATIONS: &[&str] = &[r#"CREATE TABLE IF NOT EXISTS mental_health_responses (
        id BIGINT PRIMARY KEY,
        statement TEXT,
        clean_statement TEXT,
        status TEXT
    )"#];

/// Sets up a PostgreSQL container and returns a connection pool.
///
/// The container is cleaned up when the returned `ContainerAsync` is dropped,
/// so keep it alive for the duration of the test.
pub async fn setup_test_db() -> (PgPool, ContainerAsync<GenericImage>) {
    let container = GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "postgres")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let connection_string = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

    // The server restarts once after initdb, so retry until it accepts connections.
    const MAX_RETRIES: u32 = 30;
    let mut retries = 0;
    let pool = loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .connect(&connection_string)
            .await
        {
            Ok(pool) => break pool,
            Err(e) => {
                retries += 1;
                if retries >= MAX_RETRIES {
                    panic!(
                        "Failed to connect to database after {} retries: {}",
                        MAX_RETRIES, e
                    );
                }
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }
    };

    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(&pool)
            .await
            .expect("Failed to run migration");
    }

    (pool, container)
}

/// Inserts one statement row.
pub async fn insert_response(
    pool: &PgPool,
    id: i64,
    clean_statement: Option<&str>,
    status: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO mental_health_responses (id, statement, clean_statement, status)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(clean_statement.map(|s| format!("RAW: {}", s)))
    .bind(clean_statement)
    .bind(status)
    .execute(pool)
    .await
    .expect("Failed to insert response");
}

/// Builds a text of exactly `n` whitespace-separated words.
#[allow(dead_code)]
pub fn words(n: usize) -> String {
    vec!["restless"; n].join(" ")
}
