//! Database connection pool management
//!
//! One pool is created at start-up and cloned into every repository.

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use lf_shared::DatabaseConfig;

use crate::InfrastructureError;

/// Schema applied by [`DatabasePool::migrate`]
const SCHEMA: &str = include_str!("../../migrations/001_create_users_and_items.sql");

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// Connects eagerly so that a bad URL or unreachable server fails start-up.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_statement_ms),
            );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the tables if they do not exist yet
    pub async fn migrate(&self) -> Result<(), InfrastructureError> {
        for statement in schema_statements(SCHEMA) {
            sqlx::query(&statement).execute(&self.pool).await?;
        }
        tracing::info!("Database schema is up to date");
        Ok(())
    }

    /// Close all connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Split a SQL script into statements, dropping comment lines
fn schema_statements(script: &str) -> Vec<String> {
    let without_comments: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_two_tables() {
        let statements = schema_statements(SCHEMA);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS users"));
        assert!(statements[1].starts_with("CREATE TABLE IF NOT EXISTS items"));
    }

    #[test]
    fn test_foreign_key_tables_share_collation() {
        // items.posted_by_id references users.id, so both tables must compare alike
        let statements = schema_statements(SCHEMA);
        let collations: Vec<&str> = statements
            .iter()
            .filter_map(|statement| statement.rsplit_once("COLLATE="))
            .map(|(_, collation)| collation.trim())
            .collect();
        assert_eq!(collations, vec!["utf8mb4_bin", "utf8mb4_bin"]);
        assert!(!SCHEMA.contains("COLLATE utf8mb4_unicode_ci"));
    }

    #[test]
    fn test_item_text_fields_are_unbounded() {
        let items = &schema_statements(SCHEMA)[1];
        for column in ["item_name", "description", "location", "contact"] {
            let line = items
                .lines()
                .find(|line| line.trim_start().starts_with(column))
                .unwrap();
            assert!(line.contains("TEXT"), "{} should be TEXT: {}", column, line);
        }
    }
}
