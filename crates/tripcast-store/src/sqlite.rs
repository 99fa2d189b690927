use std::future::Future;
use std::pin::Pin;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use tripcast_core::{Destination, DestinationStore, StoreError, Temperature};

use crate::models::DestinationRow;

/// Connection settings for the SQLite store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
        }
    }

    /// In-memory database on a single connection. A pool of several
    /// `:memory:` connections would each see a different database.
    pub fn in_memory() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
        }
    }
}

/// Destination store backed by a SQLite pool.
pub struct SqliteDestinationStore {
    pool: SqlitePool,
}

impl SqliteDestinationStore {
    pub async fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Self::initialize_schema(&pool).await?;

        Ok(Self { pool })
    }

    async fn initialize_schema(pool: &SqlitePool) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS destinations (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                temperature REAL NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }
}

fn insert_error(err: sqlx::Error, name: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict {
            name: name.to_string(),
        },
        _ => StoreError::Query(err.to_string()),
    }
}

impl DestinationStore for SqliteDestinationStore {
    fn insert<'a>(
        &'a self,
        destination: Destination,
    ) -> Pin<Box<dyn Future<Output = Result<Destination, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            sqlx::query("INSERT INTO destinations (id, name, temperature) VALUES (?, ?, ?)")
                .bind(&destination.id)
                .bind(destination.name.as_str())
                .bind(destination.temperature.value())
                .execute(&self.pool)
                .await
                .map_err(|e| insert_error(e, destination.name.as_str()))?;

            Ok(destination)
        })
    }

    fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Destination>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let row = sqlx::query_as::<_, DestinationRow>(
                "SELECT id, name, temperature FROM destinations WHERE name = ?",
            )
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

            row.map(DestinationRow::into_domain).transpose()
        })
    }

    fn update_temperature<'a>(
        &'a self,
        name: &'a str,
        temperature: Temperature,
    ) -> Pin<Box<dyn Future<Output = Result<Destination, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let row = sqlx::query_as::<_, DestinationRow>(
                "UPDATE destinations SET temperature = ? WHERE name = ? \
                 RETURNING id, name, temperature",
            )
            .bind(temperature.value())
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })?;

            row.into_domain()
        })
    }

    fn delete<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM destinations WHERE name = ?")
                .bind(name)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;

            if result.rows_affected() == 0 {
                return Err(StoreError::NotFound {
                    name: name.to_string(),
                });
            }

            Ok(())
        })
    }

    fn list_all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Destination>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, DestinationRow>(
                "SELECT id, name, temperature FROM destinations ORDER BY rowid",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

            rows.into_iter().map(DestinationRow::into_domain).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripcast_core::DestinationName;

    async fn store() -> SqliteDestinationStore {
        SqliteDestinationStore::new(StoreConfig::in_memory())
            .await
            .expect("in-memory store opens")
    }

    fn destination(name: &str, temperature: f64) -> Destination {
        Destination::create(
            DestinationName::parse(name).expect("valid name"),
            Temperature::new(temperature).expect("valid temperature"),
        )
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = store().await;
        let stored = store
            .insert(destination("Paris", 20.0))
            .await
            .expect("insert succeeds");

        let found = store
            .find_by_name("Paris")
            .await
            .expect("find succeeds")
            .expect("present");
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn unique_constraint_turns_duplicates_into_conflicts() {
        let store = store().await;
        store
            .insert(destination("Paris", 20.0))
            .await
            .expect("first insert");

        let err = store
            .insert(destination("Paris", 10.0))
            .await
            .expect_err("duplicate must fail");
        assert_eq!(
            err,
            StoreError::Conflict {
                name: String::from("Paris")
            }
        );

        let all = store.list_all().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].temperature.value(), 20.0);
    }

    #[tokio::test]
    async fn absence_is_a_normal_find_outcome() {
        let store = store().await;
        assert!(store
            .find_by_name("Nowhere")
            .await
            .expect("find succeeds")
            .is_none());
    }

    #[tokio::test]
    async fn update_returns_the_row_with_only_the_temperature_changed() {
        let store = store().await;
        let stored = store
            .insert(destination("Oslo", 5.0))
            .await
            .expect("insert");

        let updated = store
            .update_temperature("Oslo", Temperature::new(12.0).expect("valid"))
            .await
            .expect("update succeeds");

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, stored.name);
        assert_eq!(updated.temperature.value(), 12.0);
    }

    #[tokio::test]
    async fn update_and_delete_of_absent_names_fail_not_found() {
        let store = store().await;

        let err = store
            .update_temperature("Nowhere", Temperature::new(1.0).expect("valid"))
            .await
            .expect_err("update must fail");
        assert!(matches!(err, StoreError::NotFound { .. }));

        let err = store.delete("Nowhere").await.expect_err("delete must fail");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_named_record() {
        let store = store().await;
        store.insert(destination("Paris", 20.0)).await.expect("insert");
        store.insert(destination("Oslo", 5.0)).await.expect("insert");

        store.delete("Paris").await.expect("delete succeeds");

        let names: Vec<String> = store
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|d| d.name.to_string())
            .collect();
        assert_eq!(names, vec!["Oslo"]);
    }

    #[tokio::test]
    async fn list_follows_insertion_order() {
        let store = store().await;
        for name in ["Lima", "Oslo", "Cairo"] {
            store.insert(destination(name, 10.0)).await.expect("insert");
        }

        let names: Vec<String> = store
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|d| d.name.to_string())
            .collect();
        assert_eq!(names, vec!["Lima", "Oslo", "Cairo"]);
    }

    #[tokio::test]
    async fn names_are_case_sensitive_keys() {
        let store = store().await;
        store.insert(destination("Paris", 20.0)).await.expect("insert");
        store.insert(destination("paris", 10.0)).await.expect("case differs");

        assert!(store
            .find_by_name("PARIS")
            .await
            .expect("find succeeds")
            .is_none());
    }
}
