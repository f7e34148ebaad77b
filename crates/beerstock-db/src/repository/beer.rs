//! # Beer Repository
//!
//! SQLite implementation of [`BeerRepository`].
//!
//! ## Save Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        save(beer)                                       │
//! │                                                                         │
//! │  beer.id == None                    beer.id == Some(id)                │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  INSERT INTO beers (...)            INSERT INTO beers (id, ...)        │
//! │       │                             ON CONFLICT(id) DO UPDATE          │
//! │       ▼                                  │                              │
//! │  id = last_insert_rowid()                │                              │
//! │       │                                  │                              │
//! │       └──────────────┬───────────────────┘                              │
//! │                      ▼                                                  │
//! │  UNIQUE(name) clash on another row → RepositoryError::Conflict          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use beerstock_core::{Beer, BeerRepository, RepositoryError, RepositoryResult};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const SELECT_BEER: &str = "SELECT id, name, brand, max_capacity, quantity, beer_type FROM beers";

/// Repository for beer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteBeerRepository::new(pool);
///
/// let saved = repo.save(beer).await?;
/// let skol = repo.find_by_name("Skol").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteBeerRepository {
    pool: SqlitePool,
}

impl SqliteBeerRepository {
    /// Creates a new SqliteBeerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteBeerRepository { pool }
    }

    /// Counts stored beers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Gets a beer by its exact name.
    ///
    /// ## Returns
    /// * `Ok(Some(Beer))` - Beer found
    /// * `Ok(None)` - No beer with that name
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Beer>> {
        let beer = sqlx::query_as::<_, Beer>(&format!("{SELECT_BEER} WHERE name = ?1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(beer)
    }

    /// Gets a beer by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Beer>> {
        let beer = sqlx::query_as::<_, Beer>(&format!("{SELECT_BEER} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(beer)
    }

    /// Lists every beer, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Beer>> {
        let beers = sqlx::query_as::<_, Beer>(&format!("{SELECT_BEER} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = beers.len(), "Listed beers");
        Ok(beers)
    }

    /// Inserts a new beer or overwrites the row with the same id.
    ///
    /// ## Returns
    /// The stored beer, carrying its id.
    pub async fn upsert(&self, mut beer: Beer) -> DbResult<Beer> {
        let name = beer.name.clone();
        let with_name = |err: sqlx::Error| match DbError::from(err) {
            DbError::UniqueViolation { field, .. } => DbError::duplicate(field, name.as_str()),
            other => other,
        };

        match beer.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO beers (name, brand, max_capacity, quantity, beer_type)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                )
                .bind(&beer.name)
                .bind(&beer.brand)
                .bind(beer.max)
                .bind(beer.quantity)
                .bind(beer.beer_type)
                .execute(&self.pool)
                .await
                .map_err(with_name)?;

                beer.id = Some(result.last_insert_rowid());
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO beers (id, name, brand, max_capacity, quantity, beer_type)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        brand = excluded.brand,
                        max_capacity = excluded.max_capacity,
                        quantity = excluded.quantity,
                        beer_type = excluded.beer_type
                    "#,
                )
                .bind(id)
                .bind(&beer.name)
                .bind(&beer.brand)
                .bind(beer.max)
                .bind(beer.quantity)
                .bind(beer.beer_type)
                .execute(&self.pool)
                .await
                .map_err(with_name)?;
            }
        }

        debug!(id = ?beer.id, name = %beer.name, "Saved beer");
        Ok(beer)
    }

    /// Deletes the beer with `id`. Deleting an absent id is not an error.
    ///
    /// ## Returns
    /// Number of rows removed (0 or 1).
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM beers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, removed = result.rows_affected(), "Deleted beer");
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BeerRepository for SqliteBeerRepository {
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Beer>> {
        Ok(self.get_by_name(name).await?)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Beer>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Beer>> {
        Ok(self.list().await?)
    }

    async fn save(&self, beer: Beer) -> RepositoryResult<Beer> {
        self.upsert(beer).await.map_err(RepositoryError::from)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.delete(id).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
