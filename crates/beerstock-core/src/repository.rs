//! # Repository Module
//!
//! The persistence seam the stock service depends on.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Implements BeerRepository                        │
//! │                                                                         │
//! │  StockService<R: BeerRepository>                                      │
//! │       │                                                                 │
//! │       ├── InMemoryBeerRepository   (this module, tests & embedding)    │
//! │       │                                                                 │
//! │       └── SqliteBeerRepository     (beerstock-db)                      │
//! │                                                                         │
//! │  Contract                                                              │
//! │  ├── find_by_name(name)  → Option<Beer>                                │
//! │  ├── find_by_id(id)      → Option<Beer>                                │
//! │  ├── find_all()          → Vec<Beer>                                   │
//! │  ├── save(beer)          → Beer (assigns id if absent, else overwrite) │
//! │  └── delete_by_id(id)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Atomicity between a read and a following write is not part of this
//! contract. Implementations that need it must provide it themselves.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{RepositoryError, RepositoryResult};
use crate::types::Beer;

/// Storage for beers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Looks a beer up by its unique name.
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Beer>>;

    /// Looks a beer up by its storage id.
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Beer>>;

    /// Returns every stored beer. No ordering is promised to callers.
    async fn find_all(&self) -> RepositoryResult<Vec<Beer>>;

    /// Inserts a beer without an id, or overwrites the one with its id.
    ///
    /// Returns the stored record, which always carries an id.
    async fn save(&self, beer: Beer) -> RepositoryResult<Beer>;

    /// Removes the beer with this id. Removing a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

#[derive(Debug)]
struct Shelf {
    next_id: i64,
    beers: BTreeMap<i64, Beer>,
}

/// Thread-safe in-memory repository.
///
/// - Ids are assigned sequentially from 1
/// - Names are unique; a clash is reported as [`RepositoryError::Conflict`]
/// - `find_all` yields beers in id order
/// - Data is lost when the repository is dropped
#[derive(Debug)]
pub struct InMemoryBeerRepository {
    shelf: RwLock<Shelf>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        InMemoryBeerRepository {
            shelf: RwLock::new(Shelf {
                next_id: 1,
                beers: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored beers.
    pub async fn len(&self) -> usize {
        self.shelf.read().await.beers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryBeerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Beer>> {
        let shelf = self.shelf.read().await;
        Ok(shelf.beers.values().find(|b| b.name == name).cloned())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Beer>> {
        Ok(self.shelf.read().await.beers.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Beer>> {
        Ok(self.shelf.read().await.beers.values().cloned().collect())
    }

    async fn save(&self, mut beer: Beer) -> RepositoryResult<Beer> {
        let mut shelf = self.shelf.write().await;

        let clash = shelf
            .beers
            .values()
            .any(|b| b.name == beer.name && b.id != beer.id);
        if clash {
            return Err(RepositoryError::Conflict(format!(
                "name '{}' already exists",
                beer.name
            )));
        }

        let id = match beer.id {
            Some(id) => id,
            None => shelf.next_id,
        };
        shelf.next_id = shelf.next_id.max(id + 1);
        beer.id = Some(id);

        debug!(id, name = %beer.name, "Saving beer in memory");
        shelf.beers.insert(id, beer.clone());

        Ok(beer)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.shelf.write().await.beers.remove(&id);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BeerType;

    fn beer(name: &str) -> Beer {
        Beer {
            id: None,
            name: name.to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryBeerRepository::new();

        let first = repo.save(beer("Skol")).await.unwrap();
        let second = repo.save(beer("Brahma")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = InMemoryBeerRepository::new();
        let mut stored = repo.save(beer("Skol")).await.unwrap();

        stored.quantity = 42;
        repo.save(stored.clone()).await.unwrap();

        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.quantity, 42);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let repo = InMemoryBeerRepository::new();
        repo.save(beer("Skol")).await.unwrap();

        let err = repo.save(beer("Skol")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_all_in_id_order_and_delete() {
        let repo = InMemoryBeerRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.save(beer("Skol")).await.unwrap();
        repo.save(beer("Brahma")).await.unwrap();
        repo.save(beer("Antarctica")).await.unwrap();

        repo.delete_by_id(2).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Skol", "Antarctica"]);
        assert!(repo.find_by_name("Brahma").await.unwrap().is_none());

        // Ids are never reused after a delete
        let next = repo.save(beer("Bohemia")).await.unwrap();
        assert_eq!(next.id, Some(4));
    }
}
