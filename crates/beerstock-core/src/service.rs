//! # Stock Service
//!
//! Business rules for the beer catalog: duplicate-name rejection on create
//! and capacity-bound stock moves.
//!
//! ## Stock Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Beer Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create_beer() → quantity q0  (name must be new)                │
//! │                                                                         │
//! │  2. STOCK MOVES                                                        │
//! │     └── increment(a) → q + a        (guard: q + a <= max)              │
//! │     └── decrement(a) → q - a        (guard: q - a >= 0)                │
//! │                                                                         │
//! │  3. DELETE                                                             │
//! │     └── delete_by_id() → absent     (terminal)                         │
//! │                                                                         │
//! │  Every guard runs before the single repository write of the operation. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::dto::BeerDto;
use crate::error::{RepositoryError, StockError, StockResult};
use crate::mapper::{to_dto, to_model};
use crate::repository::BeerRepository;
use crate::types::Beer;
use crate::validation::{validate_candidate, validate_stock_amount};

/// Stock service over a [`BeerRepository`].
///
/// Holds nothing but its repository, so it can be built once at startup or
/// per request.
///
/// ## Usage
/// ```rust,ignore
/// let service = StockService::new(InMemoryBeerRepository::new());
///
/// let skol = service
///     .create_beer(BeerDto::candidate("Skol", "Ambev", 50, 10, BeerType::Lager))
///     .await?;
/// let restocked = service.increment(skol.id.unwrap(), 10).await?;
/// assert_eq!(restocked.quantity, 20);
/// ```
#[derive(Debug, Clone)]
pub struct StockService<R> {
    repository: R,
}

impl<R: BeerRepository> StockService<R> {
    /// Creates a service backed by `repository`.
    pub fn new(repository: R) -> Self {
        StockService { repository }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Registers a new beer.
    ///
    /// ## Returns
    /// * `Ok(BeerDto)` - The stored beer, with its assigned id
    /// * `Err(StockError::Validation)` - Candidate breaks a field rule
    /// * `Err(StockError::AlreadyRegistered)` - Name is taken
    pub async fn create_beer(&self, candidate: BeerDto) -> StockResult<BeerDto> {
        validate_candidate(&candidate)?;

        debug!(name = %candidate.name, "Creating beer");

        if self.repository.find_by_name(&candidate.name).await?.is_some() {
            warn!(name = %candidate.name, "Beer already registered");
            return Err(StockError::AlreadyRegistered {
                name: candidate.name,
            });
        }

        let name = candidate.name.clone();
        // A concurrent create can still win the race to the unique index
        let saved = self
            .repository
            .save(to_model(candidate))
            .await
            .map_err(|err| match err {
                RepositoryError::Conflict(_) => StockError::AlreadyRegistered { name },
                other => StockError::Repository(other),
            })?;

        info!(id = ?saved.id, name = %saved.name, "Beer created");
        Ok(to_dto(saved))
    }

    /// Looks a beer up by name.
    pub async fn find_by_name(&self, name: &str) -> StockResult<BeerDto> {
        debug!(name = %name, "Finding beer by name");

        let beer = self
            .repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| StockError::not_found_name(name))?;

        Ok(to_dto(beer))
    }

    /// Lists every beer, in whatever order the repository yields.
    pub async fn list_all(&self) -> StockResult<Vec<BeerDto>> {
        let beers = self.repository.find_all().await?;
        debug!(count = beers.len(), "Listed beers");
        Ok(beers.into_iter().map(to_dto).collect())
    }

    /// Deletes a beer.
    ///
    /// ## Returns
    /// * `Ok(())` - Beer removed
    /// * `Err(StockError::NotFound)` - No beer with this id; nothing deleted
    pub async fn delete_by_id(&self, id: i64) -> StockResult<()> {
        self.verify_exists(id).await?;

        self.repository.delete_by_id(id).await?;

        info!(id, "Beer deleted");
        Ok(())
    }

    /// Adds `amount` units to a beer's stock.
    ///
    /// ## Returns
    /// * `Ok(BeerDto)` - Beer with `quantity + amount`
    /// * `Err(StockError::NotFound)` - No beer with this id
    /// * `Err(StockError::StockExceeded)` - Result would pass `max`; nothing saved
    pub async fn increment(&self, id: i64, amount: i64) -> StockResult<BeerDto> {
        validate_stock_amount(amount)?;

        let mut beer = self.verify_exists(id).await?;

        // Compared against the headroom so `quantity + amount` cannot overflow
        if amount > beer.remaining_capacity() {
            warn!(
                id,
                quantity = beer.quantity,
                amount,
                max = beer.max,
                "Increment exceeds max stock capacity"
            );
            return Err(StockError::StockExceeded {
                id,
                quantity: beer.quantity,
                amount,
                max: beer.max,
            });
        }

        beer.quantity += amount;
        let saved = self.repository.save(beer).await?;

        debug!(id, quantity = saved.quantity, "Stock incremented");
        Ok(to_dto(saved))
    }

    /// Removes `amount` units from a beer's stock.
    ///
    /// Going below zero is an error; the quantity is never clamped.
    ///
    /// ## Returns
    /// * `Ok(BeerDto)` - Beer with `quantity - amount`
    /// * `Err(StockError::NotFound)` - No beer with this id
    /// * `Err(StockError::StockUnderflow)` - Not enough stock; nothing saved
    pub async fn decrement(&self, id: i64, amount: i64) -> StockResult<BeerDto> {
        validate_stock_amount(amount)?;

        let mut beer = self.verify_exists(id).await?;

        if amount > beer.quantity {
            warn!(
                id,
                quantity = beer.quantity,
                amount,
                "Decrement leaves negative stock"
            );
            return Err(StockError::StockUnderflow {
                id,
                quantity: beer.quantity,
                amount,
            });
        }

        beer.quantity -= amount;
        let saved = self.repository.save(beer).await?;

        debug!(id, quantity = saved.quantity, "Stock decremented");
        Ok(to_dto(saved))
    }

    async fn verify_exists(&self, id: i64) -> StockResult<Beer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| StockError::not_found_id(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
