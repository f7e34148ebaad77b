//! # beerstock-core: Stock Rules for Beerstock
//!
//! This crate holds the business logic of the beer catalog. It performs no
//! I/O; storage is reached only through the [`BeerRepository`] trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Beerstock Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (HTTP handler, CLI, seed)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BeerDto                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ beerstock-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  service  │  │  mapper   │  │ validation│  │repository │  │   │
//! │  │   │  Stock-   │  │ BeerDto ⇄ │  │  field    │  │  trait +  │  │   │
//! │  │   │  Service  │  │   Beer    │  │  rules    │  │ in-memory │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ BeerRepository                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 beerstock-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Beer, BeerType)
//! - [`dto`] - Wire representation (BeerDto)
//! - [`mapper`] - BeerDto ⇄ Beer conversion
//! - [`validation`] - Field rules for candidates and stock moves
//! - [`repository`] - The storage trait and an in-memory implementation
//! - [`service`] - StockService
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use beerstock_core::{BeerDto, BeerType, InMemoryBeerRepository, StockService};
//!
//! let service = StockService::new(InMemoryBeerRepository::new());
//! let skol = service
//!     .create_beer(BeerDto::candidate("Skol", "Ambev", 50, 10, BeerType::Lager))
//!     .await?;
//!
//! // 10 + 45 > 50
//! assert!(service.increment(skol.id.unwrap(), 45).await.is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod error;
pub mod mapper;
pub mod repository;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dto::BeerDto;
pub use error::{
    ErrorCode, Lookup, RepositoryError, RepositoryResult, StockError, StockResult,
    ValidationError,
};
pub use repository::{BeerRepository, InMemoryBeerRepository};
pub use service::StockService;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest capacity ceiling a beer may be registered with.
pub const MAX_STOCK_CAPACITY: i64 = 500;

/// Highest quantity a beer may be registered with.
///
/// Larger stock has to arrive through increments, where `max` applies.
pub const MAX_INITIAL_QUANTITY: i64 = 100;

/// Longest accepted name or brand, in characters.
pub const MAX_TEXT_LENGTH: usize = 200;
