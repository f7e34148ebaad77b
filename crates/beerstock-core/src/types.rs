//! # Domain Types
//!
//! Core domain types used throughout Beerstock.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Beer       │   │    BeerType     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (storage)   │   │  Lager          │                             │
//! │  │  name (unique)  │   │  Malzbier       │                             │
//! │  │  brand          │   │  Witbier        │                             │
//! │  │  max            │   │  Weiss          │                             │
//! │  │  quantity       │   │  Ale, Ipa       │                             │
//! │  │  beer_type      │   │  Stout          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: assigned by storage on creation, immutable afterwards
//! - `name`: human-readable business key, unique across the catalog

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Beer Type
// =============================================================================

/// Style of a beer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    /// All styles, in declaration order.
    pub const ALL: [BeerType; 7] = [
        BeerType::Lager,
        BeerType::Malzbier,
        BeerType::Witbier,
        BeerType::Weiss,
        BeerType::Ale,
        BeerType::Ipa,
        BeerType::Stout,
    ];

    /// Display label for the style.
    pub fn description(&self) -> &'static str {
        match self {
            BeerType::Lager => "Lager",
            BeerType::Malzbier => "Malzbier",
            BeerType::Witbier => "Witbier",
            BeerType::Weiss => "Weiss",
            BeerType::Ale => "Ale",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "Stout",
        }
    }
}

// =============================================================================
// Beer
// =============================================================================

/// A stored beer and its stock level.
///
/// Invariant: `0 <= quantity <= max` holds for every persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Beer {
    /// Storage-assigned identifier. `None` only before the first save.
    pub id: Option<i64>,

    /// Unique display name.
    pub name: String,

    /// Brewery or brand.
    pub brand: String,

    /// Capacity ceiling for `quantity`.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "max_capacity"))]
    pub max: i64,

    /// Units currently in stock.
    pub quantity: i64,

    pub beer_type: BeerType,
}

impl Beer {
    /// Units that can still be added before reaching `max`.
    #[inline]
    pub fn remaining_capacity(&self) -> i64 {
        self.max - self.quantity
    }

    /// Checks whether the stock is at its ceiling.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.quantity >= self.max
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
