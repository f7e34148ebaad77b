//! # Validation Module
//!
//! Input validation for beers entering the catalog and for stock moves.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (transport)                                           │
//! │  └── Type validation (deserialization of BeerDto)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: StockService                                                 │
//! │  └── THIS MODULE: field rules, run before any repository call          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE(name)                                                      │
//! │  └── CHECK (quantity BETWEEN 0 AND max_capacity)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use beerstock_core::validation::{validate_beer_name, validate_stock_amount};
//!
//! assert!(validate_beer_name("Skol").is_ok());
//! assert!(validate_stock_amount(0).is_err());
//! ```

use crate::dto::BeerDto;
use crate::error::ValidationError;
use crate::{MAX_INITIAL_QUANTITY, MAX_STOCK_CAPACITY, MAX_TEXT_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(())
}

/// Validates a beer name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use beerstock_core::validation::validate_beer_name;
///
/// assert!(validate_beer_name("Brahma").is_ok());
/// assert!(validate_beer_name("   ").is_err());
/// ```
pub fn validate_beer_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name)
}

/// Validates a brand. Same rules as [`validate_beer_name`].
pub fn validate_brand(brand: &str) -> ValidationResult<()> {
    validate_text("brand", brand)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a capacity ceiling.
///
/// ## Rules
/// - Between 1 and MAX_STOCK_CAPACITY (500)
pub fn validate_max(max: i64) -> ValidationResult<()> {
    if !(1..=MAX_STOCK_CAPACITY).contains(&max) {
        return Err(ValidationError::OutOfRange {
            field: "max".to_string(),
            min: 1,
            max: MAX_STOCK_CAPACITY,
        });
    }

    Ok(())
}

/// Validates the quantity a beer is created with.
///
/// ## Rules
/// - Non-negative
/// - Not above the beer's own `max`
/// - Not above MAX_INITIAL_QUANTITY (100)
///
/// ## Example
/// ```rust
/// use beerstock_core::validation::validate_initial_quantity;
///
/// assert!(validate_initial_quantity(0, 50).is_ok());
/// assert!(validate_initial_quantity(51, 50).is_err());
/// assert!(validate_initial_quantity(150, 500).is_err());
/// ```
pub fn validate_initial_quantity(quantity: i64, max: i64) -> ValidationResult<()> {
    let upper = max.min(MAX_INITIAL_QUANTITY);

    if !(0..=upper).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: upper,
        });
    }

    Ok(())
}

/// Validates the amount of a stock move (increment or decrement).
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Restock: Skol                                                          │
/// │                                                                         │
/// │  Operator enters amount: 10                                            │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_stock_amount(10) ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── amount <= 0? → Error: "amount must be positive"              │
/// │       │                                                                 │
/// │       └── OK → lookup, capacity check, save                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_stock_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a creation candidate, field by field.
///
/// The first failing rule is returned.
pub fn validate_candidate(candidate: &BeerDto) -> ValidationResult<()> {
    if candidate.id.is_some() {
        return Err(ValidationError::MustBeAbsent {
            field: "id".to_string(),
        });
    }

    validate_beer_name(&candidate.name)?;
    validate_brand(&candidate.brand)?;
    validate_max(candidate.max)?;
    validate_initial_quantity(candidate.quantity, candidate.max)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BeerType;

    #[test]
    fn test_validate_beer_name() {
        assert!(validate_beer_name("Skol").is_ok());
        assert!(validate_beer_name("Cerveja Bohemia Puro Malte").is_ok());

        assert!(validate_beer_name("").is_err());
        assert!(validate_beer_name("   ").is_err());
        assert!(validate_beer_name(&"A".repeat(201)).is_err());
        assert!(validate_beer_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_brand() {
        assert!(validate_brand("Ambev").is_ok());
        assert_eq!(
            validate_brand(""),
            Err(ValidationError::Required {
                field: "brand".to_string()
            })
        );
    }

    #[test]
    fn test_validate_max() {
        assert!(validate_max(1).is_ok());
        assert!(validate_max(500).is_ok());

        assert!(validate_max(0).is_err());
        assert!(validate_max(-5).is_err());
        assert!(validate_max(501).is_err());
    }

    #[test]
    fn test_validate_initial_quantity() {
        assert!(validate_initial_quantity(0, 50).is_ok());
        assert!(validate_initial_quantity(50, 50).is_ok());
        assert!(validate_initial_quantity(100, 500).is_ok());

        assert!(validate_initial_quantity(-1, 50).is_err());
        assert!(validate_initial_quantity(51, 50).is_err());
        assert_eq!(
            validate_initial_quantity(101, 500),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: 100
            })
        );
    }

    #[test]
    fn test_validate_stock_amount() {
        assert!(validate_stock_amount(1).is_ok());
        assert!(validate_stock_amount(0).is_err());
        assert!(validate_stock_amount(-10).is_err());
    }

    #[test]
    fn test_validate_candidate() {
        let candidate = BeerDto::candidate("Skol", "Ambev", 50, 10, BeerType::Lager);
        assert!(validate_candidate(&candidate).is_ok());

        let with_id = BeerDto {
            id: Some(3),
            ..candidate.clone()
        };
        assert!(matches!(
            validate_candidate(&with_id),
            Err(ValidationError::MustBeAbsent { .. })
        ));

        let over_capacity = BeerDto {
            quantity: 60,
            ..candidate
        };
        assert!(matches!(
            validate_candidate(&over_capacity),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
