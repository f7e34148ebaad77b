//! # Wire Types
//!
//! The representation of a beer that crosses the service boundary.
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Skol",
//!   "brand": "Ambev",
//!   "max": 50,
//!   "quantity": 10,
//!   "type": "LAGER"
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::BeerType;

/// Beer DTO (Data Transfer Object) for callers of the stock service.
///
/// A candidate for creation carries `id: None`; every DTO returned by the
/// service carries the storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub brand: String,
    pub max: i64,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl BeerDto {
    /// Creates a creation candidate (no id).
    pub fn candidate(
        name: impl Into<String>,
        brand: impl Into<String>,
        max: i64,
        quantity: i64,
        beer_type: BeerType,
    ) -> Self {
        BeerDto {
            id: None,
            name: name.into(),
            brand: brand.into(),
            max,
            quantity,
            beer_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let dto = BeerDto {
            id: Some(1),
            ..BeerDto::candidate("Skol", "Ambev", 50, 10, BeerType::Lager)
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Skol",
                "brand": "Ambev",
                "max": 50,
                "quantity": 10,
                "type": "LAGER"
            })
        );
    }

    #[test]
    fn test_candidate_without_id_deserializes() {
        let dto: BeerDto = serde_json::from_str(
            r#"{"name":"Brahma","brand":"Ambev","max":60,"quantity":5,"type":"ALE"}"#,
        )
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.beer_type, BeerType::Ale);
    }
}
