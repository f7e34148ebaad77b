//! # Mapper
//!
//! Field-by-field conversion between [`BeerDto`] and [`Beer`].
//!
//! Both directions copy every field unchanged, so
//! `to_model(to_dto(beer)) == beer` for any beer.

use crate::dto::BeerDto;
use crate::types::Beer;

/// Converts a wire record into the internal model.
pub fn to_model(dto: BeerDto) -> Beer {
    Beer {
        id: dto.id,
        name: dto.name,
        brand: dto.brand,
        max: dto.max,
        quantity: dto.quantity,
        beer_type: dto.beer_type,
    }
}

/// Converts the internal model into a wire record.
pub fn to_dto(beer: Beer) -> BeerDto {
    BeerDto {
        id: beer.id,
        name: beer.name,
        brand: beer.brand,
        max: beer.max,
        quantity: beer.quantity,
        beer_type: beer.beer_type,
    }
}

impl From<BeerDto> for Beer {
    fn from(dto: BeerDto) -> Self {
        to_model(dto)
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        to_dto(beer)
    }
}
