//! # Repository Module
//!
//! SQLite implementations of the storage traits defined in beerstock-core.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StockService<R: BeerRepository>                                        │
//! │       │                                                                 │
//! │       │  find_by_name / find_by_id / find_all / save / delete_by_id     │
//! │       ▼                                                                 │
//! │  SqliteBeerRepository                                                   │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (beers table)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`beer::SqliteBeerRepository`] - Beer catalog storage

pub mod beer;
