//! Domain core for the items service.
//!
//! # Overview
//! Holds the `Item` record and the `ItemStore` that owns the collection and
//! its id counter. No I/O and no async: the HTTP server wraps the store in a
//! lock and translates `StoreError` into responses.
//!
//! # Design
//! - `ItemStore` replaces process-wide globals with an owned value, so tests
//!   build a fresh store per case.
//! - Ids are `i64`, assigned from 1 upward and never reused.
//! - `Item` doubles as the request payload; see `types` for decoding rules.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::ItemStore;
pub use types::{Item, ItemId};
