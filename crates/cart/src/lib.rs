//! Shopping cart domain module.
//!
//! A bounded, ordered collection of catalog products owned by a customer,
//! with add/remove operations and derived purchase statistics. Pure domain
//! logic: no IO, no formatting, no storage.

pub mod cart;

pub use cart::{Cart, MAX_ITEMS, PurchaseSummary};
