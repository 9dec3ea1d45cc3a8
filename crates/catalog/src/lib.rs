//! Catalog domain module.
//!
//! This crate contains the product hierarchy for the catalog: a shared
//! product base (identity, naming, pricing, review rate) plus the audio,
//! video, and book category variants, implemented purely as deterministic
//! domain logic (no IO, no formatting, no storage).

pub mod audio;
pub mod book;
pub mod product;
pub mod video;

pub use audio::{AudioProduct, Genre};
pub use book::BookProduct;
pub use product::{Category, ContentInfo, MAX_PRICE, MIN_PRICE, NO_NAME_PRODUCT, Product};
pub use video::{FilmRating, VideoProduct};
