//! Product catalog and image carousels.
//!
//! This crate holds the static product table the Products page is rendered
//! from, plus the per-card carousel state machine. Pure logic only: no DOM,
//! no image fetching.

pub mod carousel;
pub mod catalog;
mod data;
pub mod gallery;
pub mod product;

pub use carousel::{CarouselCommand, CarouselEvent, CarouselState, Indicator};
pub use catalog::Catalog;
pub use gallery::Gallery;
pub use product::{ImageRef, Product, ProductBuilder, ProductId};
