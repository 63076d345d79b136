//! `gajanand-site`
//!
//! **Responsibility:** the presentation shell of the distributor's website.
//!
//! This crate provides:
//! - The route table and product-anchor handling
//! - Theme selection
//! - Static page copy (home, about, footer)
//! - Site configuration
//! - The Leptos frontend that wires the catalog carousels and the contact
//!   form into pages (wasm32 only)
//!
//! Everything outside `frontend` is plain Rust and is tested natively.

pub mod config;
pub mod content;
pub mod layout;
pub mod routes;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::SiteConfig;
pub use routes::Route;
pub use theme::Theme;
