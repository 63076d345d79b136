//! `gajanand-core` — shared building blocks for the site's interactive widgets.
//!
//! Everything here is **pure**: no DOM, no timers, no IO. The catalog and
//! contact crates model their state on top of these primitives and the site
//! shell drives them from UI callbacks.

pub mod entity;
pub mod error;
pub mod id;
pub mod machine;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::Slug;
pub use machine::StateMachine;
pub use value_object::ValueObject;
