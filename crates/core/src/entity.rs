//! Entity trait: records that are addressed by a stable key.

/// Anything the shell looks up, anchors to, or keys widget state by.
///
/// Catalog products are entities: two products with identical text but
/// different ids are different cards on the page.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
