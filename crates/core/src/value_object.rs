//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their contents.
///
/// Image references and compose links are value objects: two links built from
/// the same form contents are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ImageRef(String);
///
/// impl ValueObject for ImageRef {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
