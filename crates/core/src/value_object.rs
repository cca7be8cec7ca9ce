//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct QualityBounds {
///     min: i64,
///     max: i64,
/// }
///
/// impl ValueObject for QualityBounds {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
