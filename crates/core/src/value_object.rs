//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values; `Party`, `Product` and `LineItem` are
/// all handled this way, and an invoice edit swaps whole line items rather
/// than poking at their fields.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Party {
///     name: String,
///     avatar: String,
/// }
///
/// impl ValueObject for Party {}
///
/// let a = Party { name: "Ada".into(), avatar: String::new() };
/// let b = Party { name: "Ada".into(), avatar: String::new() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
