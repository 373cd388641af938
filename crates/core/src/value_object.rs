//! Value object trait: equality by value, not identity.
//!
//! Packed records (sections, aisles) and locators carry no identity of their
//! own. Two values with the same bits are the same value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// produce a new value; the packed-record mutators all follow this shape and
/// return the updated record instead of writing through a reference.
///
/// ```ignore
/// let before = Aisle::new(0);
/// let after = before.with_id(0, 5);
/// assert_ne!(before, after); // `before` is untouched
/// ```
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
