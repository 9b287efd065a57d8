//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** of their own; they are defined entirely by
//! their attribute values. Record keys are the typical example here: a key built
//! from `("milk", 2024-06-10)` equals any other key built from the same values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with the same values are equal)
/// - **Entity**: has identity (two entities with the same id are the same record,
///   whatever their remaining attributes say)
///
/// Example:
/// - an `ItemKey { name: "milk", expiry: 2024-06-10 }` is a value object
/// - a `FoodItem` whose id is that key is an entity; its quantity may change
///   while it stays the same record
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct ItemKey {
///     name: String,
///     expiry: NaiveDate,
/// }
///
/// impl ValueObject for ItemKey {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
