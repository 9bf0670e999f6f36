//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from the old value.
///
/// - **Value Object**: `Kilograms(0.2)` is equal to any other `Kilograms(0.2)`
/// - **Entity**: two ingredients named "Flour" are still different records
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied,
/// compared in assertions and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
