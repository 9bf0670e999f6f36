//! Ingredient stock records.
//!
//! This crate contains the ingredient record and its stock arithmetic,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod ingredient;

pub use ingredient::{Ingredient, IngredientId, IngredientUpdate, NewIngredient};
