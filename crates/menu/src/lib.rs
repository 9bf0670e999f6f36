//! Menu records: dishes and the ingredient lines that make up their recipes.
//!
//! Pure record definitions and validation (no IO, no storage). Keeping the
//! lines as their own records lets a store cascade them when a dish goes away.

pub mod dish;
pub mod line;

pub use dish::{Dish, DishId, NewDish, RecipeLine};
pub use line::{DishLine, DishLineId, NewDishLine};
