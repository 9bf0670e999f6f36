//! Stock deduction planning.
//!
//! Selling `n` units of a dish consumes `quantity_required * n` of every
//! ingredient on the dish's recipe. Each recipe line yields its own deduction,
//! so an ingredient listed twice is deducted twice.

use serde::{Deserialize, Serialize};

use larder_core::Kilograms;
use larder_ingredients::IngredientId;
use larder_menu::{DishLine, DishLineId};

/// One planned subtraction from an ingredient's available stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDeduction {
    /// Recipe line the deduction comes from.
    pub line_id: DishLineId,
    pub ingredient_id: IngredientId,
    /// Mass to subtract. Negative when the sold quantity is negative.
    pub amount: Kilograms,
}

/// Plan the deductions for selling `quantity_sold` units of a dish with `lines`.
///
/// No validation: zero units yield zero amounts, negative units yield
/// negative amounts (stock goes up when applied).
pub fn plan_deductions<'a, I>(lines: I, quantity_sold: i64) -> Vec<StockDeduction>
where
    I: IntoIterator<Item = &'a DishLine>,
{
    lines
        .into_iter()
        .map(|line| StockDeduction {
            line_id: line.id_typed(),
            ingredient_id: line.ingredient_id(),
            amount: line.quantity_required() * quantity_sold,
        })
        .collect()
}
