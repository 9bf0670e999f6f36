//! Walk through one service day against in-memory stores and log the effects.
//!
//! `RUST_LOG=debug cargo run --bin larder-demo` shows every deduction.

use larder_infra::{Kitchen, SystemClock};
use larder_ingredients::NewIngredient;
use larder_menu::NewDish;
use larder_sales::NewSale;

fn main() -> anyhow::Result<()> {
    larder_observability::init();

    let kitchen = Kitchen::in_memory(SystemClock);

    let flour = kitchen.create_ingredient(NewIngredient::new("Flour", 10.0).with_minimum(8.5))?;
    let tomato = kitchen.create_ingredient(NewIngredient::new("Tomato", 4.0).with_minimum(1.0))?;
    let pizza = kitchen.create_dish(
        NewDish::new("Pizza")
            .with_line(flour.id_typed(), 0.2)
            .with_line(tomato.id_typed(), 0.1),
    )?;

    kitchen.create_sale(NewSale::new(pizza.id_typed(), 5))?;
    kitchen.create_sale(NewSale::new(pizza.id_typed(), 3))?;

    for ingredient in kitchen.ingredients()? {
        tracing::info!(
            name = ingredient.name(),
            quantity_available = ingredient.quantity_available().value(),
            below_minimum = ingredient.is_below_minimum(),
            "closing stock"
        );
    }

    Ok(())
}
