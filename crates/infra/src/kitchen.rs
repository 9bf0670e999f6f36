//! Kitchen service: record operations over the stores plus the sale side effect.
//!
//! ```text
//! create_sale(input)
//!   ↓
//! 1. Resolve the dish (missing dish → NotFound, nothing persisted)
//!   ↓
//! 2. Persist the sale
//!   ↓
//! 3. Plan one deduction per recipe line (quantity_required × quantity_sold)
//!   ↓
//! 4. For each deduction: load ingredient, subtract, save
//!   ↓
//! 5. Return the sale
//! ```
//!
//! Nothing here is transactional. If step 4 fails part-way (an ingredient was
//! deleted, the store errors) the sale and the deductions already applied stay
//! in place. Concurrent sales touching the same ingredient race on the
//! load/save pair; the last write wins.

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use larder_core::DomainError;
use larder_ingredients::{Ingredient, IngredientId, IngredientUpdate, NewIngredient};
use larder_menu::{Dish, DishId, DishLine, DishLineId, NewDish, NewDishLine};
use larder_sales::{NewSale, Sale, SaleId, StockDeduction, plan_deductions};

use crate::clock::{Clock, SystemClock};
use crate::store::{InMemoryRecordStore, RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum KitchenError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl KitchenError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, KitchenError::Domain(e) if e.is_not_found())
    }
}

/// Application service over the four record stores.
#[derive(Debug)]
pub struct Kitchen<I, D, L, S, C = SystemClock> {
    ingredients: I,
    dishes: D,
    lines: L,
    sales: S,
    clock: C,
}

/// Kitchen backed entirely by in-memory stores.
pub type InMemoryKitchen<C = SystemClock> = Kitchen<
    InMemoryRecordStore<Ingredient>,
    InMemoryRecordStore<Dish>,
    InMemoryRecordStore<DishLine>,
    InMemoryRecordStore<Sale>,
    C,
>;

impl<C: Clock> InMemoryKitchen<C> {
    pub fn in_memory(clock: C) -> Self {
        Kitchen::new(
            InMemoryRecordStore::new(),
            InMemoryRecordStore::new(),
            InMemoryRecordStore::new(),
            InMemoryRecordStore::new(),
            clock,
        )
    }
}

impl<I, D, L, S, C> Kitchen<I, D, L, S, C> {
    pub fn new(ingredients: I, dishes: D, lines: L, sales: S, clock: C) -> Self {
        Self {
            ingredients,
            dishes,
            lines,
            sales,
            clock,
        }
    }
}

impl<I, D, L, S, C> Kitchen<I, D, L, S, C>
where
    I: RecordStore<Ingredient>,
    D: RecordStore<Dish>,
    L: RecordStore<DishLine>,
    S: RecordStore<Sale>,
    C: Clock,
{
    // --- ingredients -----------------------------------------------------

    pub fn create_ingredient(&self, input: NewIngredient) -> Result<Ingredient, KitchenError> {
        let ingredient = Ingredient::create(IngredientId::generate(), input)?;
        self.ingredients.save(ingredient.clone())?;
        info!(
            ingredient_id = %ingredient.id_typed(),
            name = ingredient.name(),
            quantity_available = ingredient.quantity_available().value(),
            "ingredient created"
        );
        Ok(ingredient)
    }

    pub fn ingredient(&self, id: IngredientId) -> Result<Option<Ingredient>, KitchenError> {
        Ok(self.ingredients.get(&id)?)
    }

    pub fn ingredients(&self) -> Result<Vec<Ingredient>, KitchenError> {
        Ok(self.ingredients.list()?)
    }

    pub fn update_ingredient(
        &self,
        id: IngredientId,
        update: IngredientUpdate,
    ) -> Result<Ingredient, KitchenError> {
        let mut ingredient = self.require_ingredient(id)?;
        ingredient.apply_update(update)?;
        self.ingredients.save(ingredient.clone())?;
        Ok(ingredient)
    }

    /// Delete an ingredient that no recipe line refers to.
    pub fn delete_ingredient(&self, id: IngredientId) -> Result<Ingredient, KitchenError> {
        let used_by = self
            .lines
            .list()?
            .iter()
            .filter(|line| line.ingredient_id() == id)
            .count();
        if used_by > 0 {
            return Err(DomainError::conflict(format!(
                "ingredient {id} is used by {used_by} dish line(s)"
            ))
            .into());
        }

        let removed = self
            .ingredients
            .remove(&id)?
            .ok_or_else(|| DomainError::not_found(format!("ingredient {id}")))?;
        info!(ingredient_id = %id, "ingredient deleted");
        Ok(removed)
    }

    // --- dishes & recipe lines ------------------------------------------

    /// Create a dish together with its initial recipe lines.
    ///
    /// Every referenced ingredient must exist; otherwise nothing is stored.
    pub fn create_dish(&self, input: NewDish) -> Result<Dish, KitchenError> {
        let dish = Dish::create(DishId::generate(), &input)?;
        for line in &input.lines {
            self.require_ingredient(line.ingredient_id)?;
        }

        self.dishes.save(dish.clone())?;
        for line in &input.lines {
            let record = DishLine::create(DishLineId::generate(), line.for_dish(dish.id_typed()));
            self.lines.save(record)?;
        }

        info!(
            dish_id = %dish.id_typed(),
            name = dish.name(),
            lines = input.lines.len(),
            "dish created"
        );
        Ok(dish)
    }

    pub fn dish(&self, id: DishId) -> Result<Option<Dish>, KitchenError> {
        Ok(self.dishes.get(&id)?)
    }

    pub fn dishes(&self) -> Result<Vec<Dish>, KitchenError> {
        Ok(self.dishes.list()?)
    }

    pub fn rename_dish(&self, id: DishId, name: &str) -> Result<Dish, KitchenError> {
        let mut dish = self.require_dish(id)?;
        dish.rename(name)?;
        self.dishes.save(dish.clone())?;
        Ok(dish)
    }

    /// Delete a dish and, in cascade, all of its recipe lines.
    ///
    /// Ingredient stock is left untouched. A dish that already has recorded
    /// sales cannot be deleted, since every sale must point at a dish.
    pub fn delete_dish(&self, id: DishId) -> Result<Dish, KitchenError> {
        let dish = self.require_dish(id)?;

        let sold = self
            .sales
            .list()?
            .iter()
            .filter(|sale| sale.dish_id() == id)
            .count();
        if sold > 0 {
            return Err(DomainError::conflict(format!(
                "dish {id} has {sold} recorded sale(s)"
            ))
            .into());
        }

        let lines = self.recipe_of(&dish)?;
        for line in &lines {
            self.lines.remove(&line.id_typed())?;
        }
        self.dishes.remove(&id)?;

        info!(dish_id = %id, lines_removed = lines.len(), "dish deleted");
        Ok(dish)
    }

    pub fn add_dish_line(&self, input: NewDishLine) -> Result<DishLine, KitchenError> {
        self.require_dish(input.dish_id)?;
        self.require_ingredient(input.ingredient_id)?;

        let line = DishLine::create(DishLineId::generate(), input);
        self.lines.save(line.clone())?;
        debug!(
            line_id = %line.id_typed(),
            dish_id = %line.dish_id(),
            ingredient_id = %line.ingredient_id(),
            "dish line added"
        );
        Ok(line)
    }

    /// Recipe lines of a dish, in the order they were added.
    pub fn dish_lines(&self, dish_id: DishId) -> Result<Vec<DishLine>, KitchenError> {
        Ok(self
            .lines
            .list()?
            .into_iter()
            .filter(|line| line.dish_id() == dish_id)
            .collect())
    }

    pub fn remove_dish_line(&self, id: DishLineId) -> Result<DishLine, KitchenError> {
        let removed = self
            .lines
            .remove(&id)?
            .ok_or_else(|| DomainError::not_found(format!("dish line {id}")))?;
        Ok(removed)
    }

    // --- sales -----------------------------------------------------------

    /// Record a sale and deduct the consumed ingredients from stock.
    ///
    /// `quantity_sold` is not validated and stock is not clamped: zero units
    /// change nothing, negative units put stock back.
    #[instrument(
        skip(self, input),
        fields(dish_id = %input.dish_id, quantity_sold = input.quantity_sold)
    )]
    pub fn create_sale(&self, input: NewSale) -> Result<Sale, KitchenError> {
        let dish = self.require_dish(input.dish_id)?;

        let sale = Sale::create(SaleId::generate(), input, self.clock.today());
        self.sales.save(sale.clone())?;

        let lines = self.recipe_of(&dish)?;
        let plan = plan_deductions(&lines, sale.quantity_sold());
        self.apply_deductions(&plan)?;

        info!(
            sale_id = %sale.id_typed(),
            dish = dish.name(),
            sale_date = %sale.sale_date(),
            deductions = plan.len(),
            "sale recorded"
        );
        Ok(sale)
    }

    pub fn sale(&self, id: SaleId) -> Result<Option<Sale>, KitchenError> {
        Ok(self.sales.get(&id)?)
    }

    pub fn sales(&self) -> Result<Vec<Sale>, KitchenError> {
        Ok(self.sales.list()?)
    }

    /// Subtract each planned amount from its ingredient, one load/save per deduction.
    ///
    /// Stops at the first failure without undoing earlier deductions.
    pub fn apply_deductions(&self, plan: &[StockDeduction]) -> Result<(), KitchenError> {
        for deduction in plan {
            let mut ingredient = self.require_ingredient(deduction.ingredient_id)?;
            let was_below = ingredient.is_below_minimum();

            ingredient.deduct(deduction.amount);
            debug!(
                ingredient_id = %deduction.ingredient_id,
                line_id = %deduction.line_id,
                amount = deduction.amount.value(),
                remaining = ingredient.quantity_available().value(),
                "stock deducted"
            );

            if !was_below && ingredient.is_below_minimum() {
                warn!(
                    ingredient_id = %deduction.ingredient_id,
                    name = ingredient.name(),
                    remaining = ingredient.quantity_available().value(),
                    minimum = ingredient.minimum_quantity().value(),
                    "ingredient below minimum quantity"
                );
            }

            self.ingredients.save(ingredient)?;
        }
        Ok(())
    }

    // --- helpers ---------------------------------------------------------

    fn require_ingredient(&self, id: IngredientId) -> Result<Ingredient, KitchenError> {
        self.ingredients
            .get(&id)?
            .ok_or_else(|| DomainError::not_found(format!("ingredient {id}")).into())
    }

    fn require_dish(&self, id: DishId) -> Result<Dish, KitchenError> {
        self.dishes
            .get(&id)?
            .ok_or_else(|| DomainError::not_found(format!("dish {id}")).into())
    }

    fn recipe_of(&self, dish: &Dish) -> Result<Vec<DishLine>, KitchenError> {
        Ok(self
            .lines
            .list()?
            .into_iter()
            .filter(|line| dish.owns(line))
            .collect())
    }
}
