use serde::{Deserialize, Serialize};

use larder_core::error::require_name;
use larder_core::{DomainResult, Entity, Kilograms};
use larder_ingredients::IngredientId;

use crate::line::NewDishLine;

larder_core::record_id!(
    /// Dish identifier.
    DishId
);

/// A recipe line supplied together with a new dish (the dish id is not known yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient_id: IngredientId,
    /// Mass of the ingredient consumed by one unit of the dish.
    pub quantity_required: Kilograms,
}

impl RecipeLine {
    pub fn new(ingredient_id: IngredientId, quantity_required: f64) -> Self {
        Self {
            ingredient_id,
            quantity_required: Kilograms::new(quantity_required),
        }
    }

    /// Bind this recipe line to its dish.
    pub fn for_dish(&self, dish_id: DishId) -> NewDishLine {
        NewDishLine {
            dish_id,
            ingredient_id: self.ingredient_id,
            quantity_required: self.quantity_required,
        }
    }
}

/// Input: create a dish, optionally with its initial recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDish {
    pub name: String,
    #[serde(default)]
    pub lines: Vec<RecipeLine>,
}

impl NewDish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, ingredient_id: IngredientId, quantity_required: f64) -> Self {
        self.lines.push(RecipeLine::new(ingredient_id, quantity_required));
        self
    }
}

/// Record: a menu item.
///
/// The dish's ingredient lines are separate [`crate::DishLine`] records that
/// point back at it via `dish_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    id: DishId,
    name: String,
}

impl Dish {
    pub fn create(id: DishId, input: &NewDish) -> DomainResult<Self> {
        let name = require_name("dish name", &input.name)?;
        Ok(Self { id, name })
    }

    pub fn id_typed(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) -> DomainResult<()> {
        self.name = require_name("dish name", name)?;
        Ok(())
    }

    /// Whether `line` belongs to this dish's recipe.
    pub fn owns(&self, line: &crate::DishLine) -> bool {
        line.dish_id() == self.id
    }
}

impl Entity for Dish {
    type Id = DishId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::DomainError;

    #[test]
    fn create_dish_trims_name() {
        let id = DishId::generate();
        let dish = Dish::create(id, &NewDish::new(" Pizza ")).unwrap();
        assert_eq!(dish.id_typed(), id);
        assert_eq!(dish.name(), "Pizza");
    }

    #[test]
    fn create_dish_requires_a_name() {
        let err = Dish::create(DishId::generate(), &NewDish::new("")).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("dish name cannot be empty") => {}
            _ => panic!("Expected Validation error for blank dish name"),
        }
    }

    #[test]
    fn rename_rejects_blank_and_keeps_old_name() {
        let mut dish = Dish::create(DishId::generate(), &NewDish::new("Soup")).unwrap();
        assert!(dish.rename("  ").is_err());
        assert_eq!(dish.name(), "Soup");

        dish.rename("Minestrone").unwrap();
        assert_eq!(dish.name(), "Minestrone");
    }

    #[test]
    fn recipe_line_binds_to_dish() {
        let dish_id = DishId::generate();
        let flour = IngredientId::generate();
        let line = RecipeLine::new(flour, 0.2).for_dish(dish_id);

        assert_eq!(line.dish_id, dish_id);
        assert_eq!(line.ingredient_id, flour);
        assert_eq!(line.quantity_required, Kilograms::new(0.2));
    }

    #[test]
    fn new_dish_lines_default_to_empty() {
        let input: NewDish = serde_json::from_str(r#"{"name":"Salad"}"#).unwrap();
        assert!(input.lines.is_empty());
    }
}
