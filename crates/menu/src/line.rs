use serde::{Deserialize, Serialize};

use larder_core::{Entity, Kilograms};
use larder_ingredients::IngredientId;

use crate::dish::DishId;

larder_core::record_id!(
    /// Dish-ingredient line identifier.
    DishLineId
);

/// Input: attach an ingredient to a dish's recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDishLine {
    pub dish_id: DishId,
    pub ingredient_id: IngredientId,
    #[serde(default)]
    pub quantity_required: Kilograms,
}

/// Record: how much of one ingredient a single unit of a dish consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishLine {
    id: DishLineId,
    dish_id: DishId,
    ingredient_id: IngredientId,
    quantity_required: Kilograms,
}

impl DishLine {
    /// Build a line record. Reference checks (dish and ingredient exist) are the
    /// caller's job since they need a store.
    pub fn create(id: DishLineId, input: NewDishLine) -> Self {
        Self {
            id,
            dish_id: input.dish_id,
            ingredient_id: input.ingredient_id,
            quantity_required: input.quantity_required,
        }
    }

    pub fn id_typed(&self) -> DishLineId {
        self.id
    }

    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    pub fn ingredient_id(&self) -> IngredientId {
        self.ingredient_id
    }

    pub fn quantity_required(&self) -> Kilograms {
        self.quantity_required
    }
}

impl Entity for DishLine {
    type Id = DishLineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::{Dish, NewDish};

    #[test]
    fn line_belongs_to_its_dish_only() {
        let pizza = Dish::create(DishId::generate(), &NewDish::new("Pizza")).unwrap();
        let soup = Dish::create(DishId::generate(), &NewDish::new("Soup")).unwrap();

        let line = DishLine::create(
            DishLineId::generate(),
            NewDishLine {
                dish_id: pizza.id_typed(),
                ingredient_id: IngredientId::generate(),
                quantity_required: Kilograms::new(0.2),
            },
        );

        assert!(pizza.owns(&line));
        assert!(!soup.owns(&line));
    }

    #[test]
    fn missing_ingredient_reference_fails_to_deserialize() {
        let raw = format!(r#"{{"dish_id":"{}","quantity_required":0.1}}"#, DishId::generate());
        let parsed: Result<NewDishLine, _> = serde_json::from_str(&raw);
        assert!(parsed.is_err());
    }
}
