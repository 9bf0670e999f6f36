use serde::{Deserialize, Serialize};

use larder_core::error::require_name;
use larder_core::{DomainResult, Entity, Kilograms};

larder_core::record_id!(
    /// Ingredient identifier.
    IngredientId
);

/// Input: create an ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    #[serde(default)]
    pub quantity_available: Kilograms,
    #[serde(default)]
    pub minimum_quantity: Kilograms,
}

impl NewIngredient {
    pub fn new(name: impl Into<String>, quantity_available: f64) -> Self {
        Self {
            name: name.into(),
            quantity_available: Kilograms::new(quantity_available),
            minimum_quantity: Kilograms::ZERO,
        }
    }

    pub fn with_minimum(mut self, minimum_quantity: f64) -> Self {
        self.minimum_quantity = Kilograms::new(minimum_quantity);
        self
    }
}

/// Input: partial update of an ingredient. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity_available: Option<Kilograms>,
    #[serde(default)]
    pub minimum_quantity: Option<Kilograms>,
}

/// Record: a stock item tracked by available mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    id: IngredientId,
    name: String,
    quantity_available: Kilograms,
    minimum_quantity: Kilograms,
}

impl Ingredient {
    pub fn create(id: IngredientId, input: NewIngredient) -> DomainResult<Self> {
        let name = require_name("ingredient name", &input.name)?;
        Ok(Self {
            id,
            name,
            quantity_available: input.quantity_available,
            minimum_quantity: input.minimum_quantity,
        })
    }

    pub fn id_typed(&self) -> IngredientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_available(&self) -> Kilograms {
        self.quantity_available
    }

    pub fn minimum_quantity(&self) -> Kilograms {
        self.minimum_quantity
    }

    /// Whether stock sits strictly under the configured minimum threshold.
    pub fn is_below_minimum(&self) -> bool {
        self.quantity_available < self.minimum_quantity
    }

    /// Apply a partial update. Blank names are rejected; quantities are taken as-is.
    pub fn apply_update(&mut self, update: IngredientUpdate) -> DomainResult<()> {
        let name = match update.name {
            Some(name) => Some(require_name("ingredient name", &name)?),
            None => None,
        };

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity_available {
            self.quantity_available = quantity;
        }
        if let Some(minimum) = update.minimum_quantity {
            self.minimum_quantity = minimum;
        }
        Ok(())
    }

    /// Subtract consumed stock.
    ///
    /// Unguarded: a negative `amount` adds stock, and the result may drop below zero.
    pub fn deduct(&mut self, amount: Kilograms) {
        self.quantity_available -= amount;
    }
}

impl Entity for Ingredient {
    type Id = IngredientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::DomainError;

    fn flour(quantity: f64) -> Ingredient {
        Ingredient::create(IngredientId::generate(), NewIngredient::new("Flour", quantity)).unwrap()
    }

    #[test]
    fn create_keeps_quantities_and_trims_name() {
        let id = IngredientId::generate();
        let ingredient = Ingredient::create(
            id,
            NewIngredient::new("  Tomato ", 4.5).with_minimum(1.0),
        )
        .unwrap();

        assert_eq!(ingredient.id_typed(), id);
        assert_eq!(ingredient.name(), "Tomato");
        assert_eq!(ingredient.quantity_available(), Kilograms::new(4.5));
        assert_eq!(ingredient.minimum_quantity(), Kilograms::new(1.0));
    }

    #[test]
    fn create_requires_a_name() {
        let err = Ingredient::create(IngredientId::generate(), NewIngredient::new(" ", 1.0))
            .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("ingredient name cannot be empty") => {}
            _ => panic!("Expected Validation error for blank ingredient name"),
        }
    }

    #[test]
    fn deduct_may_drive_stock_negative() {
        let mut ingredient = flour(1.0);
        ingredient.deduct(Kilograms::new(1.5));
        assert!(ingredient.quantity_available().approx_eq(Kilograms::new(-0.5), 1e-9));
    }

    #[test]
    fn negative_deduction_adds_stock() {
        let mut ingredient = flour(1.0);
        ingredient.deduct(Kilograms::new(-2.0));
        assert!(ingredient.quantity_available().approx_eq(Kilograms::new(3.0), 1e-9));
    }

    #[test]
    fn below_minimum_is_strict() {
        let mut ingredient = Ingredient::create(
            IngredientId::generate(),
            NewIngredient::new("Salt", 2.0).with_minimum(2.0),
        )
        .unwrap();
        assert!(!ingredient.is_below_minimum());

        ingredient.deduct(Kilograms::new(0.5));
        assert!(ingredient.is_below_minimum());
    }

    #[test]
    fn update_changes_only_provided_fields() {
        let mut ingredient = flour(10.0);
        ingredient
            .apply_update(IngredientUpdate {
                minimum_quantity: Some(Kilograms::new(3.0)),
                ..IngredientUpdate::default()
            })
            .unwrap();

        assert_eq!(ingredient.name(), "Flour");
        assert_eq!(ingredient.quantity_available(), Kilograms::new(10.0));
        assert_eq!(ingredient.minimum_quantity(), Kilograms::new(3.0));
    }

    #[test]
    fn update_with_blank_name_leaves_record_untouched() {
        let mut ingredient = flour(10.0);
        let before = ingredient.clone();

        let err = ingredient
            .apply_update(IngredientUpdate {
                name: Some(String::new()),
                quantity_available: Some(Kilograms::new(1.0)),
                ..IngredientUpdate::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(ingredient, before);
    }

    #[test]
    fn new_ingredient_quantities_default_to_zero_when_omitted() {
        let input: NewIngredient = serde_json::from_str(r#"{"name":"Basil"}"#).unwrap();
        assert_eq!(input.quantity_available, Kilograms::ZERO);
        assert_eq!(input.minimum_quantity, Kilograms::ZERO);
    }
}
