use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::Entity;
use larder_menu::DishId;

larder_core::record_id!(
    /// Sale identifier.
    SaleId
);

/// Input: record a sale.
///
/// `quantity_sold` is not validated: zero and negative counts are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub dish_id: DishId,
    #[serde(default)]
    pub quantity_sold: i64,
    /// Falls back to the creation date when absent.
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
}

impl NewSale {
    pub fn new(dish_id: DishId, quantity_sold: i64) -> Self {
        Self {
            dish_id,
            quantity_sold,
            sale_date: None,
        }
    }

    pub fn on(mut self, sale_date: NaiveDate) -> Self {
        self.sale_date = Some(sale_date);
        self
    }
}

/// Record: dish units sold on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    dish_id: DishId,
    quantity_sold: i64,
    sale_date: NaiveDate,
}

impl Sale {
    /// Build a sale record, defaulting the date to `today`.
    pub fn create(id: SaleId, input: NewSale, today: NaiveDate) -> Self {
        Self {
            id,
            dish_id: input.dish_id,
            quantity_sold: input.quantity_sold,
            sale_date: input.sale_date.unwrap_or(today),
        }
    }

    pub fn id_typed(&self) -> SaleId {
        self.id
    }

    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    pub fn quantity_sold(&self) -> i64 {
        self.quantity_sold
    }

    pub fn sale_date(&self) -> NaiveDate {
        self.sale_date
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sale_date_defaults_to_today() {
        let today = day(2024, 3, 14);
        let sale = Sale::create(SaleId::generate(), NewSale::new(DishId::generate(), 2), today);
        assert_eq!(sale.sale_date(), today);
        assert_eq!(sale.quantity_sold(), 2);
    }

    #[test]
    fn explicit_sale_date_is_kept() {
        let sale = Sale::create(
            SaleId::generate(),
            NewSale::new(DishId::generate(), 1).on(day(2023, 12, 31)),
            day(2024, 1, 2),
        );
        assert_eq!(sale.sale_date(), day(2023, 12, 31));
    }

    #[test]
    fn negative_quantity_is_accepted() {
        let sale = Sale::create(
            SaleId::generate(),
            NewSale::new(DishId::generate(), -3),
            day(2024, 1, 1),
        );
        assert_eq!(sale.quantity_sold(), -3);
    }

    #[test]
    fn new_sale_deserializes_without_date() {
        let dish_id = DishId::generate();
        let raw = format!(r#"{{"dish_id":"{dish_id}","quantity_sold":4}}"#);
        let input: NewSale = serde_json::from_str(&raw).unwrap();
        assert_eq!(input, NewSale::new(dish_id, 4));
    }

    #[test]
    fn new_sale_requires_a_dish() {
        let parsed: Result<NewSale, _> = serde_json::from_str(r#"{"quantity_sold":4}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn sale_date_serializes_as_iso_date() {
        let sale = Sale::create(
            SaleId::generate(),
            NewSale::new(DishId::generate(), 1),
            day(2024, 5, 6),
        );
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["sale_date"], "2024-05-06");
    }
}
