//! Sales records and the stock-deduction rule.
//!
//! This crate contains the sale record and the pure planning half of stock
//! deduction: given a dish's recipe lines and a unit count, it computes how
//! much of each ingredient to subtract. Applying the plan to stored
//! ingredients is left to the infrastructure layer.

pub mod deduction;
pub mod sale;

pub use deduction::{StockDeduction, plan_deductions};
pub use sale::{NewSale, Sale, SaleId};
