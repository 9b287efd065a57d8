//! Inventory domain module.
//!
//! This crate contains the business rules for perishable stock, implemented
//! purely as deterministic domain logic (no IO, no clock, no storage). Every
//! expiry-dependent query takes `today` explicitly.

pub mod inventory;
pub mod item;

pub use inventory::{AddOutcome, Inventory, near_expiry_limit};
pub use item::{DecodeError, FoodItem, ItemKey, names_match};
