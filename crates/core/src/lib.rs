//! `foodtrack-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, identity traits and the input validation rules the front
//! end applies before it touches the inventory.

pub mod entity;
pub mod error;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;

/// User-facing calendar date format (`DD/MM/YYYY`).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Storage calendar date format (ISO-8601, `YYYY-MM-DD`).
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";
