use core::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use foodtrack_core::{DISPLAY_DATE_FORMAT, Entity, STORAGE_DATE_FORMAT, ValueObject};

/// Identity of an inventory record: case-folded name + exact expiry date.
///
/// Quantity is deliberately absent; two lots of the same food expiring on the
/// same day are one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    name: String,
    expiry: NaiveDate,
}

impl ItemKey {
    pub fn new(name: &str, expiry: NaiveDate) -> Self {
        Self {
            name: name.to_lowercase(),
            expiry,
        }
    }

    /// Case-folded name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }
}

impl ValueObject for ItemKey {}

/// Case-insensitive name comparison used by every name-based lookup.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Failure to decode one stored line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected 3 comma-separated fields, found {found}")]
    MissingFields { found: usize },

    #[error("invalid quantity {value:?}: {reason}")]
    InvalidQuantity { value: String, reason: String },

    #[error("invalid expiry date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },
}

/// One perishable inventory record.
///
/// Equality (`==`) is structural. Use [`FoodItem::key`] or
/// [`FoodItem::same_record`] for record identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    name: String,
    quantity: i64,
    expiry: NaiveDate,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, quantity: i64, expiry: NaiveDate) -> Self {
        Self {
            name: name.into(),
            quantity,
            expiry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.name, self.expiry)
    }

    /// Same name (ignoring case) and same expiry date.
    pub fn same_record(&self, other: &FoodItem) -> bool {
        self.expiry == other.expiry && names_match(&self.name, &other.name)
    }

    /// Expired or expiring today.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry <= today
    }

    /// `<name> | qty: <quantity> | expiry: <DD/MM/YYYY>`.
    pub fn format_display(&self) -> String {
        self.to_string()
    }

    /// Storage line `<name>,<quantity>,<YYYY-MM-DD>`.
    ///
    /// Commas are stripped from the name; there is no quoting scheme, so a name
    /// containing commas does not survive a round trip unchanged.
    pub fn encode(&self) -> String {
        format!(
            "{},{},{}",
            self.name.replace(',', ""),
            self.quantity,
            self.expiry.format(STORAGE_DATE_FORMAT)
        )
    }

    /// Parse a storage line.
    ///
    /// Only the first two commas split fields: anything after the second comma
    /// is the date field, so a stray comma there fails date parsing.
    pub fn decode(line: &str) -> Result<Self, DecodeError> {
        let mut parts = line.splitn(3, ',');
        let (Some(name), Some(quantity), Some(expiry)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DecodeError::MissingFields {
                found: line.splitn(3, ',').count(),
            });
        };

        let quantity = quantity
            .parse::<i64>()
            .map_err(|e| DecodeError::InvalidQuantity {
                value: quantity.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(name, quantity, parse_iso_date(expiry)?))
    }

    pub(crate) fn add_quantity(&mut self, delta: i64) {
        self.quantity = self.quantity.saturating_add(delta);
    }
}

impl Entity for FoodItem {
    type Id = ItemKey;

    fn id(&self) -> ItemKey {
        self.key()
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | qty: {} | expiry: {}",
            self.name,
            self.quantity,
            self.expiry.format(DISPLAY_DATE_FORMAT)
        )
    }
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(value, STORAGE_DATE_FORMAT).map_err(|e| DecodeError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
