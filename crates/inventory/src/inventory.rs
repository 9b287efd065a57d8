//! In-memory inventory collection.
//!
//! Pure domain logic: merge-on-add, name/identity removal, first-match update
//! and the expiry-ordered queries. No I/O happens here; persistence wraps this
//! type in `foodtrack-infra`.

use chrono::{Days, NaiveDate};

use crate::item::{FoodItem, names_match};

/// What [`Inventory::add`] did with the incoming item.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// An existing record with the same identity absorbed the quantity.
    Merged { quantity: i64 },
    /// The item was appended as a new record.
    Inserted,
}

/// Collection of food items, at most one per identity (see [`Inventory::update`]
/// for the one way that can be violated).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<FoodItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in collection (insertion) order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add stock, merging into an existing record with the same identity.
    ///
    /// The existing record keeps the casing it was first stored with.
    pub fn add(&mut self, item: FoodItem) -> AddOutcome {
        match self.items.iter_mut().find(|existing| existing.same_record(&item)) {
            Some(existing) => {
                existing.add_quantity(item.quantity());
                AddOutcome::Merged {
                    quantity: existing.quantity(),
                }
            }
            None => {
                self.items.push(item);
                AddOutcome::Inserted
            }
        }
    }

    /// Append records as read from storage, without merging.
    pub fn extend_loaded(&mut self, items: impl IntoIterator<Item = FoodItem>) {
        self.items.extend(items);
    }

    /// Remove every record with this name, whatever its expiry.
    ///
    /// Returns `true` if at least one record was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !names_match(item.name(), name));
        self.items.len() != before
    }

    /// Remove the record with this name and exact expiry.
    pub fn remove_specific(&mut self, name: &str, expiry: NaiveDate) -> bool {
        match self
            .items
            .iter()
            .position(|item| item.expiry() == expiry && names_match(item.name(), name))
        {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace quantity and expiry of the first record (collection order) with
    /// this name.
    ///
    /// Later records sharing the name are untouched, and the result is not
    /// re-merged: if `expiry` collides with another record of the same name the
    /// collection ends up with two records of one identity.
    pub fn update(&mut self, name: &str, quantity: i64, expiry: NaiveDate) -> bool {
        let Some(idx) = self
            .items
            .iter()
            .position(|item| names_match(item.name(), name))
        else {
            return false;
        };

        let stored_name = self.items[idx].name().to_string();
        self.items[idx] = FoodItem::new(stored_name, quantity, expiry);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All records, soonest expiry first.
    pub fn view_all(&self) -> Vec<FoodItem> {
        self.sorted_where(|_| true)
    }

    /// Records whose name contains `keyword`, ignoring case.
    pub fn search_by_name(&self, keyword: &str) -> Vec<FoodItem> {
        let keyword = keyword.to_lowercase();
        self.sorted_where(|item| item.name().to_lowercase().contains(&keyword))
    }

    /// Records expiring on or before `today`.
    pub fn expired(&self, today: NaiveDate) -> Vec<FoodItem> {
        self.sorted_where(|item| item.is_expired(today))
    }

    /// Records expiring on or before `today + days`.
    ///
    /// A negative `days` moves the limit into the past. The limit saturates at
    /// the representable calendar range.
    pub fn near_expiry(&self, today: NaiveDate, days: i64) -> Vec<FoodItem> {
        let limit = near_expiry_limit(today, days);
        self.sorted_where(|item| item.expiry() <= limit)
    }

    /// Filtered clone, stably sorted by expiry ascending.
    fn sorted_where(&self, keep: impl Fn(&FoodItem) -> bool) -> Vec<FoodItem> {
        let mut out: Vec<FoodItem> = self.items.iter().filter(|i| keep(i)).cloned().collect();
        out.sort_by_key(FoodItem::expiry);
        out
    }
}

/// Last expiry date that still counts as "near" for a `days` threshold.
pub fn near_expiry_limit(today: NaiveDate, days: i64) -> NaiveDate {
    let offset = Days::new(days.unsigned_abs());
    let limit = if days >= 0 {
        today.checked_add_days(offset)
    } else {
        today.checked_sub_days(offset)
    };
    limit.unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}
