//! Interactive text menu.
//!
//! Reads one command per prompt from any `BufRead`, writes to any `Write`, so
//! sessions can be scripted in tests. End of input behaves like "Exit".

use std::io::{self, BufRead, Write};

use foodtrack_core::validation::{
    format_display_date, parse_days, parse_display_date, parse_positive_quantity, parse_quantity,
    validate_keyword, validate_name,
};
use foodtrack_core::DomainError;
use foodtrack_infra::InventoryStore;
use foodtrack_inventory::FoodItem;

use crate::clock::Clock;
use crate::config::Config;

const MENU: &str = "\
==== Menu ====
1. Add Food Item
2. View All Items
3. Check Expired Items (expired or expiring today)
4. Remove Item (by name)
5. Update Item (by name)
6. Search Item (by name)
7. Show Near-expiry Items (next N days)
8. Clear All Data
9. Exit";

/// Whether the loop keeps going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W> {
    store: &'a InventoryStore,
    clock: Clock,
    near_expiry_days: i64,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a InventoryStore, config: &Config, input: R, output: W) -> Self {
        Self {
            store,
            clock: config.clock,
            near_expiry_days: config.near_expiry_days,
            input,
            output,
        }
    }

    /// Give back the output sink (tests inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until "Exit" or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "==== Food Waste Reduction Tracker ====")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_item()?,
                "2" => self.view_all()?,
                "3" => self.check_expired()?,
                "4" => self.remove_item()?,
                "5" => self.update_item()?,
                "6" => self.search()?,
                "7" => self.near_expiry()?,
                "8" => self.clear_data()?,
                "9" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a number from the menu.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "Exiting. Goodbye!")?;
        self.output.flush()
    }

    /// Print `label`, read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt and validate. `Ok(Err(flow))` stops the current command: input
    /// ended (`Flow::Exit`) or validation failed and was reported
    /// (`Flow::Continue`).
    fn ask<T>(
        &mut self,
        label: &str,
        parse: impl FnOnce(&str) -> Result<T, DomainError>,
    ) -> io::Result<Result<T, Flow>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(Err(Flow::Exit));
        };
        match parse(&raw) {
            Ok(value) => Ok(Ok(value)),
            Err(err) => {
                tracing::debug!(field = err.field(), error = %err, "rejected input");
                writeln!(self.output, "Invalid input: {err}.")?;
                Ok(Err(Flow::Continue))
            }
        }
    }

    fn print_items<'i>(
        &mut self,
        heading: &str,
        items: impl IntoIterator<Item = &'i FoodItem>,
    ) -> io::Result<()> {
        writeln!(self.output, "---- {heading} ----")?;
        for item in items {
            writeln!(self.output, "{item}")?;
        }
        Ok(())
    }

    fn add_item(&mut self) -> io::Result<Flow> {
        let name = match self.ask("Enter food name: ", validate_name)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };
        let quantity = match self.ask("Enter quantity (integer): ", parse_positive_quantity)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };
        let expiry = match self.ask("Enter expiry date (DD/MM/YYYY): ", parse_display_date)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };

        self.store.add(FoodItem::new(name, quantity, expiry));
        writeln!(self.output, "Food item added successfully!")?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        let all = self.store.view_all();
        if all.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "---- Inventory ----")?;
        for (idx, item) in all.iter().enumerate() {
            writeln!(self.output, "{}. {item}", idx + 1)?;
        }
        Ok(Flow::Continue)
    }

    fn check_expired(&mut self) -> io::Result<Flow> {
        let today = self.clock.today();
        let expired = self.store.get_expired(today);
        if expired.is_empty() {
            writeln!(self.output, "No expired or expiring items today.")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "---- Expired / Expiring Today ----")?;
        for item in &expired {
            writeln!(self.output, "{item} [EXPIRED]")?;
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> io::Result<Flow> {
        let name = match self.ask("Enter name to remove (exact name): ", validate_name)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };
        let expiry = match self.ask(
            "Only remove the lot expiring on (DD/MM/YYYY, blank for all): ",
            |raw| match raw {
                "" => Ok(None),
                date => parse_display_date(date).map(Some),
            },
        )? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };

        let removed = match expiry {
            None => self.store.remove(&name),
            Some(date) => self.store.remove_specific(&name, date),
        };
        match (removed, expiry) {
            (true, None) => writeln!(self.output, "Items with name '{name}' removed.")?,
            (true, Some(date)) => writeln!(
                self.output,
                "Item '{name}' expiring {} removed.",
                format_display_date(date)
            )?,
            (false, _) => writeln!(self.output, "No item found with that name.")?,
        }
        Ok(Flow::Continue)
    }

    fn update_item(&mut self) -> io::Result<Flow> {
        let name = match self.ask("Enter the name of the item to update: ", validate_name)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };
        let quantity = match self.ask("Enter new quantity (integer): ", parse_quantity)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };
        let expiry = match self.ask("Enter new expiry date (DD/MM/YYYY): ", parse_display_date)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };

        if self.store.update(&name, quantity, expiry) {
            writeln!(self.output, "Item updated successfully.")?;
        } else {
            writeln!(self.output, "No item found with that name to update.")?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let keyword = match self.ask("Enter search keyword: ", validate_keyword)? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };
        let found = self.store.search_by_name(&keyword);
        if found.is_empty() {
            writeln!(self.output, "No items match the keyword.")?;
            return Ok(Flow::Continue);
        }
        self.print_items("Search Results", &found)?;
        Ok(Flow::Continue)
    }

    fn near_expiry(&mut self) -> io::Result<Flow> {
        let default_days = self.near_expiry_days;
        let label = format!("Show items expiring in how many days? (blank for {default_days}): ");
        let days = match self.ask(&label, |raw| {
            if raw.is_empty() {
                Ok(default_days)
            } else {
                parse_days(raw)
            }
        })? {
            Ok(v) => v,
            Err(flow) => return Ok(flow),
        };

        let near = self.store.get_near_expiry(self.clock.today(), days);
        if near.is_empty() {
            writeln!(self.output, "No items expiring within {days} days.")?;
            return Ok(Flow::Continue);
        }
        self.print_items("Near-expiry Items", &near)?;
        Ok(Flow::Continue)
    }

    fn clear_data(&mut self) -> io::Result<Flow> {
        let Some(confirm) =
            self.prompt("Are you sure you want to clear all data? Type 'yes' to confirm: ")?
        else {
            return Ok(Flow::Exit);
        };
        if confirm.eq_ignore_ascii_case("yes") {
            self.store.clear_all();
            writeln!(self.output, "All data cleared.")?;
        } else {
            writeln!(self.output, "Cancelled.")?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> Config {
        Config {
            data_file: None,
            near_expiry_days: 3,
            clock: Clock::Fixed(date(2024, 6, 10)),
            ..Config::default()
        }
    }

    fn session(store: &InventoryStore, script: &str) -> String {
        let mut menu = Menu::new(store, &config(), Cursor::new(script.to_string()), Vec::new());
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn add_then_view_lists_sorted_numbered_items() {
        let store = InventoryStore::in_memory();
        let out = session(
            &store,
            "1\nYoghurt\n2\n15/06/2024\n1\nBread\n1\n11/06/2024\n2\n9\n",
        );

        assert!(out.contains("Food item added successfully!"));
        assert!(out.contains(
            "---- Inventory ----\n1. Bread | qty: 1 | expiry: 11/06/2024\n2. Yoghurt | qty: 2 | expiry: 15/06/2024\n"
        ));
        assert!(out.ends_with("Exiting. Goodbye!\n"));
    }

    #[test]
    fn add_merges_case_insensitive_names() {
        let store = InventoryStore::in_memory();
        session(&store, "1\nMilk\n2\n10/06/2024\n1\nmilk\n3\n10/06/2024\n9\n");
        assert_eq!(store.view_all(), vec![FoodItem::new("Milk", 5, date(2024, 6, 10))]);
    }

    #[test]
    fn invalid_input_never_reaches_the_store() {
        let store = InventoryStore::in_memory();
        let out = session(
            &store,
            "1\n   \n1\nMilk\n0\n1\nMilk\nlots\n1\nMilk\n2\n2024-06-10\n9\n",
        );

        assert!(out.contains("Invalid input: name cannot be empty."));
        assert!(out.contains("Invalid input: quantity must be positive."));
        assert!(out.contains("Invalid input: invalid quantity:"));
        assert!(out.contains("Invalid input: invalid expiry date: use DD/MM/YYYY."));
        assert!(store.is_empty());
    }

    #[test]
    fn expired_view_tags_items() {
        let store = InventoryStore::in_memory();
        store.add(FoodItem::new("Milk", 1, date(2024, 6, 10)));
        store.add(FoodItem::new("Bread", 1, date(2024, 6, 11)));

        let out = session(&store, "3\n9\n");
        assert!(out.contains("Milk | qty: 1 | expiry: 10/06/2024 [EXPIRED]"));
        assert!(!out.contains("Bread |"));
    }

    #[test]
    fn empty_views_say_so() {
        let store = InventoryStore::in_memory();
        let out = session(&store, "2\n3\n6\nmilk\n7\n\n9\n");
        assert!(out.contains("Inventory is empty."));
        assert!(out.contains("No expired or expiring items today."));
        assert!(out.contains("No items match the keyword."));
        assert!(out.contains("No items expiring within 3 days."));
    }

    #[test]
    fn remove_by_name_or_by_lot() {
        let store = InventoryStore::in_memory();
        store.add(FoodItem::new("Milk", 1, date(2024, 6, 10)));
        store.add(FoodItem::new("Milk", 2, date(2024, 6, 12)));
        store.add(FoodItem::new("Bread", 1, date(2024, 6, 12)));

        let out = session(&store, "4\nmilk\n12/06/2024\n4\nBread\n\n4\nRice\n\n9\n");
        assert!(out.contains("Item 'milk' expiring 12/06/2024 removed."));
        assert!(out.contains("Items with name 'Bread' removed."));
        assert!(out.contains("No item found with that name."));
        assert_eq!(store.view_all(), vec![FoodItem::new("Milk", 1, date(2024, 6, 10))]);
    }

    #[test]
    fn update_changes_first_match() {
        let store = InventoryStore::in_memory();
        store.add(FoodItem::new("Milk", 1, date(2024, 6, 10)));

        let out = session(&store, "5\nMILK\n4\n20/06/2024\n5\nRice\n1\n20/06/2024\n9\n");
        assert!(out.contains("Item updated successfully."));
        assert!(out.contains("No item found with that name to update."));
        assert_eq!(store.view_all(), vec![FoodItem::new("Milk", 4, date(2024, 6, 20))]);
    }

    #[test]
    fn search_and_near_expiry_print_results() {
        let store = InventoryStore::in_memory();
        store.add(FoodItem::new("Oat Milk", 1, date(2024, 6, 12)));
        store.add(FoodItem::new("Cheese", 1, date(2024, 6, 30)));

        let out = session(&store, "6\nmilk\n7\n5\n7\n30\n9\n");
        assert!(out.contains("---- Search Results ----\nOat Milk | qty: 1 | expiry: 12/06/2024\n"));
        assert!(out.contains(
            "---- Near-expiry Items ----\nOat Milk | qty: 1 | expiry: 12/06/2024\n\n==== Menu"
        ));
        assert!(out.contains(
            "---- Near-expiry Items ----\nOat Milk | qty: 1 | expiry: 12/06/2024\nCheese | qty: 1 | expiry: 30/06/2024\n"
        ));
    }

    #[test]
    fn clear_requires_confirmation() {
        let store = InventoryStore::in_memory();
        store.add(FoodItem::new("Milk", 1, date(2024, 6, 10)));

        let out = session(&store, "8\nno\n");
        assert!(out.contains("Cancelled."));
        assert_eq!(store.len(), 1);

        let out = session(&store, "8\nYES\n9\n");
        assert!(out.contains("All data cleared."));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_choice_and_end_of_input() {
        let store = InventoryStore::in_memory();
        let out = session(&store, "42\n");
        assert!(out.contains("Invalid choice. Please enter a number from the menu."));
        assert!(out.ends_with("Exiting. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_mid_command_exits_without_mutation() {
        let store = InventoryStore::in_memory();
        let out = session(&store, "1\nMilk\n");
        assert!(store.is_empty());
        assert!(out.ends_with("Exiting. Goodbye!\n"));
    }
}
