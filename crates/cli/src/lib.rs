//! `foodtrack` front end: configuration, clock and the interactive menu.
//!
//! The menu validates every input before calling the store and never touches
//! the backing file itself.

pub mod clock;
pub mod config;
pub mod menu;

pub use clock::Clock;
pub use config::{Args, Config};
pub use menu::Menu;
