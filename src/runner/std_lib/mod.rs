//! Built-in commands and bundled plugin commands.
//!
//! Built-ins (`add`, `sub`, `mul`, `div`, `square`, `menu`, `history`,
//! `clear`, `delhis`) are registered directly at startup. Bundled plugin
//! commands (`GreetCommand`, `MeanCommand`) are only placed in the plugin
//! catalog; they become commands when a plugin unit exports them.

pub mod core;
pub mod arithmetic;
pub mod history;
pub mod menu;
pub mod greet;
pub mod statistics;

pub use self::core::{register_bundled_symbols, register_core_commands};
