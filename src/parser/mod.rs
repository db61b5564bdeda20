mod api;
pub mod ast;

pub use api::{CommandLineParser, Rule};
