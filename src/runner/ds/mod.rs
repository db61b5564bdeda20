//! Data passed across the command boundary: results and failures.

pub mod error;
pub mod value;
