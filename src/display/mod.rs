//! Display formatting for terminal output

pub mod credential;

pub use credential::{format_grouped, format_table};
