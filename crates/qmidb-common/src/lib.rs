//! Common utilities for qmidb.
//!
//! This crate provides the low-level pieces shared by the dictionary crates:
//!
//! - [`LineReader`] - Cursor over the `^`-separated columns of one table line
//! - [`number`] - Decimal and prefix-detected integer parsing

mod error;
mod reader;

pub mod number;

pub use error::{Error, Result};
pub use reader::{split_columns, LineReader, SEPARATOR};
