//! Typed rows of the five dictionary tables.

mod entity;
mod enumeration;
mod field;
mod fragment;
mod key;

pub use entity::EntityRecord;
pub use enumeration::{EnumEntryRecord, EnumRecord};
pub use field::FieldRecord;
pub use fragment::StructFragment;
pub use key::PairKey;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use qmidb_common::{LineReader, Result};

/// A row type parsed from one line of a dictionary table.
pub trait Record: Sized {
    /// Unique key derived from the row's columns.
    type Key: Clone + Eq + Hash + Display + Debug;

    /// File the table is loaded from.
    const FILE_NAME: &'static str;

    /// Lines with fewer columns than this are skipped.
    const MIN_COLUMNS: usize;

    /// Read the row from the line's columns.
    ///
    /// The reader is guaranteed to hold at least [`Self::MIN_COLUMNS`] columns.
    fn read(reader: &mut LineReader<'_>) -> Result<Self>;

    /// Get the row's unique key.
    fn key(&self) -> Self::Key;

    /// Get the row's human name, used for the by-name index.
    fn name(&self) -> &str;

    /// Parse a raw line.
    ///
    /// Returns `Ok(None)` when the line is too short to hold a row.
    fn parse_line(line: &str) -> Result<Option<Self>> {
        let mut reader = LineReader::new(line);
        if reader.len() < Self::MIN_COLUMNS {
            return Ok(None);
        }
        Self::read(&mut reader).map(Some)
    }
}
