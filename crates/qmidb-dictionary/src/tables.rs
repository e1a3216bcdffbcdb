//! Line-by-line table parsing with unique-id and name indices.

use std::io::BufRead;
use std::time::Instant;

use crate::ordered::{FxHashMap, OrderedMap};
use crate::records::Record;
use crate::Result;

const LOG_TARGET: &str = "tables";

/// One parsed dictionary table.
///
/// Rows are indexed by their unique key, in file line order, and by name.
/// Both indices are last-write-wins: a repeated key replaces the earlier row
/// in place, a repeated name points at the most recent row.
#[derive(Debug, Clone)]
pub struct Table<R: Record> {
    rows: OrderedMap<R::Key, R>,
    by_name: FxHashMap<String, R::Key>,
    skipped: usize,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: OrderedMap::new(),
            by_name: FxHashMap::default(),
            skipped: 0,
        }
    }
}

impl<R: Record> Table<R> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every line from `source`.
    ///
    /// Lines that are too short or hold malformed numbers are skipped. Bytes
    /// that are not valid UTF-8 are replaced with U+FFFD. Only I/O errors
    /// abort.
    pub fn read_from<B: BufRead>(mut source: B) -> Result<Self> {
        let start = Instant::now();
        let mut table = Self::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if source.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            table.push_line(&String::from_utf8_lossy(&buf));
        }
        log::debug!(
            target: LOG_TARGET,
            "Parsed {} rows from {} ({} skipped) in {:.3}s",
            table.len(),
            R::FILE_NAME,
            table.skipped,
            start.elapsed().as_secs_f64()
        );
        Ok(table)
    }

    /// Parse a whole table held in memory.
    pub fn parse_str(text: &str) -> Self {
        let mut table = Self::new();
        for line in text.lines() {
            table.push_line(line);
        }
        table
    }

    /// Parse one line and insert the row. Returns whether a row was accepted.
    pub fn push_line(&mut self, line: &str) -> bool {
        match R::parse_line(line) {
            Ok(Some(record)) => {
                self.insert(record);
                true
            }
            Ok(None) => {
                log::debug!(target: LOG_TARGET, "{}: skipping short line {:?}", R::FILE_NAME, line);
                self.skipped += 1;
                false
            }
            Err(e) => {
                log::debug!(target: LOG_TARGET, "{}: skipping line {:?}: {}", R::FILE_NAME, line, e);
                self.skipped += 1;
                false
            }
        }
    }

    /// Insert a row, returning the row it replaced.
    pub fn insert(&mut self, record: R) -> Option<R> {
        let key = record.key();
        self.by_name.insert(record.name().to_string(), key.clone());
        let replaced = self.rows.insert(key, record);
        if let Some(old) = &replaced {
            log::debug!(target: LOG_TARGET, "{}: row {} replaced", R::FILE_NAME, old.key());
        }
        replaced
    }

    /// Look up a row by its unique key.
    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.rows.get(key)
    }

    /// Look up the most recent row with this name.
    pub fn by_name(&self, name: &str) -> Option<&R> {
        self.by_name.get(name).and_then(|key| self.rows.get(key))
    }

    /// Number of distinct rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of lines that did not yield a row.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Rows in file line order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    /// Consume the table, yielding rows in file line order.
    pub fn into_rows(self) -> impl Iterator<Item = R> {
        self.rows.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EntityRecord, EnumEntryRecord, FieldRecord, PairKey};

    #[test]
    fn test_rows_in_line_order() {
        let table: Table<FieldRecord> = Table::parse_str("3^c^8^2^0^0\n1^a^8^2^0^0\n2^b^8^2^0^0\n");
        let ids: Vec<i64> = table.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_short_lines_not_counted() {
        let table: Table<FieldRecord> = Table::parse_str("1^a^8^2^0^0\n\n2^b\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.skipped(), 2);
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let table: Table<EnumEntryRecord> =
            Table::parse_str("1^0x01^\"first\"\n1^2^\"two\"\n1^1^\"second\"\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&PairKey::new(1, 1)).unwrap().name, "second");
        let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["second", "two"]);
    }

    #[test]
    fn test_by_name_index() {
        let table: Table<EntityRecord> =
            Table::parse_str("1^\"0x01\"^\"Foo\"^5\n1^\"0x02\"^\"Foo\"^6\n1^\"0x03\"^\"Bar\"^7\n");
        assert_eq!(table.by_name("Foo").unwrap().struct_id, 6);
        assert_eq!(table.by_name("Bar").unwrap().unique_id, "1.0x03");
        assert!(table.by_name("Baz").is_none());
    }

    #[test]
    fn test_read_from_reader() {
        let data = b"10^\"bar\"^1^2^0^0\n" as &[u8];
        let table: Table<FieldRecord> = Table::read_from(data).unwrap();
        assert_eq!(table.get(&10).unwrap().name, "bar");
    }

    #[test]
    fn test_read_from_latin1_bytes() {
        let data = b"10^\"b\xe9r\"^1^2^0^0\r\n11^\"ok\"^1^2^0^0\n" as &[u8];
        let table: Table<FieldRecord> = Table::read_from(data).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&10).unwrap().name, "b\u{FFFD}r");
        assert_eq!(table.get(&11).unwrap().name, "ok");
    }

    #[test]
    fn test_stray_quote_keeps_line() {
        let table: Table<FieldRecord> = Table::parse_str("10^Size 3\"^1^2^0^0\n");
        assert_eq!(table.skipped(), 0);
        assert_eq!(table.get(&10).unwrap().name, "Size 3");
    }

    #[test]
    fn test_leading_zero_entry_value_is_octal() {
        let table: Table<EnumEntryRecord> = Table::parse_str("1^010^\"eight\"\n");
        assert_eq!(table.get(&PairKey::new(1, 8)).unwrap().name, "eight");
        assert!(table.get(&PairKey::new(1, 10)).is_none());
    }
}
