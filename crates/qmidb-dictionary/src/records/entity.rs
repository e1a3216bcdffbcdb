//! Rows of `Entity.txt`.

use qmidb_common::{LineReader, Result};

use super::Record;

/// A named protocol entity bound to the struct describing its layout.
///
/// Columns: `type ^ key ^ name ^ struct [^ format [^ internal [^ extformat]]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    /// `type_code.sanitized_key`.
    pub unique_id: String,
    /// Entity type code.
    pub type_code: i64,
    /// Entity key with quotes removed.
    pub key: String,
    /// Human name.
    pub name: String,
    /// Id of the struct describing the wire layout.
    pub struct_id: i64,
    pub format: Option<i64>,
    /// Defaults to `true` when the column is absent.
    pub internal: bool,
    pub ext_format: Option<i64>,
}

impl EntityRecord {
    /// Build the unique id from a type code and a raw key.
    ///
    /// Quotes are dropped and commas become dots, so `"0x01,2"` turns into `0x01.2`.
    pub fn make_unique_id(type_code: i64, key: &str) -> String {
        let key: String = key
            .chars()
            .filter(|&c| c != '"')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        format!("{}.{}", type_code, key)
    }
}

impl Record for EntityRecord {
    type Key = String;

    const FILE_NAME: &'static str = "Entity.txt";
    const MIN_COLUMNS: usize = 4;

    fn read(reader: &mut LineReader<'_>) -> Result<Self> {
        let type_code = reader.read_i64()?;
        let key = reader.read_str()?.replace('"', "");
        let name = reader.read_str()?.replace('"', "");
        let struct_id = reader.read_i64()?;
        let format = reader.read_optional_i64()?;
        let internal = reader.read_optional_bool()?.unwrap_or(true);
        let ext_format = reader.read_optional_i64()?;

        Ok(Self {
            unique_id: Self::make_unique_id(type_code, &key),
            type_code,
            key,
            name,
            struct_id,
            format,
            internal,
            ext_format,
        })
    }

    fn key(&self) -> String {
        self.unique_id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let e = EntityRecord::parse_line(r#"1^"0x01"^"Foo"^5"#).unwrap().unwrap();
        assert_eq!(e.unique_id, "1.0x01");
        assert_eq!(e.key, "0x01");
        assert_eq!(e.name, "Foo");
        assert_eq!(e.struct_id, 5);
        assert_eq!(e.format, None);
        assert!(e.internal);
        assert_eq!(e.ext_format, None);
    }

    #[test]
    fn test_parse_full() {
        let e = EntityRecord::parse_line(r#"33^"32,1"^"Bar Baz"^50021^1^0^7"#)
            .unwrap()
            .unwrap();
        assert_eq!(e.unique_id, "33.32.1");
        assert_eq!(e.format, Some(1));
        assert!(!e.internal);
        assert_eq!(e.ext_format, Some(7));
    }

    #[test]
    fn test_short_line_skipped() {
        assert_eq!(EntityRecord::parse_line(r#"1^"0x01"^"Foo""#).unwrap(), None);
        assert_eq!(EntityRecord::parse_line("").unwrap(), None);
    }

    #[test]
    fn test_bad_number_is_error() {
        assert!(EntityRecord::parse_line(r#"x^"0x01"^"Foo"^5"#).is_err());
    }
}
