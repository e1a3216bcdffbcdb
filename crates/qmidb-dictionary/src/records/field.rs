//! Rows of `Field.txt`.

use qmidb_common::{LineReader, Result};

use super::Record;
use crate::types::FieldType;

/// A leaf scalar or string type descriptor.
///
/// Columns: `id ^ name ^ size ^ type ^ typeval ^ hex [^ descid [^ internal]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub id: i64,
    pub name: String,
    pub size: i64,
    /// Raw base type code, see [`FieldType`].
    pub base_type: i64,
    pub type_value: i64,
    pub hex: bool,
    pub desc_id: Option<i64>,
    /// Defaults to `false` when the column is absent.
    pub internal: bool,
}

impl FieldRecord {
    /// Get the base type, or `None` when the code is out of range.
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_raw(self.base_type)
    }
}

impl Record for FieldRecord {
    type Key = i64;

    const FILE_NAME: &'static str = "Field.txt";
    const MIN_COLUMNS: usize = 6;

    fn read(reader: &mut LineReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.read_i64()?,
            name: reader.read_str()?.replace('"', ""),
            size: reader.read_i64()?,
            base_type: reader.read_i64()?,
            type_value: reader.read_i64()?,
            hex: reader.read_bool()?,
            desc_id: reader.read_optional_i64()?,
            internal: reader.read_optional_bool()?.unwrap_or(false),
        })
    }

    fn key(&self) -> i64 {
        self.id
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
        let f = FieldRecord::parse_line(r#"10^"bar"^1^2^0^0"#).unwrap().unwrap();
        assert_eq!(f.id, 10);
        assert_eq!(f.name, "bar");
        assert_eq!(f.field_type(), Some(FieldType::UInt8));
        assert!(!f.hex);
        assert_eq!(f.desc_id, None);
        assert!(!f.internal);
    }

    #[test]
    fn test_parse_tail() {
        let f = FieldRecord::parse_line(r#"11^"Mode"^32^6^0^1^4001^1"#).unwrap().unwrap();
        assert!(f.hex);
        assert_eq!(f.desc_id, Some(4001));
        assert!(f.internal);
    }

    #[test]
    fn test_out_of_range_type_still_parses() {
        let f = FieldRecord::parse_line("12^x^8^40^0^0").unwrap().unwrap();
        assert_eq!(f.base_type, 40);
        assert_eq!(f.field_type(), None);
    }
}
