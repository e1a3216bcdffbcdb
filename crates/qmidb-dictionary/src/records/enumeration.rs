//! Rows of `Enum.txt` and `EnumEntry.txt`.

use qmidb_common::{LineReader, Result};

use super::{PairKey, Record};

/// An enum declaration. Its values arrive separately as [`EnumEntryRecord`]s.
///
/// Columns: `id ^ name ^ descid ^ internal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRecord {
    pub id: i64,
    pub name: String,
    pub desc_id: i64,
    pub internal: bool,
}

impl Record for EnumRecord {
    type Key = i64;

    const FILE_NAME: &'static str = "Enum.txt";
    const MIN_COLUMNS: usize = 4;

    fn read(reader: &mut LineReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.read_i64()?,
            name: reader.read_str()?.replace('"', ""),
            desc_id: reader.read_i64()?,
            internal: reader.read_bool()?,
        })
    }

    fn key(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One named value of an enum.
///
/// Columns: `id ^ value ^ name [^ descid]`. The value may be hex (`0x..`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntryRecord {
    /// Id of the owning enum.
    pub id: i64,
    pub value: i64,
    pub name: String,
    pub desc_id: Option<i64>,
}

impl Record for EnumEntryRecord {
    type Key = PairKey;

    const FILE_NAME: &'static str = "EnumEntry.txt";
    const MIN_COLUMNS: usize = 3;

    fn read(reader: &mut LineReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.read_i64()?,
            value: reader.read_i64_auto()?,
            name: reader.read_str()?.replace('"', ""),
            desc_id: reader.read_optional_i64()?,
        })
    }

    fn key(&self) -> PairKey {
        PairKey::new(self.id, self.value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
