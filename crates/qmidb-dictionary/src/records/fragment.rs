//! Rows of `Struct.txt`.

use qmidb_common::{LineReader, Result};

use super::{PairKey, Record};
use crate::types::FragmentTag;

/// One member contributed to a composite struct.
///
/// Fragments sharing `id` form one struct; `order` places the member.
/// Columns: `id ^ order ^ type ^ value ^ name ^ offset ^ modtype ^ modval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructFragment {
    pub id: i64,
    pub order: i64,
    /// Raw fragment tag, see [`FragmentTag`].
    pub tag: i64,
    /// Field id, struct id or opaque value depending on `tag`.
    pub value: i64,
    pub name: String,
    pub offset: i64,
    pub mod_type: i64,
    pub mod_value: String,
}

impl StructFragment {
    pub fn fragment_tag(&self) -> FragmentTag {
        FragmentTag::from_raw(self.tag)
    }
}

impl Record for StructFragment {
    type Key = PairKey;

    const FILE_NAME: &'static str = "Struct.txt";
    const MIN_COLUMNS: usize = 8;

    fn read(reader: &mut LineReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.read_i64()?,
            order: reader.read_i64()?,
            tag: reader.read_i64()?,
            value: reader.read_i64()?,
            name: reader.read_str()?.replace('"', ""),
            offset: reader.read_i64()?,
            mod_type: reader.read_i64()?,
            mod_value: reader.read_str()?.replace('"', ""),
        })
    }

    fn key(&self) -> PairKey {
        PairKey::new(self.id, self.order)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
