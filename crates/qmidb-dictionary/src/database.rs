//! Loading the five dictionary tables from a directory.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::records::{EntityRecord, EnumEntryRecord, EnumRecord, FieldRecord, Record, StructFragment};
use crate::schema::Schema;
use crate::tables::Table;
use crate::{Error, Result, SchemaBuilder};

const LOG_TARGET: &str = "dictionary";

/// Row counts of the loaded tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub entities: usize,
    pub enums: usize,
    pub entries: usize,
    pub fields: usize,
    pub structs: usize,
}

impl fmt::Display for TableCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded: {} entities, {} enums ({} entries), {} fields, {} structs",
            self.entities, self.enums, self.entries, self.fields, self.structs
        )
    }
}

/// The raw data dictionary: one parsed table per input file.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub entities: Table<EntityRecord>,
    pub entries: Table<EnumEntryRecord>,
    pub enums: Table<EnumRecord>,
    pub fields: Table<FieldRecord>,
    pub structs: Table<StructFragment>,
}

impl Dictionary {
    /// Load `Entity.txt`, `EnumEntry.txt`, `Enum.txt`, `Field.txt` and
    /// `Struct.txt` from `dir`.
    ///
    /// Fails if any of the files cannot be opened or read.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let start = Instant::now();

        let dictionary = Self {
            entities: load_table(dir)?,
            entries: load_table(dir)?,
            enums: load_table(dir)?,
            fields: load_table(dir)?,
            structs: load_table(dir)?,
        };

        log::info!(
            target: LOG_TARGET,
            "Loaded dictionary from {} in {:.3}s",
            dir.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(dictionary)
    }

    /// Row counts, as reported in the summary line.
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            entities: self.entities.len(),
            enums: self.enums.len(),
            entries: self.entries.len(),
            fields: self.fields.len(),
            structs: self.structs.len(),
        }
    }

    /// Assemble the schema, consuming the raw tables.
    ///
    /// Tables are applied as enums, entries, fields, structs, entities, each
    /// in file line order. Entries without an enum are dropped and reported
    /// in [`Schema::diagnostics`].
    pub fn into_schema(self) -> Schema {
        let mut builder = SchemaBuilder::new();

        for record in self.enums.into_rows() {
            builder.add_enum(record);
        }
        for record in self.entries.into_rows() {
            builder.add_entry_lenient(record);
        }
        for record in self.fields.into_rows() {
            builder.add_field(record);
        }
        for record in self.structs.into_rows() {
            builder.add_struct(record);
        }
        for record in self.entities.into_rows() {
            builder.add_entity(record);
        }

        builder.build()
    }
}

fn load_table<R: Record>(dir: &Path) -> Result<Table<R>> {
    let path = dir.join(R::FILE_NAME);
    log::debug!(target: LOG_TARGET, "Opening table '{}'", path.display());

    let file = File::open(&path).map_err(|source| Error::Table {
        path: path.clone(),
        source,
    })?;
    Table::read_from(BufReader::new(file)).map_err(|e| match e {
        Error::Io(source) => Error::Table { path, source },
        other => other,
    })
}
