//! Schema assembly from parsed table rows.
//!
//! The builder is the only place the schema is mutated. Rows are applied
//! one at a time; the order of application matters for struct naming, so
//! [`Dictionary::into_schema`](crate::Dictionary::into_schema) always feeds
//! enums, entries, fields, structs and finally entities.
//!
//! # Example
//!
//! ```
//! use qmidb_dictionary::records::{EntityRecord, FieldRecord, Record, StructFragment};
//! use qmidb_dictionary::SchemaBuilder;
//!
//! let mut builder = SchemaBuilder::new();
//! builder.add_field(FieldRecord::parse_line(r#"10^"bar"^1^2^0^0"#)?.unwrap());
//! builder.add_struct(StructFragment::parse_line(r#"5^0^0^10^"bar"^0^0^"""#)?.unwrap());
//! builder.add_entity(EntityRecord::parse_line(r#"1^"0x01"^"Foo"^5"#)?.unwrap());
//!
//! let schema = builder.build();
//! assert_eq!(schema.struct_def(5).unwrap().name, "Foo");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::ordered::OrderedMap;
use crate::records::{EntityRecord, EnumEntryRecord, EnumRecord, FieldRecord, StructFragment};
use crate::schema::{EntityDef, EnumDef, EnumValue, Schema, StructDef, StructMember};
use crate::types::{FieldType, FragmentTag};
use crate::validate::Diagnostic;
use crate::{Error, Result};

const LOG_TARGET: &str = "builder";

/// Builder that turns table rows into a [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    enums: OrderedMap<i64, EnumDef>,
    fields: OrderedMap<i64, FieldRecord>,
    structs: OrderedMap<i64, StructDef>,
    entities: OrderedMap<String, EntityDef>,
    diagnostics: Vec<Diagnostic>,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an enum with no values. A repeated id starts the enum over.
    pub fn add_enum(&mut self, record: EnumRecord) {
        let def = EnumDef {
            id: record.id,
            name: record.name,
            values: Vec::new(),
        };
        if self.enums.insert(record.id, def).is_some() {
            log::debug!(target: LOG_TARGET, "Enum {} redeclared", record.id);
        }
    }

    /// Attach a value to its enum, keeping the values sorted.
    ///
    /// Values with equal numbers stay in the order they were added.
    /// Fails with [`Error::MissingOwner`] when the enum is unknown.
    pub fn add_entry(&mut self, record: EnumEntryRecord) -> Result<()> {
        let Some(def) = self.enums.get_mut(&record.id) else {
            return Err(Error::MissingOwner {
                enum_id: record.id,
                value: record.value,
            });
        };

        let at = def.values.partition_point(|v| v.value <= record.value);
        def.values.insert(
            at,
            EnumValue {
                value: record.value,
                name: record.name,
            },
        );
        Ok(())
    }

    /// Attach a value, recording a diagnostic instead of failing when the
    /// enum is unknown. The orphaned value is dropped.
    pub fn add_entry_lenient(&mut self, record: EnumEntryRecord) {
        let name = record.name.clone();
        if let Err(Error::MissingOwner { enum_id, value }) = self.add_entry(record) {
            log::debug!(target: LOG_TARGET, "Dropping entry {}.{} ({})", enum_id, value, name);
            self.diagnostics.push(Diagnostic::MissingOwner {
                enum_id,
                value,
                name,
            });
        }
    }

    /// Store a field. An out-of-range base type is reported but kept.
    pub fn add_field(&mut self, record: FieldRecord) {
        if record.base_type > FieldType::MAX {
            log::warn!(target: LOG_TARGET, "Strange field {} ({:?})", record.id, record.name);
            self.diagnostics.push(Diagnostic::StrangeField {
                field_id: record.id,
                name: record.name.clone(),
                base_type: record.base_type,
            });
        }
        self.fields.insert(record.id, record);
    }

    /// Add one fragment to its struct, creating the struct on first sight.
    ///
    /// Members are kept sorted by the fragment's `order` column; fragments
    /// with equal `order` stay in arrival order.
    pub fn add_struct(&mut self, fragment: StructFragment) {
        let def = self
            .structs
            .get_or_insert_with(fragment.id, || StructDef::new(fragment.id));

        let at = def.members.partition_point(|m| m.order <= fragment.order);
        def.members.insert(
            at,
            StructMember {
                order: fragment.order,
                tag: FragmentTag::from_raw(fragment.tag),
                value: fragment.value,
            },
        );
    }

    /// Bind an entity to its struct.
    ///
    /// The first entity to reference an unnamed struct gives it its name;
    /// later entities never rename it.
    pub fn add_entity(&mut self, record: EntityRecord) {
        if let Some(def) = self.structs.get_mut(&record.struct_id) {
            if !def.is_named() {
                def.name = record.name.clone();
            }
        }

        let def = EntityDef {
            unique_id: record.unique_id,
            name: record.name,
            struct_id: record.struct_id,
        };
        self.entities.insert(def.unique_id.clone(), def);
    }

    /// Freeze the builder into a read-only schema.
    pub fn build(self) -> Schema {
        Schema {
            enums: self.enums,
            fields: self.fields,
            structs: self.structs,
            entities: self.entities,
            diagnostics: self.diagnostics,
        }
    }
}
