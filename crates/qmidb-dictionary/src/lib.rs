//! QMI data dictionary loader and C declaration emitter.
//!
//! The dictionary is exported as five `^`-separated text tables describing
//! the protocol's entities, struct fragments, fields, enums and enum entries.
//! This crate parses them, rebuilds composite structs from their fragments,
//! checks cross references and renders deterministic C declarations.
//!
//! # Quick Start
//!
//! ```no_run
//! use qmidb_dictionary::{CHeaderExporter, Dictionary};
//!
//! let dictionary = Dictionary::open("/usr/share/qmidb")?;
//! println!("{}", dictionary.counts());
//!
//! let schema = dictionary.into_schema();
//! for finding in schema.diagnostics().iter().chain(&schema.validate()) {
//!     eprintln!("{}", finding);
//! }
//!
//! print!("{}", CHeaderExporter::new(&schema).export_all());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - **Records** ([`records`]): one typed row per table line
//! - **Tables** ([`Table`]): rows indexed by unique key and by name
//! - **Builder** ([`SchemaBuilder`]): the only mutation surface of the schema
//! - **Schema** ([`Schema`]): enums, fields, structs and entities, read-only
//! - **Validation** ([`validate()`]): dangling references as [`Diagnostic`]s
//! - **Export** ([`CHeaderExporter`]): declaration text

mod builder;
mod c_header;
mod database;
mod error;
mod ordered;
mod schema;
mod tables;
mod types;
mod validate;

pub mod records;

pub use builder::SchemaBuilder;
pub use c_header::{
    constname, nicename, CHeaderExporter, EmitOptions, DEFAULT_NAMESPACE, GENERATED_MARKER, PLACEHOLDER,
};
pub use database::{Dictionary, TableCounts};
pub use error::{Error, Result};
pub use schema::{EntityDef, EnumDef, EnumValue, Schema, StructDef, StructMember, UNNAMED};
pub use tables::Table;
pub use types::{FieldType, FragmentTag};
pub use validate::{validate, Diagnostic};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_single_struct() {
        let dictionary = Dictionary {
            entities: Table::parse_str("1^\"0x01\"^\"Foo\"^5\n"),
            structs: Table::parse_str("5^0^0^10^\"bar\"^0^0^\"\"\n"),
            fields: Table::parse_str("10^\"bar\"^1^2^0^0\n"),
            ..Default::default()
        };
        assert_eq!(
            dictionary.counts(),
            TableCounts {
                entities: 1,
                enums: 0,
                entries: 0,
                fields: 1,
                structs: 1,
            }
        );

        let schema = dictionary.into_schema();
        assert!(schema.validate().is_empty());

        let text = CHeaderExporter::new(&schema).export_all();
        assert!(text.contains("struct gobi_foo; /* Foo */\n"));
        assert!(text.contains("struct gobi_foo { /* Foo */\n\tuint8 bar; /* bar */\n};\n"));
    }

    #[test]
    fn test_diagnostics_do_not_block_output() {
        let dictionary = Dictionary {
            entities: Table::parse_str("1^k^Ghost^42\n"),
            structs: Table::parse_str("5^0^0^10^bar^0^0^x\n5^1^3^0^weird^0^0^x\n"),
            ..Default::default()
        };
        let schema = dictionary.into_schema();
        let found = schema.validate();
        assert_eq!(found.len(), 3);

        let text = CHeaderExporter::new(&schema).export_all();
        assert!(text.contains("struct gobi_5 { /* <none> */"));
        assert!(text.contains("\t???; /* missing field 10 */"));
        assert!(text.contains("\t???; /* tag 3, value 0 */"));
    }
}
