//! C declaration export for the assembled schema.
//!
//! This module renders enums and structs as C-style declarations using the
//! consumer's naming conventions: `<ns>_<nicename>` type names,
//! `<NS>_<ENUM>_<VALUE>` constants and `bool`/`intN`/`uintN` member types.
//!
//! # Example
//!
//! ```no_run
//! use qmidb_dictionary::{CHeaderExporter, Dictionary};
//!
//! let dictionary = Dictionary::open("data")?;
//! let schema = dictionary.into_schema();
//! let exporter = CHeaderExporter::new(&schema);
//!
//! std::fs::write("qmi-dict.h", exporter.export_all())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt::Write;

use crate::schema::{EnumDef, Schema, StructDef, StructMember};
use crate::types::FragmentTag;

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "/* GENERATED CODE. DO NOT EDIT. */";

/// Namespace tag used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "gobi";

/// Member type emitted when a member cannot be resolved to a typed field.
pub const PLACEHOLDER: &str = "???";

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prefix for every emitted type and constant name.
    pub namespace: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Lowercase identifier for a display name.
///
/// Spaces and slashes become underscores, everything from the first `-` on
/// is dropped, and leading or trailing underscores are removed.
pub fn nicename(name: &str) -> String {
    sanitize(&name.to_lowercase())
}

/// Uppercase identifier for a display name, with the same rules as [`nicename`].
pub fn constname(name: &str) -> String {
    sanitize(&name.to_uppercase())
}

fn sanitize(name: &str) -> String {
    let replaced = name.replace([' ', '/'], "_");
    let head = replaced.split('-').next().unwrap_or_default();
    head.trim_matches('_').to_string()
}

/// Exporter for generating C declarations from a schema.
pub struct CHeaderExporter<'a> {
    schema: &'a Schema,
    options: EmitOptions,
}

impl<'a> CHeaderExporter<'a> {
    /// Create an exporter with the default namespace.
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_options(schema, EmitOptions::default())
    }

    /// Create an exporter with explicit options.
    pub fn with_options(schema: &'a Schema, options: EmitOptions) -> Self {
        Self { schema, options }
    }

    /// Export every enum and struct.
    ///
    /// Enums come first, then one forward declaration per struct, then the
    /// struct bodies. Each group follows the schema's insertion order.
    pub fn export_all(&self) -> String {
        let mut buf = String::new();
        let _ = writeln!(buf, "{}", GENERATED_MARKER);

        for def in self.schema.enums() {
            buf.push_str(&self.generate_enum(def));
        }

        for def in self.schema.structs() {
            let _ = writeln!(buf, "struct {}; /* {} */", self.print_name(def), def.name);
        }

        for def in self.schema.structs() {
            buf.push_str(&self.generate_struct(def));
        }

        buf
    }

    /// Render a single enum, if it exists.
    pub fn render_enum(&self, id: i64) -> Option<String> {
        self.schema.enum_def(id).map(|def| self.generate_enum(def))
    }

    /// Render a single struct body, if it exists.
    pub fn render_struct(&self, id: i64) -> Option<String> {
        self.schema.struct_def(id).map(|def| self.generate_struct(def))
    }

    /// Type name for a struct: its nicename, or its id while unnamed.
    pub fn print_name(&self, def: &StructDef) -> String {
        if def.is_named() {
            format!("{}_{}", self.options.namespace, nicename(&def.name))
        } else {
            format!("{}_{}", self.options.namespace, def.id)
        }
    }

    fn generate_enum(&self, def: &EnumDef) -> String {
        let mut out = String::new();
        let prefix = format!("{}_{}", constname(&self.options.namespace), constname(&def.name));

        let _ = writeln!(
            out,
            "enum {}_{} {{ /* {} */",
            self.options.namespace,
            nicename(&def.name),
            def.name
        );
        for v in &def.values {
            let _ = writeln!(
                out,
                "\t{}_{}\t\t= 0x{:08x},     /* {} */",
                prefix,
                constname(&v.name),
                v.value,
                v.name
            );
        }
        let _ = writeln!(out, "}};\n");

        out
    }

    fn generate_struct(&self, def: &StructDef) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "struct {} {{ /* {} */", self.print_name(def), def.name);
        for member in &def.members {
            let _ = writeln!(out, "\t{}", self.member_line(member));
        }
        let _ = writeln!(out, "}};\n");

        out
    }

    /// Declaration for one struct member, without indentation.
    fn member_line(&self, member: &StructMember) -> String {
        match member.tag {
            FragmentTag::Field => {
                let Some(field) = self.schema.field(member.value) else {
                    return format!("{}; /* missing field {} */", PLACEHOLDER, member.value);
                };
                match field.field_type() {
                    Some(ty) => format!(
                        "{} {}; /* {} */",
                        ty.decl_type(),
                        nicename(&field.name),
                        field.name
                    ),
                    None => format!(
                        "{}; /* {}: base type {} */",
                        PLACEHOLDER, field.name, field.base_type
                    ),
                }
            }
            FragmentTag::Struct => match self.schema.struct_def(member.value) {
                Some(target) => format!("{}; /* struct {} */", PLACEHOLDER, self.print_name(target)),
                None => format!("{}; /* missing struct {} */", PLACEHOLDER, member.value),
            },
            FragmentTag::Opaque(tag) | FragmentTag::Unknown(tag) => {
                format!("{}; /* tag {}, value {} */", PLACEHOLDER, tag, member.value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EntityRecord, EnumEntryRecord, EnumRecord, FieldRecord, Record, StructFragment};
    use crate::SchemaBuilder;

    fn sample_schema() -> Schema {
        let mut builder = SchemaBuilder::new();
        builder.add_enum(EnumRecord::parse_line(r#"50000^"QMI Result"^0^0"#).unwrap().unwrap());
        for line in [r#"50000^1^"Failure""#, r#"50000^0x00^"Success""#] {
            builder
                .add_entry(EnumEntryRecord::parse_line(line).unwrap().unwrap())
                .unwrap();
        }
        for line in [r#"10^"bar"^8^2^0^0"#, r#"11^"Big Counter"^64^8^0^0"#, r#"12^"odd"^8^30^0^0"#] {
            builder.add_field(FieldRecord::parse_line(line).unwrap().unwrap());
        }
        for line in [
            r#"5^0^0^10^"bar"^0^0^"""#,
            r#"5^1^0^11^"count"^0^0^"""#,
            r#"5^2^1^6^"inner"^0^0^"""#,
            r#"5^3^2^9^"x"^0^0^"""#,
            r#"6^0^0^12^"odd"^0^0^"""#,
            r#"6^1^0^99^"gone"^0^0^"""#,
        ] {
            builder.add_struct(StructFragment::parse_line(line).unwrap().unwrap());
        }
        builder.add_entity(EntityRecord::parse_line(r#"1^"0x01"^"Foo-Bar Req"^5"#).unwrap().unwrap());
        builder.build()
    }

    #[test]
    fn test_nicename() {
        assert_eq!(nicename("QMI Result"), "qmi_result");
        assert_eq!(nicename("Get/Set Mode"), "get_set_mode");
        assert_eq!(nicename("Foo-Bar Req"), "foo");
        assert_eq!(nicename(" _Trailing_ "), "trailing");
        assert_eq!(nicename("-leading"), "");
    }

    #[test]
    fn test_constname() {
        assert_eq!(constname("QMI Result"), "QMI_RESULT");
        assert_eq!(constname("Get/Set - extra"), "GET_SET");
    }

    #[test]
    fn test_enum_rendering() {
        let schema = sample_schema();
        let exporter = CHeaderExporter::new(&schema);
        let text = exporter.render_enum(50000).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "enum gobi_qmi_result { /* QMI Result */");
        assert_eq!(
            lines[1],
            "\tGOBI_QMI_RESULT_SUCCESS\t\t= 0x00000000,     /* Success */"
        );
        assert_eq!(
            lines[2],
            "\tGOBI_QMI_RESULT_FAILURE\t\t= 0x00000001,     /* Failure */"
        );
        assert_eq!(lines[3], "};");
    }

    #[test]
    fn test_struct_rendering() {
        let schema = sample_schema();
        let exporter = CHeaderExporter::new(&schema);
        let text = exporter.render_struct(5).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "struct gobi_foo { /* Foo-Bar Req */");
        assert_eq!(lines[1], "\tuint8 bar; /* bar */");
        assert_eq!(lines[2], "\tuint64 big_counter; /* Big Counter */");
        assert_eq!(lines[3], "\t???; /* struct gobi_6 */");
        assert_eq!(lines[4], "\t???; /* tag 2, value 9 */");
        assert_eq!(lines[5], "};");
    }

    #[test]
    fn test_unresolved_members_use_placeholder() {
        let schema = sample_schema();
        let exporter = CHeaderExporter::new(&schema);
        let text = exporter.render_struct(6).unwrap();
        assert!(text.contains("\t???; /* odd: base type 30 */\n"));
        assert!(text.contains("\t???; /* missing field 99 */\n"));
    }

    #[test]
    fn test_export_all_layout() {
        let schema = sample_schema();
        let text = CHeaderExporter::new(&schema).export_all();
        assert!(text.starts_with(GENERATED_MARKER));

        let enum_at = text.find("enum gobi_qmi_result").unwrap();
        let forward_foo = text.find("struct gobi_foo; /* Foo-Bar Req */").unwrap();
        let forward_6 = text.find("struct gobi_6; /* <none> */").unwrap();
        let body_foo = text.find("struct gobi_foo {").unwrap();
        let body_6 = text.find("struct gobi_6 {").unwrap();
        assert!(enum_at < forward_foo);
        assert!(forward_foo < forward_6);
        assert!(forward_6 < body_foo);
        assert!(body_foo < body_6);
        assert!(text.contains("struct gobi_6; /* <none> */\nstruct gobi_foo {"));
    }

    #[test]
    fn test_custom_namespace() {
        let schema = sample_schema();
        let options = EmitOptions {
            namespace: "qmi".to_string(),
        };
        let text = CHeaderExporter::with_options(&schema, options).export_all();
        assert!(text.contains("enum qmi_qmi_result {"));
        assert!(text.contains("\tQMI_QMI_RESULT_FAILURE\t\t= 0x00000001,"));
        assert!(text.contains("struct qmi_foo {"));
    }

    #[test]
    fn test_deterministic() {
        let schema = sample_schema();
        let exporter = CHeaderExporter::new(&schema);
        assert_eq!(exporter.export_all(), exporter.export_all());
    }
}
