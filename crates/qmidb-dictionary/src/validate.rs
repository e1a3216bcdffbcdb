//! Referential checks over an assembled schema.
//!
//! Nothing here is fatal: every finding is returned as a [`Diagnostic`] and
//! emission goes ahead regardless.

use std::fmt;

use crate::schema::Schema;
use crate::types::FragmentTag;

/// A non-fatal finding about the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A field's base type is outside the known range.
    StrangeField {
        field_id: i64,
        name: String,
        base_type: i64,
    },
    /// An enum entry names an enum that does not exist.
    MissingOwner {
        enum_id: i64,
        value: i64,
        name: String,
    },
    /// A tag-0 member points at a missing field.
    DanglingFieldRef { struct_id: i64, field_id: i64 },
    /// A tag-1 member points at a missing struct.
    DanglingStructRef { struct_id: i64, target: i64 },
    /// A member carries a tag other than 0, 1, 2 or 6.
    SurprisingFragment { struct_id: i64, tag: i64, value: i64 },
    /// An entity points at a missing struct.
    MissingStruct {
        entity: String,
        name: String,
        struct_id: i64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrangeField {
                field_id,
                name,
                base_type,
            } => write!(f, "Strange field: {} ({}) has base type {}", field_id, name, base_type),
            Self::MissingOwner {
                enum_id,
                value,
                name,
            } => write!(f, "No enum: {} (entry {} = {})", enum_id, name, value),
            Self::DanglingFieldRef {
                struct_id,
                field_id,
            } => write!(f, "No field: {} (in struct {})", field_id, struct_id),
            Self::DanglingStructRef { struct_id, target } => {
                write!(f, "No struct: {} (in struct {})", target, struct_id)
            }
            Self::SurprisingFragment {
                struct_id,
                tag,
                value,
            } => write!(
                f,
                "Surprising struct field: tag {} value {} (in struct {})",
                tag, value, struct_id
            ),
            Self::MissingStruct {
                entity,
                name,
                struct_id,
            } => write!(f, "Entity missing struct: {} ({}) -> {}", entity, name, struct_id),
        }
    }
}

/// Check every struct member and entity reference.
pub fn validate(schema: &Schema) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    for def in schema.structs() {
        for member in &def.members {
            match member.tag {
                FragmentTag::Field => {
                    if schema.field(member.value).is_none() {
                        found.push(Diagnostic::DanglingFieldRef {
                            struct_id: def.id,
                            field_id: member.value,
                        });
                    }
                }
                FragmentTag::Struct => {
                    if schema.struct_def(member.value).is_none() {
                        found.push(Diagnostic::DanglingStructRef {
                            struct_id: def.id,
                            target: member.value,
                        });
                    }
                }
                FragmentTag::Opaque(_) => {}
                FragmentTag::Unknown(tag) => found.push(Diagnostic::SurprisingFragment {
                    struct_id: def.id,
                    tag,
                    value: member.value,
                }),
            }
        }
    }

    for entity in schema.entities() {
        if schema.struct_def(entity.struct_id).is_none() {
            found.push(Diagnostic::MissingStruct {
                entity: entity.unique_id.clone(),
                name: entity.name.clone(),
                struct_id: entity.struct_id,
            });
        }
    }

    found
}

impl Schema {
    /// Run [`validate`] on this schema.
    pub fn validate(&self) -> Vec<Diagnostic> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EntityRecord, FieldRecord, Record, StructFragment};
    use crate::SchemaBuilder;

    fn schema(fields: &[&str], fragments: &[&str], entities: &[&str]) -> Schema {
        let mut builder = SchemaBuilder::new();
        for line in fields {
            builder.add_field(FieldRecord::parse_line(line).unwrap().unwrap());
        }
        for line in fragments {
            builder.add_struct(StructFragment::parse_line(line).unwrap().unwrap());
        }
        for line in entities {
            builder.add_entity(EntityRecord::parse_line(line).unwrap().unwrap());
        }
        builder.build()
    }

    #[test]
    fn test_clean_schema() {
        let s = schema(
            &["10^bar^8^2^0^0"],
            &["5^0^0^10^bar^0^0^x", "6^0^1^5^nested^0^0^x"],
            &["1^k^Foo^5"],
        );
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_dangling_field() {
        let s = schema(&[], &["5^0^0^10^bar^0^0^x"], &[]);
        assert_eq!(
            validate(&s),
            vec![Diagnostic::DanglingFieldRef {
                struct_id: 5,
                field_id: 10
            }]
        );
    }

    #[test]
    fn test_dangling_struct() {
        let s = schema(&[], &["5^0^1^77^sub^0^0^x"], &[]);
        assert_eq!(
            validate(&s),
            vec![Diagnostic::DanglingStructRef {
                struct_id: 5,
                target: 77
            }]
        );
    }

    #[test]
    fn test_opaque_tags_unchecked() {
        let s = schema(&[], &["5^0^2^12345^a^0^0^x", "5^1^6^-1^b^0^0^x"], &[]);
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_surprising_tag() {
        let s = schema(&[], &["5^0^4^1^a^0^0^x"], &[]);
        assert_eq!(
            validate(&s),
            vec![Diagnostic::SurprisingFragment {
                struct_id: 5,
                tag: 4,
                value: 1
            }]
        );
    }

    #[test]
    fn test_entity_missing_struct() {
        let s = schema(&[], &[], &[r#"1^"0x01"^"Foo"^5"#]);
        let found = s.validate();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_string(), "Entity missing struct: 1.0x01 (Foo) -> 5");
    }
}
