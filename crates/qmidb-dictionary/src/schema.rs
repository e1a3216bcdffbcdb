//! The assembled, read-only dictionary schema.

use crate::ordered::OrderedMap;
use crate::records::FieldRecord;
use crate::types::FragmentTag;
use crate::validate::Diagnostic;

/// Display name of a struct that no entity has claimed yet.
pub const UNNAMED: &str = "<none>";

/// One named value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub value: i64,
    pub name: String,
}

/// An enum with its values sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    pub id: i64,
    pub name: String,
    pub values: Vec<EnumValue>,
}

/// One member of a struct, resolved from a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructMember {
    /// Position column of the originating fragment.
    pub order: i64,
    pub tag: FragmentTag,
    pub value: i64,
}

/// A composite struct rebuilt from its fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub id: i64,
    /// First entity name bound to this struct, or [`UNNAMED`].
    pub name: String,
    /// Members ordered by fragment `order`.
    pub members: Vec<StructMember>,
}

impl StructDef {
    pub(crate) fn new(id: i64) -> Self {
        Self {
            id,
            name: UNNAMED.to_string(),
            members: Vec::new(),
        }
    }

    /// Check whether an entity has named this struct.
    pub fn is_named(&self) -> bool {
        self.name != UNNAMED
    }
}

/// An entity binding a human name to a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDef {
    pub unique_id: String,
    pub name: String,
    pub struct_id: i64,
}

/// The assembled dictionary.
///
/// Built by [`SchemaBuilder`](crate::SchemaBuilder) and read-only afterwards.
/// Every collection iterates in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) enums: OrderedMap<i64, EnumDef>,
    pub(crate) fields: OrderedMap<i64, FieldRecord>,
    pub(crate) structs: OrderedMap<i64, StructDef>,
    pub(crate) entities: OrderedMap<String, EntityDef>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Schema {
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.enums.values()
    }

    pub fn enum_def(&self, id: i64) -> Option<&EnumDef> {
        self.enums.get(&id)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldRecord> {
        self.fields.values()
    }

    pub fn field(&self, id: i64) -> Option<&FieldRecord> {
        self.fields.get(&id)
    }

    pub fn structs(&self) -> impl Iterator<Item = &StructDef> {
        self.structs.values()
    }

    pub fn struct_def(&self, id: i64) -> Option<&StructDef> {
        self.structs.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityDef> {
        self.entities.values()
    }

    pub fn entity(&self, unique_id: &str) -> Option<&EntityDef> {
        self.entities.get(&unique_id.to_string())
    }

    /// Findings recorded while the schema was assembled.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn struct_count(&self) -> usize {
        self.structs.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
