//! Dictionary data types.

/// Base types a field can carry.
///
/// The values are the raw codes from the `Field.txt` type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
    /// Boolean value.
    Bool = 0,
    /// Signed 8-bit integer.
    Int8 = 1,
    /// Unsigned 8-bit integer.
    UInt8 = 2,
    /// Signed 16-bit integer.
    Int16 = 3,
    /// Unsigned 16-bit integer.
    UInt16 = 4,
    /// Signed 32-bit integer.
    Int32 = 5,
    /// Unsigned 32-bit integer.
    UInt32 = 6,
    /// Signed 64-bit integer.
    Int64 = 7,
    /// Unsigned 64-bit integer.
    UInt64 = 8,
    /// ANSI string, length-prefixed.
    StringAnsi = 9,
    /// UCS-2 string, length-prefixed.
    StringUcs2 = 10,
    /// NUL-terminated ANSI string.
    StringAnsiNul = 11,
    /// NUL-terminated UCS-2 string.
    StringUcs2Nul = 12,
    /// 32-bit floating point.
    Float32 = 13,
    /// 64-bit floating point.
    Float64 = 14,
    /// UTF-8 string, length-prefixed.
    StringUtf8 = 15,
    /// NUL-terminated UTF-8 string.
    StringUtf8Nul = 16,
}

impl FieldType {
    /// Highest valid base type code.
    pub const MAX: i64 = 16;

    /// Parse from a raw type code.
    pub fn from_raw(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Bool),
            1 => Some(Self::Int8),
            2 => Some(Self::UInt8),
            3 => Some(Self::Int16),
            4 => Some(Self::UInt16),
            5 => Some(Self::Int32),
            6 => Some(Self::UInt32),
            7 => Some(Self::Int64),
            8 => Some(Self::UInt64),
            9 => Some(Self::StringAnsi),
            10 => Some(Self::StringUcs2),
            11 => Some(Self::StringAnsiNul),
            12 => Some(Self::StringUcs2Nul),
            13 => Some(Self::Float32),
            14 => Some(Self::Float64),
            15 => Some(Self::StringUtf8),
            16 => Some(Self::StringUtf8Nul),
            _ => None,
        }
    }

    /// Get the declaration type used in the generated output.
    pub fn decl_type(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::StringAnsi
            | Self::StringUcs2
            | Self::StringAnsiNul
            | Self::StringUcs2Nul
            | Self::StringUtf8
            | Self::StringUtf8Nul => "string",
        }
    }
}

/// What the `value` column of a struct fragment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentTag {
    /// `value` is a field id.
    Field,
    /// `value` is a nested struct id.
    Struct,
    /// Tags 2 and 6; `value` is opaque and never checked.
    Opaque(i64),
    /// Any other tag.
    Unknown(i64),
}

impl FragmentTag {
    /// Classify a raw tag code.
    pub fn from_raw(tag: i64) -> Self {
        match tag {
            0 => Self::Field,
            1 => Self::Struct,
            2 | 6 => Self::Opaque(tag),
            _ => Self::Unknown(tag),
        }
    }
}
