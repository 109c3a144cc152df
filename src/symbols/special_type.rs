//! Classification of well-known built-in types.
//!
//! Lets an emitter or type-relation query recognize "this is `int`" or
//! "this is `object`" without a real compilation to ask. The value is
//! fixed at construction and never recomputed.

/// A closed classification of well-known built-in types.
///
/// `None` means "none of the known special types" and is the default for
/// every ordinary symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpecialType {
    #[default]
    None,
    Object,
    Enum,
    Delegate,
    MulticastDelegate,
    ValueType,
    Void,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    IntPtr,
    UIntPtr,
    Array,
    Nullable,
    DateTime,
}

impl SpecialType {
    /// The source keyword for this special type, if the language has one.
    ///
    /// Returns `None` for classifications with no keyword form
    /// (e.g. `Array`, `Nullable`, `DateTime`, and `SpecialType::None`
    /// itself).
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            SpecialType::Object => Some("object"),
            SpecialType::Void => Some("void"),
            SpecialType::Boolean => Some("bool"),
            SpecialType::Char => Some("char"),
            SpecialType::SByte => Some("sbyte"),
            SpecialType::Byte => Some("byte"),
            SpecialType::Int16 => Some("short"),
            SpecialType::UInt16 => Some("ushort"),
            SpecialType::Int32 => Some("int"),
            SpecialType::UInt32 => Some("uint"),
            SpecialType::Int64 => Some("long"),
            SpecialType::UInt64 => Some("ulong"),
            SpecialType::Decimal => Some("decimal"),
            SpecialType::Single => Some("float"),
            SpecialType::Double => Some("double"),
            SpecialType::String => Some("string"),
            _ => None,
        }
    }

    /// Returns true if this classification names one of the numeric
    /// built-ins.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SpecialType::SByte
                | SpecialType::Byte
                | SpecialType::Int16
                | SpecialType::UInt16
                | SpecialType::Int32
                | SpecialType::UInt32
                | SpecialType::Int64
                | SpecialType::UInt64
                | SpecialType::Decimal
                | SpecialType::Single
                | SpecialType::Double
        )
    }
}
