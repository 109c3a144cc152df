//! Closed discriminator enums shared by the whole symbol surface.
//!
//! All three enums are deliberately closed sets: consumers dispatch over
//! them with exhaustive `match`, which is what makes the "which facts are
//! meaningful for which kind" question checkable by the compiler instead
//! of by convention.

/// The coarse kind of a program-element symbol.
///
/// This is the discriminator the shared capability interface exposes;
/// finer type classification lives in [`TypeKind`](crate::symbols::TypeKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    NamedType,
    ArrayType,
    PointerType,
    TypeParameter,
    ErrorType,
    DynamicType,
    Namespace,
    Method,
    Field,
    Property,
    Event,
}

impl SymbolKind {
    /// Get a display label for this symbol kind.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::NamedType => "named type",
            SymbolKind::ArrayType => "array type",
            SymbolKind::PointerType => "pointer type",
            SymbolKind::TypeParameter => "type parameter",
            SymbolKind::ErrorType => "error type",
            SymbolKind::DynamicType => "dynamic type",
            SymbolKind::Namespace => "namespace",
            SymbolKind::Method => "method",
            SymbolKind::Field => "field",
            SymbolKind::Property => "property",
            SymbolKind::Event => "event",
        }
    }

    /// Returns true if this symbol kind denotes a type.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            SymbolKind::NamedType
                | SymbolKind::ArrayType
                | SymbolKind::PointerType
                | SymbolKind::TypeParameter
                | SymbolKind::ErrorType
                | SymbolKind::DynamicType
        )
    }
}

/// What sort of type a type symbol denotes.
///
/// Every type symbol supplies exactly one of these; there is no default
/// because a type's kind is definitional, not inferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    Array,
    Pointer,
    TypeParameter,
    Dynamic,
    Error,
    Module,
    Submission,
    Unknown,
}

impl TypeKind {
    /// Get a display label for this type kind.
    pub fn display(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
            TypeKind::Array => "array",
            TypeKind::Pointer => "pointer",
            TypeKind::TypeParameter => "type parameter",
            TypeKind::Dynamic => "dynamic",
            TypeKind::Error => "error",
            TypeKind::Module => "module",
            TypeKind::Submission => "submission",
            TypeKind::Unknown => "unknown",
        }
    }
}

/// Declared accessibility of a symbol.
///
/// `NotApplicable` is the default for constructs that carry no
/// accessibility of their own (array types, type parameters, and any
/// symbol whose caller omitted one).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Accessibility {
    #[default]
    NotApplicable,
    Private,
    ProtectedAndInternal,
    Protected,
    Internal,
    ProtectedOrInternal,
    Public,
}

impl Accessibility {
    /// Get a display label for this accessibility.
    pub fn display(&self) -> &'static str {
        match self {
            Accessibility::NotApplicable => "",
            Accessibility::Private => "private",
            Accessibility::ProtectedAndInternal => "private protected",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::ProtectedOrInternal => "protected internal",
            Accessibility::Public => "public",
        }
    }
}
