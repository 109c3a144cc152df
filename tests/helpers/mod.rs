//! Shared fixtures for integration tests.
//!
//! `PlainType` conforms with no overrides beyond the required methods,
//! so it observes every contract default. `FixtureType` additionally
//! lets a test wire up base types and interfaces *after* construction
//! (through `OnceLock`), which is the only way a harness can assemble
//! the deliberately malformed cyclic graphs the contract itself never
//! guards against.

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use symgen::{
    Accessibility, AttributeData, NamespaceOrType, NamespaceOrTypeSymbol, Symbol, SymbolKind,
    SymbolModifiers, TypeKind, TypeParts, TypeSymbol,
};

/// A conformer that overrides nothing it does not know.
#[derive(Debug)]
pub struct PlainType {
    core: TypeParts,
    kind: TypeKind,
}

impl PlainType {
    pub fn new(core: TypeParts, kind: TypeKind) -> Arc<Self> {
        Arc::new(Self { core, kind })
    }

    pub fn named(name: &str, kind: TypeKind) -> Arc<Self> {
        Self::new(TypeParts::named(name), kind)
    }
}

impl Symbol for PlainType {
    fn kind(&self) -> SymbolKind {
        SymbolKind::NamedType
    }

    fn name(&self) -> &str {
        self.core.parts().name()
    }

    fn containing_type(&self) -> Option<&Arc<dyn TypeSymbol>> {
        self.core.parts().containing_type()
    }

    fn accessibility(&self) -> Accessibility {
        self.core.parts().accessibility()
    }

    fn modifiers(&self) -> SymbolModifiers {
        self.core.parts().modifiers()
    }

    fn attributes(&self) -> &[AttributeData] {
        self.core.parts().attributes()
    }
}

impl NamespaceOrTypeSymbol for PlainType {
    fn namespace_or_type(&self) -> NamespaceOrType {
        self.core.namespace_or_type()
    }
}

impl TypeSymbol for PlainType {
    fn type_kind(&self) -> TypeKind {
        self.kind
    }

    fn original_definition(&self) -> &dyn TypeSymbol {
        self
    }

    fn special_type(&self) -> symgen::SpecialType {
        self.core.special_type()
    }
}

/// A conformer whose base type and interfaces can be wired after
/// construction, enabling cyclic test graphs.
#[derive(Debug)]
pub struct FixtureType {
    core: TypeParts,
    kind: TypeKind,
    base: OnceLock<Arc<dyn TypeSymbol>>,
    interfaces: OnceLock<Vec<Arc<dyn TypeSymbol>>>,
}

impl FixtureType {
    pub fn named(name: &str, kind: TypeKind) -> Arc<Self> {
        Arc::new(Self {
            core: TypeParts::named(name),
            kind,
            base: OnceLock::new(),
            interfaces: OnceLock::new(),
        })
    }

    pub fn set_base(&self, base: Arc<dyn TypeSymbol>) {
        self.base
            .set(base)
            .expect("fixture base type already wired");
    }

    pub fn set_interfaces(&self, interfaces: Vec<Arc<dyn TypeSymbol>>) {
        self.interfaces
            .set(interfaces)
            .expect("fixture interfaces already wired");
    }
}

impl Symbol for FixtureType {
    fn kind(&self) -> SymbolKind {
        SymbolKind::NamedType
    }

    fn name(&self) -> &str {
        self.core.parts().name()
    }
}

impl NamespaceOrTypeSymbol for FixtureType {
    fn namespace_or_type(&self) -> NamespaceOrType {
        self.core.namespace_or_type()
    }
}

impl TypeSymbol for FixtureType {
    fn type_kind(&self) -> TypeKind {
        self.kind
    }

    fn original_definition(&self) -> &dyn TypeSymbol {
        self
    }

    fn base_type(&self) -> Option<&dyn TypeSymbol> {
        self.base.get().map(|b| b.as_ref())
    }

    fn interfaces(&self) -> &[Arc<dyn TypeSymbol>] {
        self.interfaces.get().map(|v| v.as_slice()).unwrap_or(&[])
    }
}
