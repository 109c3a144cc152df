//! The `TypeSymbol` contract and the `TypeParts` core record.
//!
//! This is the layer an emitter leans on hardest: every type-level query
//! has a total, safe answer here. A default of "none" / "empty" /
//! `false` can mean either "really absent" or "unknowable without a
//! real compilation" — callers that need the distinction must ask
//! whatever constructed the graph, not this layer.

use std::sync::Arc;

use super::kinds::TypeKind;
use super::namespace_or_type::{NamespaceOrType, NamespaceOrTypeSymbol};
use super::special_type::SpecialType;
use super::symbol::{Symbol, SymbolParts};

/// A symbol denoting a type.
///
/// Only [`type_kind`](TypeSymbol::type_kind) and
/// [`original_definition`](TypeSymbol::original_definition) have no
/// default: a type's kind is definitional, not inferable, and the
/// original definition of a synthetic symbol is always the symbol
/// itself, which a default method cannot express for an unsized `Self`.
pub trait TypeSymbol: NamespaceOrTypeSymbol {
    /// What sort of type this is.
    fn type_kind(&self) -> TypeKind;

    /// The canonical, non-instantiated form of this symbol.
    ///
    /// Synthetic symbols do not model generic instantiation distinct
    /// from definition, so every conformer returns `self`. Consumers may
    /// rely on pointer identity with the receiver.
    fn original_definition(&self) -> &dyn TypeSymbol;

    /// Well-known built-in classification, fixed at construction.
    fn special_type(&self) -> SpecialType {
        SpecialType::None
    }

    /// The base type, if this symbol was constructed with one.
    ///
    /// Chains reached through repeated `base_type` calls must be acyclic
    /// and finite; this layer does not detect violations, the caller
    /// assembling the graph is responsible. A walker that cannot trust
    /// its input should go through
    /// [`walk::base_chain`](crate::walk::base_chain).
    fn base_type(&self) -> Option<&dyn TypeSymbol> {
        None
    }

    /// Directly declared interfaces, not the transitive closure.
    fn interfaces(&self) -> &[Arc<dyn TypeSymbol>] {
        &[]
    }

    /// Always empty at this layer — deliberately *not* the transitive
    /// closure of [`interfaces`](TypeSymbol::interfaces), even when a
    /// conformer declares some. Computing the closure needs knowledge
    /// (each interface's own bases) a synthetic symbol is not guaranteed
    /// to have; callers that want it use
    /// [`walk::transitive_interfaces`](crate::walk::transitive_interfaces).
    /// Conformers must not override this.
    fn all_interfaces(&self) -> &[Arc<dyn TypeSymbol>] {
        &[]
    }

    /// Whether this is a reference type. Answerable only with real
    /// type-system backing, so the default is the conservative `false`.
    fn is_reference_type(&self) -> bool {
        false
    }

    /// Whether this is a value type.
    ///
    /// A conformer that knows it models a value type (e.g. a synthetic
    /// enum) overrides this to `true` and `is_reference_type` to `false`
    /// together; the contract does not enforce the pairing.
    fn is_value_type(&self) -> bool {
        false
    }

    /// Whether this is an anonymous type. Synthetic symbols never are.
    fn is_anonymous_type(&self) -> bool {
        false
    }

    /// Find the member of this type that implements the given interface
    /// member.
    ///
    /// Always "not found": a synthetic symbol has no implementation map.
    /// Do not drive interface-dispatch decisions off this on synthetic
    /// symbols — ask whatever constructed the graph instead.
    fn find_implementation_for_interface_member(
        &self,
        _member: Option<&dyn Symbol>,
    ) -> Option<Arc<dyn Symbol>> {
        None
    }
}

/// The immutable state shared by every synthetic type symbol: the
/// [`SymbolParts`] core plus the special-type classification, set once
/// in the constructor and never thereafter.
///
/// A concrete variant embeds this and delegates its `Symbol` and
/// `NamespaceOrTypeSymbol` impls to it, then supplies the variant data
/// the core cannot know (kind, element type, signature, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParts {
    parts: SymbolParts,
    special_type: SpecialType,
}

impl TypeParts {
    pub fn new(parts: SymbolParts, special_type: SpecialType) -> Self {
        Self {
            parts,
            special_type,
        }
    }

    /// Create a core with just a name; the special type defaults to
    /// "none of the known special types".
    pub fn named(name: impl Into<smol_str::SmolStr>) -> Self {
        Self::new(SymbolParts::named(name), SpecialType::default())
    }

    pub fn parts(&self) -> &SymbolParts {
        &self.parts
    }

    pub fn special_type(&self) -> SpecialType {
        self.special_type
    }

    /// Every type symbol resolves the discriminator to `Type`; delegate
    /// to this so the answer cannot drift per variant.
    pub fn namespace_or_type(&self) -> NamespaceOrType {
        NamespaceOrType::Type
    }
}
