//! Symbol contracts — the read-only capability surface of synthetic symbols.
//!
//! Three traits form the surface, each layer adding what the next one
//! knows. Default methods supply the safe answer for everything a
//! synthetic symbol cannot know without a real compilation behind it, so
//! a conformer only overrides what it was actually constructed with.
//!
//! # Module structure
//!
//! - [`kinds`] — Closed discriminators (`SymbolKind`, `TypeKind`, `Accessibility`)
//! - [`special_type`] — Well-known built-in type classification
//! - [`modifiers`] — `SymbolModifiers` bit-set (stored, never reinterpreted)
//! - [`attributes`] — Thin ordered attribute records
//! - [`symbol`] — The `Symbol` capability trait and the `SymbolParts` core
//! - [`namespace_or_type`] — The namespace/type discriminator layer
//! - [`type_symbol`] — The `TypeSymbol` contract and the `TypeParts` core

mod attributes;
mod kinds;
mod modifiers;
mod namespace_or_type;
mod special_type;
mod symbol;
mod type_symbol;


pub use attributes::AttributeData;
pub use kinds::{Accessibility, SymbolKind, TypeKind};
pub use modifiers::SymbolModifiers;
pub use namespace_or_type::{NamespaceOrType, NamespaceOrTypeSymbol};
pub use special_type::SpecialType;
pub use symbol::{Symbol, SymbolParts};
pub use type_symbol::{TypeParts, TypeSymbol};
