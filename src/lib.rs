//! # symgen-base
//!
//! Core library for synthetic semantic-symbol modeling.
//!
//! A synthetic symbol is a semantic-model element fabricated
//! programmatically — "the interface-implementation stub about to be
//! generated", "a placeholder type for a not-yet-written class" — rather
//! than produced by compiling real source. This crate defines the
//! read-only contracts such symbols share with compilation-backed ones,
//! so a single syntax emitter can consume either family polymorphically
//! without knowing which it was handed.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! walk      → Explicit graph-walk helpers (base chains, interface closure)
//!   ↓
//! symbols   → Symbol traits, core records, closed classification enums
//! ```
//!
//! The contract layer (`symbols`) is total: every query answers with a
//! safe default instead of failing. Only the opt-in helpers in `walk`
//! can report an error, and only for malformed (cyclic) graphs.

// ============================================================================
// MODULES (dependency order: symbols → walk)
// ============================================================================

/// Symbol contracts: capability traits, immutable core records, closed enums
pub mod symbols;

/// Graph-walk helpers: cycle-guarded base chains and interface closure
pub mod walk;

// Re-export the capability surface an emitter consumes
pub use symbols::{
    Accessibility, AttributeData, NamespaceOrType, NamespaceOrTypeSymbol, SpecialType, Symbol,
    SymbolKind, SymbolModifiers, SymbolParts, TypeKind, TypeParts, TypeSymbol,
};
pub use walk::{WalkError, base_chain, transitive_interfaces};
