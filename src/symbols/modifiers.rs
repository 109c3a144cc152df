//! Structural modifier bit-set.
//!
//! This layer stores modifiers verbatim for the emitter to render; it
//! never reinterprets them and never checks combinations for legality
//! (`ABSTRACT | SEALED` is the caller's problem, not rejected here).

use bitflags::bitflags;

bitflags! {
    /// Structural modifiers attached to a symbol.
    ///
    /// Semantics are defined by the host type system.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct SymbolModifiers: u16 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        const SEALED = 1 << 2;
        const CONST = 1 << 3;
        const READONLY = 1 << 4;
        const NEW = 1 << 5;
        const VIRTUAL = 1 << 6;
        const OVERRIDE = 1 << 7;
        const PARTIAL = 1 << 8;
        const ASYNC = 1 << 9;
        const UNSAFE = 1 << 10;
        const WITH_EVENTS = 1 << 11;
    }
}
