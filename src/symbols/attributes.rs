//! Thin attribute records.
//!
//! Rich attribute-data modeling (typed constructor arguments, named
//! arguments, attribute-class resolution) belongs to the host semantic
//! API. This layer only carries what stable emission needs: the
//! attribute class name and pre-rendered argument texts, in the order
//! the caller attached them.

use smol_str::SmolStr;

/// An attribute attached to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeData {
    class_name: SmolStr,
    arguments: Vec<SmolStr>,
}

impl AttributeData {
    /// Create an attribute with no arguments.
    pub fn new(class_name: impl Into<SmolStr>) -> Self {
        Self {
            class_name: class_name.into(),
            arguments: Vec::new(),
        }
    }

    /// Create an attribute with pre-rendered positional argument texts.
    pub fn with_arguments(
        class_name: impl Into<SmolStr>,
        arguments: impl IntoIterator<Item = SmolStr>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// The attribute class name as the caller supplied it.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Positional argument texts, in attachment order.
    pub fn arguments(&self) -> &[SmolStr] {
        &self.arguments
    }
}
