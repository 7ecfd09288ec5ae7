//! Installing types by name.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::declare::error::ConfigurationError;
use crate::declare::install::{Declarator, Module};

/// Maps type names to declarators so textual `declare` statements and
/// `inner` entries can be resolved.
#[derive(Clone, Default)]
pub struct DeclaratorRegistry {
    types: HashMap<String, Rc<dyn Declarator>>,
}

impl DeclaratorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the stock [`Module`] declarator.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Rc::new(Module));
        registry
    }

    /// Registers `declarator` under its type name, returning any previous
    /// entry.
    pub fn register(&mut self, declarator: Rc<dyn Declarator>) -> Option<Rc<dyn Declarator>> {
        self.types
            .insert(declarator.type_name().to_string(), declarator)
    }

    /// Looks up a declarator.
    pub fn get(&self, type_name: &str) -> Option<Rc<dyn Declarator>> {
        self.types.get(type_name).cloned()
    }

    /// Looks up a declarator, failing for unknown names.
    pub fn resolve(&self, type_name: &str) -> Result<Rc<dyn Declarator>, ConfigurationError> {
        self.get(type_name)
            .ok_or_else(|| ConfigurationError::UnknownDeclarator(type_name.to_string()))
    }
}

impl fmt::Debug for DeclaratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.types.keys().collect();
        names.sort();
        f.debug_struct("DeclaratorRegistry")
            .field("types", &names)
            .finish()
    }
}
