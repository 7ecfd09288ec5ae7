//! Namespace table shared by the parser and the evaluator.
//!
//! Keywords are parse-time bindings; functions are bound at parse time into
//! call nodes; versions are written at run time.

use std::collections::{BTreeMap, HashMap};

use crate::declare::{InstallTarget, Keyword, Trampoline};
use crate::runtime::function::Function;

/// One namespace's identifier table.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    version: Option<String>,
    functions: HashMap<String, Function>,
    keywords: HashMap<String, Keyword>,
}

impl Namespace {
    /// Version tag, when set.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Function bound to `name`.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Keyword bound to `name`.
    pub fn keyword(&self, name: &str) -> Option<&Keyword> {
        self.keywords.get(name)
    }
}

/// All namespaces known to one interpreter.
#[derive(Debug, Clone, Default)]
pub struct NamespaceTable {
    namespaces: BTreeMap<String, Namespace>,
}

impl NamespaceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, creating it if needed.
    pub fn declare(&mut self, name: &str) -> &mut Namespace {
        self.namespaces.entry(name.to_string()).or_default()
    }

    /// Looks up a namespace.
    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Returns `true` if `name` has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    /// Version tag of `name`.
    pub fn version(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Namespace::version)
    }

    /// Sets the version tag of `name`.
    pub fn set_version(&mut self, name: &str, version: impl Into<String>) {
        self.declare(name).version = Some(version.into());
    }

    /// Keyword bound to `alias` in `namespace`.
    pub fn keyword(&self, namespace: &str, alias: &str) -> Option<&Keyword> {
        self.get(namespace).and_then(|ns| ns.keyword(alias))
    }

    /// Function bound to `name` in `namespace`.
    pub fn function(&self, namespace: &str, name: &str) -> Option<&Function> {
        self.get(namespace).and_then(|ns| ns.function(name))
    }

    /// Binds a keyword, returning the one it replaces.
    pub fn bind_keyword(&mut self, namespace: &str, keyword: Keyword) -> Option<Keyword> {
        let alias = keyword.alias().to_string();
        self.declare(namespace).keywords.insert(alias, keyword)
    }

    /// Binds a function under its own name, returning the one it replaces.
    pub fn bind_function(&mut self, namespace: &str, function: Function) -> Option<Function> {
        let name = function.name().to_string();
        self.declare(namespace).functions.insert(name, function)
    }

    /// Puts back `previous` as the keyword binding of `alias`, or removes it.
    pub fn restore_keyword(&mut self, namespace: &str, alias: &str, previous: Option<Keyword>) {
        let keywords = &mut self.declare(namespace).keywords;
        match previous {
            Some(keyword) => keywords.insert(alias.to_string(), keyword),
            None => keywords.remove(alias),
        };
    }

    /// Puts back `previous` as the function binding of `name`, or removes it.
    pub fn restore_function(&mut self, namespace: &str, name: &str, previous: Option<Function>) {
        let functions = &mut self.declare(namespace).functions;
        match previous {
            Some(function) => functions.insert(name.to_string(), function),
            None => functions.remove(name),
        };
    }

    /// Declared namespace names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }
}

impl InstallTarget for NamespaceTable {
    fn install_keyword(&mut self, namespace: &str, _alias: &str, keyword: Keyword) {
        self.bind_keyword(namespace, keyword);
    }

    fn install_trampoline(&mut self, namespace: &str, alias: &str, trampoline: Trampoline) {
        self.bind_function(namespace, Function::from_trampoline(alias, trampoline));
    }
}
