//! Embedding facade tying the registry, the namespace table, the parser and
//! the evaluator together.

use std::rc::Rc;

use log::debug;
use serde_json::Value as Options;

use crate::declare::{self, Declarator, DeclaratorRegistry};
use crate::error::Error;
use crate::parser::{Compiled, ParseOptions, Parser, Program};
use crate::runtime::{Function, Machine, NamespaceTable, Value};

/// One interpreter instance. Namespaces persist across compiles and runs.
#[derive(Debug)]
pub struct Interpreter {
    registry: DeclaratorRegistry,
    namespaces: NamespaceTable,
    options: ParseOptions,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with default parse options and the built-in
    /// `Module` declarator registered.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Creates an interpreter with explicit parse options.
    pub fn with_options(options: ParseOptions) -> Self {
        let mut namespaces = NamespaceTable::new();
        namespaces.declare(&options.namespace);
        Self {
            registry: DeclaratorRegistry::with_defaults(),
            namespaces,
            options,
        }
    }

    /// Options every [`Self::compile`] parses with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Declarator types available by name.
    pub fn registry(&self) -> &DeclaratorRegistry {
        &self.registry
    }

    /// Registry consulted by `declare` and [`Self::install`].
    pub fn registry_mut(&mut self) -> &mut DeclaratorRegistry {
        &mut self.registry
    }

    /// Namespaces with their versions, keywords and functions.
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Registers a custom declarator type.
    pub fn register(&mut self, declarator: Rc<dyn Declarator>) -> Option<Rc<dyn Declarator>> {
        self.registry.register(declarator)
    }

    /// Installs a keyword of type `type_name` into `namespace` for good.
    pub fn install(
        &mut self,
        type_name: &str,
        namespace: &str,
        options: &Options,
    ) -> Result<(), Error> {
        let declarator = self.registry.resolve(type_name)?;
        declare::install(
            declarator,
            &self.registry,
            &mut self.namespaces,
            namespace,
            options,
        )?;
        Ok(())
    }

    /// Installs one keyword per entry of `blocks`, each layered over `shared`.
    pub fn install_multiple(
        &mut self,
        type_name: &str,
        namespace: &str,
        blocks: &Options,
        shared: &Options,
    ) -> Result<(), Error> {
        let declarator = self.registry.resolve(type_name)?;
        declare::install_multiple(
            declarator,
            &self.registry,
            &mut self.namespaces,
            namespace,
            blocks,
            shared,
        )?;
        Ok(())
    }

    /// Binds a native function, returning the one it replaces.
    pub fn define_function(&mut self, namespace: &str, function: Function) -> Option<Function> {
        self.namespaces.bind_function(namespace, function)
    }

    /// Parses `source`, applying every keyword rewrite it triggers.
    pub fn compile(&mut self, source: &str) -> Result<Compiled, Error> {
        let parser = Parser::new(
            source,
            self.options.clone(),
            &mut self.namespaces,
            &self.registry,
        );
        let compiled = parser.parse_program()?;
        debug!(
            "compiled {} top-level statements",
            compiled.program.statements.len()
        );
        Ok(compiled)
    }

    /// Evaluates an already compiled program.
    pub fn execute(&mut self, program: &Program) -> Result<Value, Error> {
        Ok(Machine::new(&mut self.namespaces).run(program)?)
    }

    /// Compiles and evaluates `source`, returning its last value.
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let compiled = self.compile(source)?;
        self.execute(&compiled.program)
    }
}
