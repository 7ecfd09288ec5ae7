//! Installing types and single-keyword installation.

use std::fmt;
use std::rc::Rc;

use log::debug;
use serde_json::Value;

use crate::declare::driver::{rewrite, Declaration};
use crate::declare::error::{ConfigurationError, DeclareSyntaxError};
use crate::declare::host::{DeclarationSite, InstallTarget};
use crate::declare::options::{normalize, resolve_inner, OptionRecord};
use crate::declare::preamble;
use crate::declare::registry::DeclaratorRegistry;
use crate::declare::trampoline::{default_trampoline, Trampoline};

/// Spelling used when options name no alias.
pub const DEFAULT_KEYWORD: &str = "module";

/// A kind of declaration keyword.
///
/// Implementors override the provided methods to change the default
/// spelling, extend the preamble, or replace the run-time behavior while
/// reusing the rewrite itself.
pub trait Declarator {
    /// Name this type is registered under. Appears in generated
    /// `declare` statements.
    fn type_name(&self) -> &str;

    /// Alias used when the options do not set one.
    fn default_keyword_name(&self) -> &str {
        DEFAULT_KEYWORD
    }

    /// Statements injected at the top of each declared block.
    fn default_preamble(
        &self,
        name: &str,
        version: Option<&str>,
        options: &OptionRecord,
    ) -> Vec<String> {
        preamble::generate(self.type_name(), name, version, options)
    }

    /// Function installed under the alias for run time.
    fn runtime_trampoline(&self) -> Trampoline {
        default_trampoline()
    }
}

/// The stock `module NAME VERSION { ... }` declarator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Module;

impl Declarator for Module {
    fn type_name(&self) -> &str {
        "Module"
    }
}

/// An installed keyword: its type plus the options it was installed with.
#[derive(Clone)]
pub struct Keyword {
    declarator: Rc<dyn Declarator>,
    options: Rc<OptionRecord>,
}

impl Keyword {
    /// Pairs a declarator with normalized options.
    pub fn new(declarator: Rc<dyn Declarator>, options: OptionRecord) -> Self {
        Self {
            declarator,
            options: Rc::new(options),
        }
    }

    /// Installed spelling.
    pub fn alias(&self) -> &str {
        &self.options.alias
    }

    /// Options captured at installation.
    pub fn options(&self) -> &OptionRecord {
        &self.options
    }

    /// Installing type.
    pub fn declarator(&self) -> &dyn Declarator {
        self.declarator.as_ref()
    }

    /// Rewrites the declaration at `site`.
    pub fn expand<S: DeclarationSite + ?Sized>(
        &self,
        site: &mut S,
    ) -> Result<Declaration, DeclareSyntaxError> {
        rewrite(self.declarator.as_ref(), &self.options, site)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyword")
            .field("declarator", &self.declarator.type_name())
            .field("options", &self.options)
            .finish()
    }
}

/// Installs one keyword of type `declarator` into `namespace`.
///
/// Options are fully validated before `target` is touched, including the
/// options of every `inner` keyword, whose types `registry` must know.
pub fn install(
    declarator: Rc<dyn Declarator>,
    registry: &DeclaratorRegistry,
    target: &mut dyn InstallTarget,
    namespace: &str,
    options: &Value,
) -> Result<(), ConfigurationError> {
    let options = normalize(declarator.as_ref(), options)?;
    resolve_inner(registry, &options)?;
    install_record(declarator, target, namespace, options);
    Ok(())
}

pub(crate) fn install_record(
    declarator: Rc<dyn Declarator>,
    target: &mut dyn InstallTarget,
    namespace: &str,
    options: OptionRecord,
) {
    debug!(
        "installing {} as {namespace}::{}",
        declarator.type_name(),
        options.alias
    );
    let alias = options.alias.clone();
    let trampoline = declarator.runtime_trampoline();
    target.install_keyword(namespace, &alias, Keyword::new(declarator, options));
    target.install_trampoline(namespace, &alias, trampoline);
}
