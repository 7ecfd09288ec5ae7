//! Lexical scopes and the actions that run when they close.

use crate::declare::{InstallTarget, Keyword, ScopeEndFinalizer, Trampoline};
use crate::runtime::{Function, NamespaceTable};

/// One `{ ... }` level, or the file itself.
#[derive(Debug)]
pub(crate) struct LexicalScope {
    /// Namespace `package` last selected in this scope.
    pub(crate) namespace: String,
    /// Bindings to put back when the scope closes, oldest first.
    pub(crate) cleanups: Vec<Cleanup>,
    /// Keyword rewrite to close after this scope's `}`.
    pub(crate) finalizer: Option<ScopeEndFinalizer>,
}

impl LexicalScope {
    pub(crate) fn new(namespace: String, finalizer: Option<ScopeEndFinalizer>) -> Self {
        Self {
            namespace,
            cleanups: Vec::new(),
            finalizer,
        }
    }

    /// Restores every binding made inside the scope, newest first.
    pub(crate) fn unwind(&mut self, table: &mut NamespaceTable) {
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup.apply(table);
        }
    }
}

/// A binding shadowed by a scoped install.
#[derive(Debug)]
pub(crate) enum Cleanup {
    Keyword {
        namespace: String,
        alias: String,
        previous: Option<Keyword>,
    },
    Function {
        namespace: String,
        name: String,
        previous: Option<Function>,
    },
}

impl Cleanup {
    fn apply(self, table: &mut NamespaceTable) {
        match self {
            Self::Keyword {
                namespace,
                alias,
                previous,
            } => table.restore_keyword(&namespace, &alias, previous),
            Self::Function {
                namespace,
                name,
                previous,
            } => table.restore_function(&namespace, &name, previous),
        }
    }
}

/// Install target that records what it shadows so the enclosing scope can
/// undo it.
pub(crate) struct ScopedTarget<'a> {
    pub(crate) table: &'a mut NamespaceTable,
    pub(crate) cleanups: &'a mut Vec<Cleanup>,
}

impl InstallTarget for ScopedTarget<'_> {
    fn install_keyword(&mut self, namespace: &str, alias: &str, keyword: Keyword) {
        let previous = self.table.bind_keyword(namespace, keyword);
        self.cleanups.push(Cleanup::Keyword {
            namespace: namespace.to_string(),
            alias: alias.to_string(),
            previous,
        });
    }

    fn install_trampoline(&mut self, namespace: &str, alias: &str, trampoline: Trampoline) {
        let previous = self
            .table
            .bind_function(namespace, Function::from_trampoline(alias, trampoline));
        self.cleanups.push(Cleanup::Function {
            namespace: namespace.to_string(),
            name: alias.to_string(),
            previous,
        });
    }
}
