//! Tree-walking evaluator.

use crate::parser::ast::{Block, Expr, Program, Stmt};
use crate::runtime::error::RuntimeError;
use crate::runtime::namespace::NamespaceTable;
use crate::runtime::value::Value;

/// Default maximum evaluation depth.
const DEFAULT_MAX_DEPTH: usize = 1024;

/// Evaluates parsed programs against a namespace table.
pub struct Machine<'a> {
    namespaces: &'a mut NamespaceTable,
    depth: usize,
    max_depth: usize,
}

impl<'a> Machine<'a> {
    /// Creates a machine with the default depth limit.
    pub fn new(namespaces: &'a mut NamespaceTable) -> Self {
        Self::with_depth_limit(namespaces, DEFAULT_MAX_DEPTH)
    }

    /// Creates a machine with a custom depth limit.
    pub fn with_depth_limit(namespaces: &'a mut NamespaceTable, limit: usize) -> Self {
        Self {
            namespaces,
            depth: 0,
            max_depth: limit,
        }
    }

    /// Runs a program and returns its last statement's value.
    pub fn run(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        self.eval_statements(&program.statements)
    }

    fn eval_statements(&mut self, statements: &[Stmt]) -> Result<Value, RuntimeError> {
        let mut last = Value::Unit;
        for statement in statements {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    fn eval_statement(&mut self, statement: &Stmt) -> Result<Value, RuntimeError> {
        match statement {
            Stmt::Expr(expr) => self.eval_expr(expr),
            Stmt::Version { namespace, literal } => {
                self.namespaces.set_version(namespace, literal.clone());
                Ok(Value::Unit)
            }
        }
    }

    fn eval_block(&mut self, block: &Block) -> Result<Value, RuntimeError> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::depth_exceeded(self.max_depth));
        }
        self.depth += 1;
        let value = self.eval_statements(&block.statements);
        self.depth -= 1;
        value
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Block(block) => self.eval_block(block),
            Expr::Call { function, args, .. } => {
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                function.call(args)
            }
        }
    }
}
