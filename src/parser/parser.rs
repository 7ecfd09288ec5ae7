//! Single-pass parser for the host language.
//!
//! Keywords are dispatched the moment their name token is consumed: the
//! keyword rewrites the buffer right after the cursor and parsing simply
//! continues over the rewritten text.

use log::trace;

use crate::declare::{
    self, ConfigurationError, DeclarationSite, DeclaratorRegistry, ScopeEndFinalizer,
};
use crate::lexer::{self, LexStep, Lexer, Span, Token, TokenKind, NAMESPACE_SEPARATOR};
use crate::parser::ast::{Block, Expr, Program, Stmt};
use crate::parser::error::ParseError;
use crate::parser::scope::{LexicalScope, ScopedTarget};
use crate::runtime::{Function, NamespaceTable, Value};

/// Namespace a program starts in.
pub const DEFAULT_NAMESPACE: &str = "main";

/// Bareword evaluating to the namespace in effect where it appears.
pub const CURRENT_NAMESPACE: &str = "__NAMESPACE__";

const PACKAGE: &str = "package";
const VERSION: &str = "version";
const DECLARE: &str = "declare";
const DO: &str = "do";

/// Parser behavior options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Namespace in effect at the top of the program.
    pub namespace: String,
    /// Maximum syntactic nesting depth, counting blocks, parentheses and
    /// argument lists.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_nesting: 256,
        }
    }
}

/// A parsed program together with the buffer as rewritten during the parse.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// Parsed statements.
    pub program: Program,
    /// Final buffer text, including every keyword rewrite.
    pub source: String,
}

/// Host-language parser over a live buffer.
pub struct Parser<'h> {
    buffer: String,
    lexer: Lexer,
    options: ParseOptions,
    namespaces: &'h mut NamespaceTable,
    registry: &'h DeclaratorRegistry,
    scopes: Vec<LexicalScope>,
    pending: Vec<(usize, ScopeEndFinalizer)>,
    depth: usize,
}

impl<'h> Parser<'h> {
    /// Creates a parser over `source`, binding names against `namespaces`.
    pub fn new(
        source: &str,
        options: ParseOptions,
        namespaces: &'h mut NamespaceTable,
        registry: &'h DeclaratorRegistry,
    ) -> Self {
        namespaces.declare(&options.namespace);
        let root = LexicalScope::new(options.namespace.clone(), None);
        Self {
            buffer: source.to_string(),
            lexer: Lexer::new(),
            options,
            namespaces,
            registry,
            scopes: vec![root],
            pending: Vec::new(),
            depth: 0,
        }
    }

    /// Current buffer text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Parses the whole buffer.
    ///
    /// Bindings made by `declare` are undone when their scope closes, and
    /// all of them are undone if the parse fails.
    pub fn parse_program(mut self) -> Result<Compiled, ParseError> {
        let statements = self.parse_statements(false);
        while let Some(mut scope) = self.scopes.pop() {
            scope.unwind(self.namespaces);
        }
        Ok(Compiled {
            program: Program {
                statements: statements?,
            },
            source: self.buffer,
        })
    }

    fn current_namespace(&self) -> &str {
        self.scopes
            .last()
            .map_or(self.options.namespace.as_str(), |scope| {
                scope.namespace.as_str()
            })
    }

    fn peek(&mut self) -> Result<Option<Token>, ParseError> {
        match self.lexer.peek_token(&self.buffer)? {
            LexStep::Token(token) => Ok(Some(token)),
            LexStep::EndOfInput => Ok(None),
        }
    }

    fn next(&mut self) -> Result<Option<Token>, ParseError> {
        match self.lexer.next_token(&self.buffer)? {
            LexStep::Token(token) => Ok(Some(token)),
            LexStep::EndOfInput => Ok(None),
        }
    }

    fn peek_is(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(matches!(self.peek()?, Some(token) if token.kind == kind))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.next()? {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(ParseError::unexpected_token(&token, [kind.label()])),
            None => Err(ParseError::unexpected_end_of_input([kind.label()])),
        }
    }

    fn parse_statements(&mut self, in_block: bool) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        loop {
            let Some(token) = self.peek()? else {
                if in_block {
                    return Err(ParseError::unexpected_end_of_input([
                        TokenKind::RightBrace.label()
                    ]));
                }
                break;
            };
            match token.kind {
                TokenKind::RightBrace if in_block => break,
                TokenKind::Semicolon => {
                    self.next()?;
                    continue;
                }
                _ => {}
            }

            let (statement, block_like) = self.parse_statement(token)?;
            statements.extend(statement);
            self.expect_separator(block_like, in_block)?;
        }
        Ok(statements)
    }

    fn expect_separator(&mut self, block_like: bool, in_block: bool) -> Result<(), ParseError> {
        match self.peek()? {
            None => Ok(()),
            Some(token) if token.kind == TokenKind::Semicolon => {
                self.next()?;
                Ok(())
            }
            Some(token) if token.kind == TokenKind::RightBrace && in_block => Ok(()),
            Some(_) if block_like => Ok(()),
            Some(token) => Err(ParseError::unexpected_token(
                &token,
                [TokenKind::Semicolon.label()],
            )),
        }
    }

    /// Parses one statement starting at `first`, which has been peeked.
    ///
    /// Returns the statement, if it produces one, and whether it ended in a
    /// block and so needs no `;`.
    fn parse_statement(&mut self, first: Token) -> Result<(Option<Stmt>, bool), ParseError> {
        if first.kind == TokenKind::Name {
            match first.lexeme.as_str() {
                PACKAGE => {
                    self.next()?;
                    self.parse_package()?;
                    return Ok((None, false));
                }
                VERSION => {
                    self.next()?;
                    return Ok((Some(self.parse_version()?), false));
                }
                DECLARE => {
                    self.next()?;
                    self.parse_declare()?;
                    return Ok((None, false));
                }
                _ => {}
            }
        }
        let (expr, block_like) = self.parse_expr()?;
        Ok((Some(Stmt::Expr(expr)), block_like))
    }

    fn parse_package(&mut self) -> Result<(), ParseError> {
        let name = self.expect(TokenKind::Name)?;
        if is_reserved(&name.lexeme) {
            return Err(ParseError::unexpected_token(&name, ["namespace name"]));
        }
        self.namespaces.declare(&name.lexeme);
        if let Some(scope) = self.scopes.last_mut() {
            scope.namespace = name.lexeme;
        }
        Ok(())
    }

    fn parse_version(&mut self) -> Result<Stmt, ParseError> {
        match self.next()? {
            Some(token) if matches!(token.kind, TokenKind::Str | TokenKind::Number) => {
                Ok(Stmt::Version {
                    namespace: self.current_namespace().to_string(),
                    literal: token.lexeme,
                })
            }
            Some(token) => Err(ParseError::unexpected_token(&token, ["version literal"])),
            None => Err(ParseError::unexpected_end_of_input(["version literal"])),
        }
    }

    /// `declare Type "<json options>"` installs a keyword for the rest of
    /// the enclosing scope.
    fn parse_declare(&mut self) -> Result<(), ParseError> {
        let type_token = self.expect(TokenKind::Name)?;
        let options_token = self.expect(TokenKind::Str)?;

        let raw: serde_json::Value = serde_json::from_str(&options_token.lexeme).map_err(|err| {
            ParseError::configuration(
                ConfigurationError::MalformedOptions {
                    declarator: type_token.lexeme.clone(),
                    message: err.to_string(),
                },
                options_token.span,
            )
        })?;
        let declarator = self
            .registry
            .resolve(&type_token.lexeme)
            .map_err(|err| ParseError::configuration(err, type_token.span))?;

        let namespace = self.current_namespace().to_string();
        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        let mut target = ScopedTarget {
            table: &mut *self.namespaces,
            cleanups: &mut scope.cleanups,
        };
        declare::install(declarator, self.registry, &mut target, &namespace, &raw)
            .map_err(|err| ParseError::configuration(err, options_token.span))
    }

    fn parse_expr(&mut self) -> Result<(Expr, bool), ParseError> {
        let Some(token) = self.next()? else {
            return Err(ParseError::unexpected_end_of_input(["expression"]));
        };
        match token.kind {
            TokenKind::Number => Ok((Expr::Literal(number_value(token.lexeme)), false)),
            TokenKind::Str => Ok((Expr::Literal(Value::String(token.lexeme)), false)),
            TokenKind::LeftParen => {
                if self.peek_is(TokenKind::RightParen)? {
                    self.next()?;
                    return Ok((Expr::Literal(Value::Unit), false));
                }
                let inner = self.nested(token.span, |parser| {
                    let (inner, _) = parser.parse_expr()?;
                    parser.expect(TokenKind::RightParen)?;
                    Ok(inner)
                })?;
                Ok((inner, false))
            }
            TokenKind::Name => self.parse_name(token),
            _ => Err(ParseError::unexpected_token(&token, ["expression"])),
        }
    }

    fn parse_name(&mut self, token: Token) -> Result<(Expr, bool), ParseError> {
        match token.lexeme.as_str() {
            DO => return Ok((Expr::Block(self.parse_block()?), true)),
            PACKAGE | VERSION | DECLARE => {
                return Err(ParseError::unexpected_token(&token, ["expression"]));
            }
            CURRENT_NAMESPACE => {
                let namespace = self.current_namespace().to_string();
                return Ok((Expr::Literal(Value::String(namespace)), false));
            }
            _ => {}
        }

        let keyword = self
            .namespaces
            .keyword(self.current_namespace(), &token.lexeme)
            .cloned();
        if let Some(keyword) = keyword {
            let namespace = self.current_namespace().to_string();
            let mut site = ParseSite {
                buffer: &mut self.buffer,
                offset: self.lexer.offset().as_usize(),
                keyword: &token.lexeme,
                namespace: &namespace,
                pending: &mut self.pending,
            };
            keyword
                .expand(&mut site)
                .map_err(|err| ParseError::declaration(err, token.span))?;
        }

        if !self.peek_is(TokenKind::LeftParen)? {
            return Ok((Expr::Literal(Value::String(token.lexeme)), false));
        }
        let function = self.resolve_function(&token)?;
        let open = self.expect(TokenKind::LeftParen)?;
        let args = self.nested(open.span, Self::parse_args)?;
        Ok((
            Expr::Call {
                function,
                args,
                span: token.span,
            },
            false,
        ))
    }

    fn resolve_function(&self, token: &Token) -> Result<Function, ParseError> {
        let (namespace, name) = match token.lexeme.rsplit_once(NAMESPACE_SEPARATOR) {
            Some((namespace, name)) => (namespace, name),
            None => (self.current_namespace(), token.lexeme.as_str()),
        };
        self.namespaces
            .function(namespace, name)
            .cloned()
            .ok_or_else(|| ParseError::undefined_function(token))
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.peek_is(TokenKind::RightParen)? {
            self.next()?;
            return Ok(args);
        }
        loop {
            let (arg, _) = self.parse_expr()?;
            args.push(arg);
            match self.next()? {
                Some(token) if token.kind == TokenKind::Comma => {}
                Some(token) if token.kind == TokenKind::RightParen => return Ok(args),
                Some(token) => {
                    return Err(ParseError::unexpected_token(
                        &token,
                        [TokenKind::Comma.label(), TokenKind::RightParen.label()],
                    ));
                }
                None => {
                    return Err(ParseError::unexpected_end_of_input([
                        TokenKind::Comma.label(),
                        TokenKind::RightParen.label(),
                    ]));
                }
            }
        }
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::LeftBrace)?;
        self.nested(open.span, |parser| parser.parse_block_body(open.span))
    }

    fn parse_block_body(&mut self, open: Span) -> Result<Block, ParseError> {
        let finalizer = self.take_finalizer(open.start.as_usize());
        let namespace = self.current_namespace().to_string();
        self.scopes.push(LexicalScope::new(namespace, finalizer));

        let statements = self.parse_statements(true)?;
        self.expect(TokenKind::RightBrace)?;
        if let Some(scope) = self.scopes.pop() {
            self.close_scope(scope);
        }
        Ok(Block { statements })
    }

    /// Runs `parse` one nesting level deeper, failing at the configured
    /// limit instead of exhausting the stack.
    fn nested<T>(
        &mut self,
        open: Span,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.options.max_nesting {
            return Err(ParseError::nesting_limit(open, self.options.max_nesting));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn take_finalizer(&mut self, anchor: usize) -> Option<ScopeEndFinalizer> {
        let index = self.pending.iter().position(|(at, _)| *at == anchor)?;
        Some(self.pending.swap_remove(index).1)
    }

    fn close_scope(&mut self, mut scope: LexicalScope) {
        scope.unwind(self.namespaces);
        let Some(mut finalizer) = scope.finalizer else {
            return;
        };

        let keyword = finalizer.keyword().to_string();
        let namespace = self.current_namespace().to_string();
        let offset = self.lexer.offset().as_usize();
        trace!("closing {keyword} scope at byte {offset}");
        let mut site = ParseSite {
            buffer: &mut self.buffer,
            offset,
            keyword: &keyword,
            namespace: &namespace,
            pending: &mut self.pending,
        };
        finalizer.fire(&mut site);
    }
}

/// Returns `true` for words the parser treats as statements or blocks.
pub fn is_reserved(word: &str) -> bool {
    matches!(word, PACKAGE | VERSION | DECLARE | DO)
}

fn number_value(lexeme: String) -> Value {
    if lexeme.bytes().all(|byte| byte.is_ascii_digit()) {
        if let Ok(value) = lexeme.parse::<i64>() {
            return Value::Integer(value);
        }
    }
    Value::String(lexeme)
}

/// The parser's state as seen by a keyword.
struct ParseSite<'a> {
    buffer: &'a mut String,
    offset: usize,
    keyword: &'a str,
    namespace: &'a str,
    pending: &'a mut Vec<(usize, ScopeEndFinalizer)>,
}

impl DeclarationSite for ParseSite<'_> {
    fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    fn buffer_mut(&mut self) -> &mut String {
        &mut *self.buffer
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn keyword(&self) -> &str {
        self.keyword
    }

    fn insignificant_len(&self, at: usize) -> usize {
        lexer::insignificant_len(self.buffer.as_str(), at)
    }

    fn innermost_namespace(&self) -> &str {
        self.namespace
    }

    fn register_block_finalizer(&mut self, anchor: usize, finalizer: ScopeEndFinalizer) {
        self.pending.push((anchor, finalizer));
    }
}
