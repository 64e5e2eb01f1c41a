//! Grammar-directed interpretation.
//!
//! Every production consumes tokens according to the grammar and, while
//! effects are enabled, performs its effect inline. There is no syntax tree:
//! loops re-run their condition and body by re-parsing token slices.

use crate::{
    Vec,
    cursor::Cursor,
    errors::{SyntaxError, SyntaxErrorKind},
    lexer::{LexError, Token, TokenKind},
    options::{EvaluatorOptions, Grammar},
    symbols::SymbolTable,
};
use alloc::string::ToString;

type Result<T> = core::result::Result<T, SyntaxError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            BinaryOp::Add => lhs.wrapping_add(rhs),
            BinaryOp::Sub => lhs.wrapping_sub(rhs),
            BinaryOp::Mul => lhs.wrapping_mul(rhs),
        }
    }

    /// Operators joining the terms of an `expr`.
    fn expr_level(grammar: Grammar, kind: TokenKind) -> Option<Self> {
        match (grammar, kind) {
            (_, TokenKind::Plus) => Some(BinaryOp::Add),
            (Grammar::Full, TokenKind::Minus) => Some(BinaryOp::Sub),
            (Grammar::Reduced, TokenKind::Star) => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    /// Operators joining the factors of a `term`.
    fn term_level(grammar: Grammar, kind: TokenKind) -> Option<Self> {
        match (grammar, kind) {
            (Grammar::Full, TokenKind::Star) => Some(BinaryOp::Mul),
            (Grammar::Reduced, TokenKind::Minus) => Some(BinaryOp::Sub),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelOp {
    Eq,
    Ne,
    Lt,
    Gt,
}

impl RelOp {
    fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::EqEq => Some(RelOp::Eq),
            TokenKind::NotEq => Some(RelOp::Ne),
            TokenKind::Less => Some(RelOp::Lt),
            TokenKind::Greater => Some(RelOp::Gt),
            _ => None,
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> bool {
        match self {
            RelOp::Eq => lhs == rhs,
            RelOp::Ne => lhs != rhs,
            RelOp::Lt => lhs < rhs,
            RelOp::Gt => lhs > rhs,
        }
    }
}

/// State of one pass over one line.
pub(crate) struct Interpreter<'a> {
    grammar: Grammar,
    max_depth: usize,
    cursor: Cursor<'a>,
    symbols: SymbolTable<'a>,
    /// When false, productions check and consume tokens but neither write
    /// variables nor emit output.
    effects: bool,
    output: Vec<i64>,
    depth: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(tokens: &'a [Token<'a>], options: &EvaluatorOptions, effects: bool) -> Self {
        Self {
            grammar: options.grammar,
            max_depth: options.max_depth,
            cursor: Cursor::new(tokens),
            symbols: SymbolTable::new(),
            effects,
            output: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the whole line as a program and return what it printed.
    ///
    /// Succeeds only if every token was consumed.
    pub fn run(mut self) -> Result<Vec<i64>> {
        self.program()?;
        if !self.cursor.is_at_end() {
            return Err(self.trailing_input());
        }
        Ok(self.output)
    }

    // program := {declaration} {statement}
    fn program(&mut self) -> Result<()> {
        if self.grammar.requires_declarations() {
            while self.cursor.peek_kind() == TokenKind::Integer {
                self.declaration()?;
            }
        }
        while self.starts_statement() {
            self.statement()?;
        }
        Ok(())
    }

    fn starts_statement(&self) -> bool {
        let kind = self.cursor.peek_kind();
        match self.grammar {
            Grammar::Full => matches!(
                kind,
                TokenKind::Ident | TokenKind::Print | TokenKind::While | TokenKind::If
            ),
            Grammar::Reduced => kind != TokenKind::End,
        }
    }

    // declaration := "integer" IDENT ";"
    //
    // Declarations only appear ahead of all statements, never inside a
    // branch, so they take effect in every pass.
    fn declaration(&mut self) -> Result<()> {
        self.expect(TokenKind::Integer)?;
        let name = self.identifier()?;
        self.expect(TokenKind::Semicolon)?;
        self.symbols.declare(name.lexeme);
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        match self.cursor.peek_kind() {
            TokenKind::Print => self.print(),
            TokenKind::While if self.grammar == Grammar::Full => self.while_loop(),
            TokenKind::If if self.grammar == Grammar::Full => self.if_else(),
            kind if self.grammar.is_identifier(kind) => self.assignment(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// Statements up to the end of the current slice.
    fn statements(&mut self) -> Result<()> {
        while !self.cursor.is_at_end() {
            self.statement()?;
        }
        Ok(())
    }

    // assignment := IDENT "=" expr ";"
    fn assignment(&mut self) -> Result<()> {
        let target = self.identifier()?;
        if self.grammar.requires_declarations() && !self.symbols.is_declared(target.lexeme) {
            return Err(undeclared(target));
        }
        self.expect(TokenKind::Assign)?;
        let value = self.expr()?;
        self.expect(TokenKind::Semicolon)?;

        if self.effects {
            self.symbols.write(target.lexeme, value);
        }
        Ok(())
    }

    // print := "print" expr ";"
    fn print(&mut self) -> Result<()> {
        self.expect(TokenKind::Print)?;
        let value = self.expr()?;
        self.expect(TokenKind::Semicolon)?;

        if self.effects {
            self.output.push(value);
        }
        Ok(())
    }

    // while := "while" "(" bexpr ")" "do" "{" {statement} "}" ";"
    fn while_loop(&mut self) -> Result<()> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.cursor;
        self.condition()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Do)?;
        self.expect(TokenKind::LBrace)?;

        let Some(tokens) = self.cursor.take_block() else {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnterminatedBlock,
                Some(self.cursor.span()),
            ));
        };
        let body = Cursor::with_end(tokens, self.cursor.span());
        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Semicolon)?;

        if !self.effects {
            return self.sub_parse(body, false, Self::statements);
        }

        let mut iterations = 0u64;
        while self.sub_parse(condition, true, Self::condition)? {
            self.sub_parse(body, true, Self::statements)?;
            iterations += 1;
            tracing::trace!(iterations, "loop body finished");
        }
        Ok(())
    }

    // if-else := "if" "(" bexpr ")" "{" {statement} "}" "else" "{" {statement} "}" ";"
    //
    // Both branches are always parsed; only the taken one has effects.
    fn if_else(&mut self) -> Result<()> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.condition()?;
        self.expect(TokenKind::RParen)?;

        let outer = self.effects;
        self.branch(outer && condition)?;
        self.expect(TokenKind::Else)?;
        self.branch(outer && !condition)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    fn branch(&mut self, effects: bool) -> Result<()> {
        self.expect(TokenKind::LBrace)?;
        self.nested(|p| {
            p.with_effects(effects, |p| {
                while !matches!(p.cursor.peek_kind(), TokenKind::RBrace | TokenKind::End) {
                    p.statement()?;
                }
                Ok(())
            })
        })?;
        self.expect(TokenKind::RBrace)?;
        Ok(())
    }

    // bexpr := IDENT relop IDENT
    //
    // A pure read of the symbol table, evaluated whatever the effects mode.
    fn condition(&mut self) -> Result<bool> {
        let lhs = self.variable()?;
        let op = RelOp::from_kind(self.cursor.peek_kind())
            .ok_or_else(|| self.unexpected("a relational operator"))?;
        self.cursor.advance()?;
        let rhs = self.variable()?;
        Ok(op.apply(lhs, rhs))
    }

    fn expr(&mut self) -> Result<i64> {
        let mut value = self.term()?;
        while let Some(op) = BinaryOp::expr_level(self.grammar, self.cursor.peek_kind()) {
            self.cursor.advance()?;
            let rhs = self.term()?;
            value = op.apply(value, rhs);
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<i64> {
        let mut value = self.factor()?;
        while let Some(op) = BinaryOp::term_level(self.grammar, self.cursor.peek_kind()) {
            self.cursor.advance()?;
            let rhs = self.factor()?;
            value = op.apply(value, rhs);
        }
        Ok(value)
    }

    // factor := ["-"] ( NUMBER | IDENT | "(" expr ")" )
    fn factor(&mut self) -> Result<i64> {
        let negate = self.cursor.match_kind(TokenKind::Minus);
        let token = self.cursor.peek();

        let value = match token.kind {
            TokenKind::Number => {
                self.cursor.advance()?;
                number(token)?
            }
            TokenKind::LParen => {
                self.cursor.advance()?;
                let value = self.nested(Self::expr)?;
                self.expect(TokenKind::RParen)?;
                value
            }
            kind if self.grammar.is_identifier(kind) => self.variable()?,
            _ => return Err(self.unexpected("an expression")),
        };

        Ok(if negate { value.wrapping_neg() } else { value })
    }

    /// Consume an identifier and read its value.
    fn variable(&mut self) -> Result<i64> {
        let token = self.identifier()?;
        if self.grammar.requires_declarations() {
            self.symbols.get(token.lexeme).ok_or_else(|| undeclared(token))
        } else {
            Ok(self.symbols.get_or_zero(token.lexeme))
        }
    }

    fn identifier(&mut self) -> Result<&'a Token<'a>> {
        if self.grammar.is_identifier(self.cursor.peek_kind()) {
            self.cursor.advance()
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token<'a>> {
        if self.cursor.peek_kind() == kind {
            self.cursor.advance()
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Run `parse` over another token slice with the given effects mode.
    ///
    /// The cursor and mode in place before the call are restored whatever
    /// `parse` returns.
    fn sub_parse<R>(
        &mut self,
        cursor: Cursor<'a>,
        effects: bool,
        parse: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        let saved = core::mem::replace(&mut self.cursor, cursor);
        tracing::trace!(position = saved.position(), effects, "entering sub-parse");
        let result = self.nested(|p| p.with_effects(effects, parse));
        self.cursor = saved;
        result
    }

    /// Run `parse` with the effects mode replaced, restoring it afterwards.
    fn with_effects<R>(
        &mut self,
        effects: bool,
        parse: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        let saved = core::mem::replace(&mut self.effects, effects);
        let result = parse(self);
        self.effects = saved;
        result
    }

    /// Run `parse` one nesting level deeper.
    fn nested<R>(&mut self, parse: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::new(
                SyntaxErrorKind::NestingTooDeep {
                    max_depth: self.max_depth,
                },
                Some(self.cursor.span()),
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        let token = self.cursor.peek();
        let kind = match token.kind {
            TokenKind::End => SyntaxErrorKind::UnexpectedEnd { expected },
            TokenKind::Unknown(reason) => SyntaxErrorKind::InvalidToken {
                lexeme: token.lexeme.to_string(),
                reason,
            },
            _ => SyntaxErrorKind::UnexpectedToken {
                expected,
                found: token.lexeme.to_string(),
            },
        };
        SyntaxError::new(kind, Some(self.cursor.span()))
    }

    fn trailing_input(&self) -> SyntaxError {
        let token = self.cursor.peek();
        match token.kind {
            TokenKind::Unknown(_) => self.unexpected("end of input"),
            _ => SyntaxError::new(
                SyntaxErrorKind::TrailingInput {
                    found: token.lexeme.to_string(),
                },
                Some(token.span),
            ),
        }
    }
}

fn number(token: &Token<'_>) -> Result<i64> {
    token.lexeme.parse().map_err(|_| {
        SyntaxError::new(
            SyntaxErrorKind::InvalidToken {
                lexeme: token.lexeme.to_string(),
                reason: LexError::OversizedNumber,
            },
            Some(token.span),
        )
    })
}

fn undeclared(token: &Token<'_>) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::Undeclared {
            name: token.lexeme.to_string(),
        },
        Some(token.span),
    )
}
