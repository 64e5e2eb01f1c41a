//! The single error taxonomy of the evaluator.
//!
//! Lexical malformation, grammar mismatches, use of undeclared variables and
//! unterminated blocks are all reported as a [`SyntaxError`]. Callers render
//! every one of them identically (see [`SYNTAX_ERROR_MESSAGE`]); the kind and
//! span only feed diagnostics.

use crate::String;
use crate::lexer::{LexError, Span};
use thiserror::Error;

/// What the driver prints for any rejected line.
pub const SYNTAX_ERROR_MESSAGE: &str = "Syntax Error!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Offending token, if the error can be pinned to one.
    pub span: Option<Span>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid token `{lexeme}`: {reason}")]
    InvalidToken { lexeme: String, reason: LexError },

    #[error("variable `{name}` is used before being declared")]
    Undeclared { name: String },

    #[error("block is missing its closing `}}`")]
    UnterminatedBlock,

    #[error("unexpected `{found}` after the end of the program")]
    TrailingInput { found: String },

    #[error("nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

impl SyntaxErrorKind {
    /// Short stable code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            SyntaxErrorKind::UnexpectedToken { .. } => "S001",
            SyntaxErrorKind::UnexpectedEnd { .. } => "S002",
            SyntaxErrorKind::InvalidToken { .. } => "S003",
            SyntaxErrorKind::Undeclared { .. } => "S004",
            SyntaxErrorKind::UnterminatedBlock => "S005",
            SyntaxErrorKind::TrailingInput { .. } => "S006",
            SyntaxErrorKind::NestingTooDeep { .. } => "S007",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            SyntaxErrorKind::Undeclared { .. } => {
                Some("declare it first with `integer <name> ;`")
            }
            SyntaxErrorKind::InvalidToken { .. } => {
                Some("tokens must be separated by whitespace")
            }
            SyntaxErrorKind::UnterminatedBlock => Some("add the missing closing brace"),
            _ => None,
        }
    }
}
