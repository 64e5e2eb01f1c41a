#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{string::String, vec, vec::Vec};

pub mod cursor;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod options;
pub mod symbols;

pub use errors::{SYNTAX_ERROR_MESSAGE, SyntaxError, SyntaxErrorKind};
pub use evaluator::{EvalResult, Pass, evaluate, evaluate_with_options, run_line, run_pass};
pub use lexer::{Span, Token, TokenKind, tokenize};
pub use options::{EvaluatorOptions, Grammar};
