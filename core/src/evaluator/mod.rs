//! Two-pass, tree-less evaluator.
//!
//! A line is lexed once and then walked by the grammar productions directly.
//! Under [`Grammar::Full`] the walk happens twice: a validation pass with
//! effects disabled and a fresh symbol table, and only if that accepts the
//! whole line, an executing pass. A rejected line therefore never produces
//! partial output.
//!
//! ## Example
//!
//! ```
//! use intlang_core::evaluator::evaluate;
//!
//! let printed = evaluate("integer x ; x = 2 + 3 * 4 ; print x ;").unwrap();
//! assert_eq!(printed, [14]);
//!
//! assert!(evaluate("print y ;").is_err());
//! ```
//!
//! Evaluation state lives in a per-call interpreter, so independent lines
//! can be evaluated concurrently. A `while` whose condition never becomes
//! false does not return; bounding that is up to the caller.

mod eval;


use crate::{
    Vec,
    errors::SyntaxError,
    lexer::{Token, tokenize},
    options::{EvaluatorOptions, Grammar},
};
use eval::Interpreter;

/// Values printed by a line, in order, or the reason it was rejected.
pub type EvalResult = Result<Vec<i64>, SyntaxError>;

/// One traversal of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Check the grammar only; nothing is written or printed.
    Validate,
    /// Check the grammar and perform every effect.
    Execute,
}

/// Evaluate a line under the full grammar with default options.
pub fn evaluate(line: &str) -> EvalResult {
    evaluate_with_options(line, &EvaluatorOptions::default())
}

/// Lex and evaluate a line.
pub fn evaluate_with_options(line: &str, options: &EvaluatorOptions) -> EvalResult {
    let tokens = tokenize(line);
    run_line(&tokens, options)
}

/// Evaluate an already lexed line.
///
/// The token slice must come from [`tokenize`] or otherwise end with an
/// end-of-input token.
pub fn run_line<'a>(tokens: &'a [Token<'a>], options: &EvaluatorOptions) -> EvalResult {
    if options.grammar.validates_first() {
        run_pass(tokens, options, Pass::Validate)?;
    }
    run_pass(tokens, options, Pass::Execute)
}

/// Run a single pass over `tokens` with a fresh symbol table.
///
/// A [`Pass::Validate`] run always returns an empty output on success.
pub fn run_pass<'a>(tokens: &'a [Token<'a>], options: &EvaluatorOptions, pass: Pass) -> EvalResult {
    let interpreter = Interpreter::new(tokens, options, pass == Pass::Execute);
    let result = interpreter.run();

    match &result {
        Ok(output) => tracing::debug!(?pass, printed = output.len(), "pass accepted line"),
        Err(err) => tracing::debug!(?pass, %err, "pass rejected line"),
    }
    result
}

/// Whether a line is accepted, without running it.
pub fn is_valid(line: &str, grammar: Grammar) -> bool {
    let tokens = tokenize(line);
    run_pass(&tokens, &EvaluatorOptions::new(grammar), Pass::Validate).is_ok()
}
