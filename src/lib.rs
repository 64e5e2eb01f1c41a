//! intlang - a line-at-a-time interpreter for a tiny integer language
//!
//! # Overview
//!
//! Every input line is an independent program. Variables are 64-bit signed
//! integers; statements are assignment, `print`, `while … do { }` and
//! `if { } else { }`. A line either prints an ordered list of values or is
//! rejected as a whole with a syntax error; a rejected line never prints
//! anything.
//!
//! Tokens are separated by whitespace.
//!
//! # Quick Start
//!
//! ```
//! use intlang::{evaluate, render_outputs};
//!
//! let printed = evaluate("integer a ; integer b ; a = 1 ; \
//!                         if ( a > b ) { print a ; } else { print b ; } ;").unwrap();
//! assert_eq!(render_outputs(&printed).as_deref(), Some("1"));
//! ```
//!
//! # Configurations
//!
//! [`Grammar::Full`] is the complete language. [`Grammar::Reduced`] keeps
//! only assignment and `print`, evaluates `+` and `*` at one precedence level
//! above `-`, and reads unknown variables as 0:
//!
//! ```
//! use intlang::{EvaluatorOptions, Grammar, evaluate_with_options};
//!
//! let options = EvaluatorOptions::new(Grammar::Reduced);
//! let printed = evaluate_with_options("x = 2 + 3 * 4 ; print x ;", &options).unwrap();
//! assert_eq!(printed, [20]);
//! ```

mod error_renderer;

pub use error_renderer::{render_error, render_error_to, render_error_to_string_no_color};

// Re-export public API from intlang_core
pub use intlang_core::{
    EvalResult, EvaluatorOptions, Grammar, Pass, SYNTAX_ERROR_MESSAGE, Span, SyntaxError,
    SyntaxErrorKind, Token, TokenKind, evaluate, evaluate_with_options, run_line, run_pass,
    tokenize,
};
pub use intlang_core::{cursor, evaluator, lexer, options, symbols};

/// Format printed values the way the driver shows them: space separated on
/// one line, or nothing at all when no value was printed.
pub fn render_outputs(values: &[i64]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let parts: Vec<String> = values.iter().map(i64::to_string).collect();
    Some(parts.join(" "))
}

/// Format the driver line for an evaluation result.
///
/// Rejected lines render as [`SYNTAX_ERROR_MESSAGE`].
pub fn render_result(result: &EvalResult) -> Option<String> {
    match result {
        Ok(values) => render_outputs(values),
        Err(_) => Some(SYNTAX_ERROR_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_outputs() {
        assert_eq!(render_outputs(&[]), None);
        assert_eq!(render_outputs(&[7]).as_deref(), Some("7"));
        assert_eq!(render_outputs(&[1, -2, 3]).as_deref(), Some("1 -2 3"));
    }

    #[test]
    fn test_render_result() {
        assert_eq!(
            render_result(&evaluate("print 1 ; print 2 ;")).as_deref(),
            Some("1 2")
        );
        assert_eq!(render_result(&evaluate("integer x ;")), None);
        assert_eq!(
            render_result(&evaluate("print 1 ; oops")).as_deref(),
            Some("Syntax Error!")
        );
    }
}
