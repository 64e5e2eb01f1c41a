//! Shared helpers for the program tests.
//!
//! Each `test_case!` evaluates one line and checks either the printed values
//! or that the line is rejected. Rejected lines are also checked to render as
//! the single driver error line.

#[allow(unused_imports)]
pub use intlang::{EvaluatorOptions, Grammar, evaluate_with_options, render_result};

macro_rules! test_case {
    ($name:ident, grammar: $grammar:ident, input: $input:expr, printed: [$($value:expr),* $(,)?] $(,)?) => {
        #[test]
        fn $name() {
            let options = cases::EvaluatorOptions::new(cases::Grammar::$grammar);
            pretty_assertions::assert_eq!(
                cases::evaluate_with_options($input, &options),
                Ok(vec![$($value),*]),
            );
        }
    };

    ($name:ident, grammar: $grammar:ident, input: $input:expr, syntax_error $(,)?) => {
        #[test]
        fn $name() {
            let options = cases::EvaluatorOptions::new(cases::Grammar::$grammar);
            let result = cases::evaluate_with_options($input, &options);
            assert!(result.is_err(), "expected a syntax error, got {:?}", result);
            pretty_assertions::assert_eq!(
                cases::render_result(&result).as_deref(),
                Some("Syntax Error!"),
            );
        }
    };

    ($name:ident, input: $input:expr, $($rest:tt)*) => {
        test_case!($name, grammar: Full, input: $input, $($rest)*);
    };
}
