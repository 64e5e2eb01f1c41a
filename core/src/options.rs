//! Configuration options for the evaluator.

use crate::lexer::TokenKind;

/// Which language configuration a line is evaluated under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Declarations, `while`, `if`/`else`, standard precedence.
    ///
    /// Variables must be declared before use. Lines are validated in a
    /// side-effect-free pass before they are executed.
    #[default]
    Full,

    /// Assignment and `print` only.
    ///
    /// `+` and `*` share one precedence level, binding looser than `-`.
    /// Unknown variables read as 0 and are created on first write, and only
    /// `print` is reserved. Evaluated in a single pass.
    Reduced,
}

impl Grammar {
    /// Whether a token of this kind may name a variable.
    pub fn is_identifier(self, kind: TokenKind) -> bool {
        match self {
            Grammar::Full => kind == TokenKind::Ident,
            Grammar::Reduced => {
                kind == TokenKind::Ident || (kind.is_keyword() && kind != TokenKind::Print)
            }
        }
    }

    /// Whether variables need a declaration before they can be read or
    /// assigned.
    pub fn requires_declarations(self) -> bool {
        self == Grammar::Full
    }

    /// Whether lines run a validation pass before the executing pass.
    pub fn validates_first(self) -> bool {
        self == Grammar::Full
    }
}

/// Configuration options for evaluating a line.
///
/// # Example
///
/// ```
/// use intlang_core::options::{EvaluatorOptions, Grammar};
///
/// let options = EvaluatorOptions {
///     grammar: Grammar::Reduced,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Language configuration.
    ///
    /// Default: [`Grammar::Full`]
    pub grammar: Grammar,

    /// Maximum nesting of parenthesised expressions and blocks.
    ///
    /// This bounds recursion in the parser only. Loop iterations are never
    /// limited.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl EvaluatorOptions {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            ..Default::default()
        }
    }
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            grammar: Grammar::Full,
            max_depth: 256,
        }
    }
}
