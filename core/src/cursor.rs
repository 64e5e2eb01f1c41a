//! Read position over an immutable token slice.
//!
//! A cursor is `Copy`: saving one is just keeping a copy, and restoring it is
//! assigning the copy back. Nested sub-parses rely on this.

use crate::errors::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Span, Token, TokenKind};

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    /// Reported position once the slice is exhausted.
    end: Span,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        let end = tokens
            .last()
            .map(|t| Span::new(t.span.end, t.span.end))
            .unwrap_or_default();
        Self::with_end(tokens, end)
    }

    /// Cursor over a sub-slice whose end should be reported at `end`, e.g.
    /// the closing brace of a block.
    pub fn with_end(tokens: &'a [Token<'a>], end: Span) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
        }
    }

    /// Current token. Past the end of the slice this is [`Token::END`].
    pub fn peek(&self) -> &'a Token<'a> {
        self.tokens.get(self.pos).unwrap_or(&Token::END)
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::End
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Span of the current token, or of the end position past the slice.
    pub fn span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => self.end,
        }
    }

    /// Return the current token and move past it.
    ///
    /// Advancing at end of input is an error; the cursor does not move.
    pub fn advance(&mut self) -> Result<&'a Token<'a>, SyntaxError> {
        let token = self.peek();
        if token.kind == TokenKind::End {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedEnd { expected: "a token" },
                Some(self.span()),
            ));
        }
        self.pos += 1;
        Ok(token)
    }

    /// Advance only if the current token is exactly `kind`.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::End && self.peek_kind() == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Take the tokens of a block whose opening `{` was just consumed.
    ///
    /// Scans forward counting brace depth. On success the returned slice holds
    /// everything strictly inside the braces and the cursor is left on the
    /// matching `}`. Returns `None` (cursor unmoved) if the input ends before
    /// the depth returns to zero.
    pub fn take_block(&mut self) -> Option<&'a [Token<'a>]> {
        let tokens = self.tokens;
        let mut depth = 1usize;
        for (offset, token) in tokens.get(self.pos..)?.iter().enumerate() {
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        let start = self.pos;
                        self.pos += offset;
                        return Some(&tokens[start..self.pos]);
                    }
                }
                TokenKind::End => return None,
                _ => {}
            }
        }
        None
    }
}
