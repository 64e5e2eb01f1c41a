//! Word-level lexer.
//!
//! A line is split on whitespace first; each word is then classified on its
//! own. Words that are not a keyword, operator, punctuation mark, number or
//! identifier become [`TokenKind::Unknown`] instead of aborting the line, so
//! lexical problems reach the caller through the same path as grammar errors.

use crate::Vec;
use core::fmt;
use logos::Logos;

/// Longest number literal or identifier accepted, in bytes.
pub const MAX_WORD_LEN: usize = 10;

/// Byte range of a token within its source line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Span> for core::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Why a word could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// Starts with a digit but contains something else.
    MalformedNumber,
    /// Starts with a lowercase letter but contains something else.
    MalformedIdentifier,
    OversizedNumber,
    OversizedIdentifier,
    /// Does not start like any known token.
    Unrecognized,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::MalformedNumber => write!(f, "number literals may only contain digits"),
            LexError::MalformedIdentifier => {
                write!(f, "identifiers may only contain lowercase letters")
            }
            LexError::OversizedNumber => {
                write!(f, "number literals are limited to {MAX_WORD_LEN} digits")
            }
            LexError::OversizedIdentifier => {
                write!(f, "identifiers are limited to {MAX_WORD_LEN} letters")
            }
            LexError::Unrecognized => write!(f, "unrecognized token"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    End,
    Ident,
    Number,

    // Keywords
    Integer,
    Print,
    While,
    Do,
    If,
    Else,

    // Operators
    Plus,
    Minus,
    Star,
    EqEq,
    NotEq,
    Less,
    Greater,
    Assign,

    // Punctuation
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Unknown(LexError),
}

impl TokenKind {
    /// Human readable description, used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::End => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Integer => "`integer`",
            TokenKind::Print => "`print`",
            TokenKind::While => "`while`",
            TokenKind::Do => "`do`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Less => "`<`",
            TokenKind::Greater => "`>`",
            TokenKind::Assign => "`=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Unknown(_) => "unknown token",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Print
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::If
                | TokenKind::Else
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A classified word. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl Token<'_> {
    /// End-of-input marker with no position, returned by cursors that run
    /// past their slice.
    pub const END: Token<'static> = Token {
        kind: TokenKind::End,
        lexeme: "",
        span: Span::new(0, 0),
    };
}

/// Shapes a single word can take. Only a match covering the whole word counts.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Word {
    #[token("integer")]
    Integer,
    #[token("print")]
    Print,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("if")]
    If,
    #[token("else")]
    Else,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("=")]
    Assign,

    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex("[0-9]+")]
    Number,
    #[regex("[a-z]+")]
    Ident,
}

impl From<Word> for TokenKind {
    fn from(word: Word) -> Self {
        match word {
            Word::Integer => TokenKind::Integer,
            Word::Print => TokenKind::Print,
            Word::While => TokenKind::While,
            Word::Do => TokenKind::Do,
            Word::If => TokenKind::If,
            Word::Else => TokenKind::Else,
            Word::Plus => TokenKind::Plus,
            Word::Minus => TokenKind::Minus,
            Word::Star => TokenKind::Star,
            Word::EqEq => TokenKind::EqEq,
            Word::NotEq => TokenKind::NotEq,
            Word::Less => TokenKind::Less,
            Word::Greater => TokenKind::Greater,
            Word::Assign => TokenKind::Assign,
            Word::Semicolon => TokenKind::Semicolon,
            Word::LParen => TokenKind::LParen,
            Word::RParen => TokenKind::RParen,
            Word::LBrace => TokenKind::LBrace,
            Word::RBrace => TokenKind::RBrace,
            Word::Number => TokenKind::Number,
            Word::Ident => TokenKind::Ident,
        }
    }
}

/// Classify one whitespace-free word.
pub fn classify(word: &str) -> TokenKind {
    let mut lex = Word::lexer(word);
    let whole = match lex.next() {
        Some(Ok(w)) if lex.span() == (0..word.len()) => Some(w),
        _ => None,
    };

    match whole {
        Some(Word::Number) if word.len() > MAX_WORD_LEN => {
            TokenKind::Unknown(LexError::OversizedNumber)
        }
        Some(Word::Ident) if word.len() > MAX_WORD_LEN => {
            TokenKind::Unknown(LexError::OversizedIdentifier)
        }
        Some(w) => w.into(),
        None => match word.bytes().next() {
            Some(b'0'..=b'9') => TokenKind::Unknown(LexError::MalformedNumber),
            Some(b'a'..=b'z') => TokenKind::Unknown(LexError::MalformedIdentifier),
            _ => TokenKind::Unknown(LexError::Unrecognized),
        },
    }
}

/// Split `line` on whitespace and classify every word.
///
/// The result always ends with a [`TokenKind::End`] token positioned at the
/// end of the line.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for (start, word) in words(line) {
        let kind = classify(word);
        if let TokenKind::Unknown(reason) = kind {
            tracing::debug!(word, start, %reason, "rejected word");
        }
        tokens.push(Token {
            kind,
            lexeme: word,
            span: Span::new(start, start + word.len()),
        });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        lexeme: "",
        span: Span::new(line.len(), line.len()),
    });
    tokens
}

/// Whitespace-delimited words with their byte offsets.
fn words(line: &str) -> impl Iterator<Item = (usize, &str)> {
    line.split_whitespace().map(move |word| {
        // `split_whitespace` yields subslices of `line`.
        let start = word.as_ptr() as usize - line.as_ptr() as usize;
        (start, word)
    })
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;
