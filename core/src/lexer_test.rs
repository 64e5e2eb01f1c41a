use super::*;

fn kinds(line: &str) -> Vec<TokenKind> {
    tokenize(line).iter().map(|t| t.kind).collect()
}

#[test]
fn test_keywords_and_punctuation() {
    assert_eq!(
        kinds("integer print while do if else ; ( ) { }"),
        [
            TokenKind::Integer,
            TokenKind::Print,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Semicolon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        kinds("+ - * == != < > ="),
        [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assign,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_identifiers_containing_keywords() {
    assert_eq!(classify("printer"), TokenKind::Ident);
    assert_eq!(classify("doo"), TokenKind::Ident);
    assert_eq!(classify("iff"), TokenKind::Ident);
    assert_eq!(classify("x"), TokenKind::Ident);
}

#[test]
fn test_length_limits() {
    assert_eq!(classify("1234567890"), TokenKind::Number);
    assert_eq!(
        classify("12345678901"),
        TokenKind::Unknown(LexError::OversizedNumber)
    );
    assert_eq!(classify("abcdefghij"), TokenKind::Ident);
    assert_eq!(
        classify("abcdefghijk"),
        TokenKind::Unknown(LexError::OversizedIdentifier)
    );
}

#[test]
fn test_malformed_words() {
    assert_eq!(classify("12a"), TokenKind::Unknown(LexError::MalformedNumber));
    assert_eq!(
        classify("x1"),
        TokenKind::Unknown(LexError::MalformedIdentifier)
    );
    assert_eq!(
        classify("print;"),
        TokenKind::Unknown(LexError::MalformedIdentifier)
    );
    assert_eq!(classify("Abc"), TokenKind::Unknown(LexError::Unrecognized));
    assert_eq!(classify("-5"), TokenKind::Unknown(LexError::Unrecognized));
    assert_eq!(classify("=="), TokenKind::EqEq);
    assert_eq!(classify("==="), TokenKind::Unknown(LexError::Unrecognized));
}

#[test]
fn test_unknown_words_do_not_stop_tokenizing() {
    assert_eq!(
        kinds("x = 1a ;"),
        [
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Unknown(LexError::MalformedNumber),
            TokenKind::Semicolon,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_spans_and_end_marker() {
    let tokens = tokenize("  x  = 10 ;");
    let spans: Vec<_> = tokens.iter().map(|t| (t.lexeme, t.span)).collect();
    assert_eq!(
        spans,
        [
            ("x", Span::new(2, 3)),
            ("=", Span::new(5, 6)),
            ("10", Span::new(7, 9)),
            (";", Span::new(10, 11)),
            ("", Span::new(11, 11)),
        ]
    );
}

#[test]
fn test_empty_and_blank_lines() {
    assert_eq!(kinds(""), [TokenKind::End]);
    assert_eq!(kinds(" \t "), [TokenKind::End]);
}
