use intlang::{Grammar, TokenKind, tokenize};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

fn color(grammar: Grammar, kind: TokenKind) -> Color {
    match kind {
        _ if grammar.is_identifier(kind) => Color::Red,
        TokenKind::Number => Color::Cyan,
        kind if kind.is_keyword() => Color::Magenta,
        TokenKind::Unknown(_) => Color::LightRed,
        TokenKind::LParen | TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace => {
            Color::Yellow
        }
        _ => Color::White,
    }
}

/// Colors each word of the line by its token kind.
pub struct Highlighter {
    grammar: Grammar,
}

impl Highlighter {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(Color::White);
        let mut curr_end = 0;

        for token in tokenize(line) {
            if token.kind == TokenKind::End {
                break;
            }
            if token.span.start > curr_end {
                output.push((plain, line[curr_end..token.span.start].to_string()));
            }
            let mut style = Style::new().fg(color(self.grammar, token.kind));
            if matches!(token.kind, TokenKind::Unknown(_)) {
                style = style.underline();
            }
            output.push((style, token.lexeme.to_string()));
            curr_end = token.span.end;
        }

        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }
        output
    }
}
