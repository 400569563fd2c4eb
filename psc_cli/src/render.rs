//! Terminal rendering of highlighted source
//!
//! Walks the token list and repaints the original text with ANSI
//! truecolor escapes. Gaps between tokens (whitespace was dropped as
//! trivia) come straight from the source, so the rendered output is
//! byte-for-byte the input plus color codes. On a failed analysis the
//! valid prefix is painted normally and the offending character gets
//! the error style.

use crate::theme::{hex_to_rgb, Theme};
use psc_lexer::{AnalysisReport, TokenKind};

const RESET: &str = "\x1b[0m";

fn fg_escape(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn bg_escape(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

fn paint(text: &str, color: &str, out: &mut String) {
    out.push_str(&fg_escape(color));
    out.push_str(text);
    out.push_str(RESET);
}

fn paint_error(text: &str, theme: &Theme, out: &mut String) {
    out.push_str(&fg_escape(&theme.error_fg));
    out.push_str(&bg_escape(&theme.error_bg));
    out.push_str("\x1b[4m");
    out.push_str(text);
    out.push_str(RESET);
}

/// Render an analysis report as highlighted text.
///
/// With `use_color` off the output is exactly the source text.
pub fn render(report: &AnalysisReport, theme: &Theme, use_color: bool) -> String {
    let source = report.source_map.source.as_str();

    if !use_color {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len() * 2);
    let mut cursor = 0usize;

    for token in report.tokens() {
        let start = token.position.offset;
        let end = start + token.lexeme.len();

        // whitespace gap between tokens, unpainted
        if start > cursor {
            out.push_str(&source[cursor..start]);
        }

        match token.kind {
            TokenKind::Newline | TokenKind::Eof => out.push_str(&token.lexeme),
            kind => paint(&token.lexeme, theme.color_for(kind), &mut out),
        }
        cursor = end;
    }

    if let Some(error) = report.error() {
        let rest = &source[cursor..];
        // skip the whitespace between the last token and the offender
        let mut chars = rest.char_indices();
        let mut bad_start = None;
        for (idx, ch) in &mut chars {
            if ch == ' ' || ch == '\t' {
                continue;
            }
            bad_start = Some(idx);
            break;
        }

        match bad_start {
            Some(idx) => {
                out.push_str(&rest[..idx]);
                let bad_char = match rest[idx..].chars().next() {
                    Some(c) => c,
                    None => {
                        log::warn!(
                            "error at {}:{} has no character to mark",
                            error.line(),
                            error.column()
                        );
                        return out;
                    }
                };
                let bad_end = idx + bad_char.len_utf8();
                paint_error(&rest[idx..bad_end], theme, &mut out);
                out.push_str(&rest[bad_end..]);
            }
            None => out.push_str(rest),
        }
    } else if cursor < source.len() {
        out.push_str(&source[cursor..]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use psc_lexer::analyze_source_default;

    #[test]
    fn test_plain_render_is_identity() {
        let source = "Algoritmo Hola\n    Escribir \"hola\"\nFinAlgoritmo\n";
        let report = analyze_source_default(source).unwrap();
        let rendered = render(&report, &Theme::default(), false);
        assert_eq!(rendered, source);
    }

    #[test]
    fn test_colored_render_preserves_text() {
        let source = "Si x >= 1 Entonces // ok\n";
        let report = analyze_source_default(source).unwrap();
        let rendered = render(&report, &Theme::default(), true);

        let stripped = strip_ansi(&rendered);
        assert_eq!(stripped, source);
        assert!(rendered.contains("\x1b[38;2;"));
    }

    #[test]
    fn test_error_char_gets_error_style() {
        let source = "Leer x @ y";
        let report = analyze_source_default(source).unwrap();
        let rendered = render(&report, &Theme::default(), true);

        assert_eq!(strip_ansi(&rendered), source);
        // error background marks the offending character
        assert!(rendered.contains("\x1b[48;2;"));
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }
}
