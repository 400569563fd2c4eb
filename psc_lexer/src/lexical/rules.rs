//! Priority-ordered matching rules for the tokenizer
//!
//! Each matcher inspects the start of the remaining source text and
//! reports how many bytes it would consume. Maximal munch: every rule
//! takes the longest prefix it can. The analyzer tries the rules in
//! the order they appear in this file.

/// Two-character operators, longest first so `>=` wins over `>`.
const MULTI_CHAR_OPS: &[&str] = &[">=", "<=", "==", "!=", "<>", ":=", "&&", "||"];

const SINGLE_CHAR_OPS: &[char] = &['+', '-', '*', '/', '=', '>', '<', '^', ',', ';'];

/// Word operators, matched case-insensitively and only on a word boundary.
const WORD_OPS: &[&str] = &["and", "or", "not"];

const GROUP_CHARS: &[char] = &['(', ')', '[', ']', '{', '}'];

/// Accented vowels and enye admitted in identifiers.
const EXTRA_IDENT_LETTERS: &[char] = &[
    'Á', 'É', 'Í', 'Ó', 'Ú', 'á', 'é', 'í', 'ó', 'ú', 'Ñ', 'ñ',
];

pub(crate) fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || EXTRA_IDENT_LETTERS.contains(&ch)
}

pub(crate) fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

/// `\r\n` counts as a single newline event.
pub(crate) fn match_newline(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with('\r') || rest.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

/// Run of spaces and tabs. Newlines are handled by `match_newline`.
pub(crate) fn match_whitespace(rest: &str) -> Option<usize> {
    let len = rest
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    if len > 0 {
        Some(len)
    } else {
        None
    }
}

/// `//` up to (not including) the end of the line.
pub(crate) fn match_line_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with("//") {
        return None;
    }
    let body = &rest[2..];
    let end = body
        .find(|c| c == '\n' || c == '\r')
        .unwrap_or(body.len());
    Some(2 + end)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DelimitedMatch {
    /// Total bytes consumed, closing delimiter included.
    Complete(usize),
    Unterminated,
}

/// `/* ... */`, newlines allowed inside. Shortest close wins.
pub(crate) fn match_block_comment(rest: &str) -> Option<DelimitedMatch> {
    if !rest.starts_with("/*") {
        return None;
    }
    match rest[2..].find("*/") {
        Some(end) => Some(DelimitedMatch::Complete(2 + end + 2)),
        None => Some(DelimitedMatch::Unterminated),
    }
}

/// Double- or single-quoted string with backslash escapes. The closing
/// quote must appear on the same line as the opening one.
pub(crate) fn match_string(rest: &str) -> Option<DelimitedMatch> {
    let mut chars = rest.char_indices();
    let quote = match chars.next() {
        Some((_, c @ ('"' | '\''))) => c,
        _ => return None,
    };

    while let Some((idx, ch)) = chars.next() {
        match ch {
            c if c == quote => return Some(DelimitedMatch::Complete(idx + 1)),
            '\\' => {
                // escape consumes the next character, but a backslash
                // cannot carry the string across a line ending
                match chars.next() {
                    None | Some((_, '\n' | '\r')) => {
                        return Some(DelimitedMatch::Unterminated)
                    }
                    Some(_) => {}
                }
            }
            '\n' | '\r' => return Some(DelimitedMatch::Unterminated),
            _ => {}
        }
    }
    Some(DelimitedMatch::Unterminated)
}

/// Integer or decimal literal with an optional exponent. Accepts the
/// forms `123`, `45.67`, `.5`, `5.` and `1e9` / `2.5E-3`.
pub(crate) fn match_number(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut len = 0;

    let int_digits = count_digits(&bytes[len..]);
    len += int_digits;

    if len < bytes.len() && bytes[len] == b'.' {
        if int_digits > 0 {
            // `12.` and `12.34` both valid
            len += 1;
            len += count_digits(&bytes[len..]);
        } else {
            // `.5` needs at least one digit after the dot
            let frac = count_digits(&bytes[len + 1..]);
            if frac == 0 {
                return None;
            }
            len += 1 + frac;
        }
    } else if int_digits == 0 {
        return None;
    }

    // exponent is optional and only consumed when complete
    if len < bytes.len() && (bytes[len] == b'e' || bytes[len] == b'E') {
        let mut exp_len = 1;
        if len + exp_len < bytes.len() && (bytes[len + exp_len] == b'+' || bytes[len + exp_len] == b'-')
        {
            exp_len += 1;
        }
        let exp_digits = count_digits(&bytes[len + exp_len..]);
        if exp_digits > 0 {
            len += exp_len + exp_digits;
        }
    }

    Some(len)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

pub(crate) fn match_group(rest: &str) -> Option<usize> {
    let ch = rest.chars().next()?;
    if GROUP_CHARS.contains(&ch) {
        Some(ch.len_utf8())
    } else {
        None
    }
}

pub(crate) fn match_operator(rest: &str) -> Option<usize> {
    for op in MULTI_CHAR_OPS {
        if rest.starts_with(op) {
            return Some(op.len());
        }
    }

    let first = rest.chars().next()?;
    if SINGLE_CHAR_OPS.contains(&first) {
        return Some(first.len_utf8());
    }

    // and/or/not as words, case-insensitive, never as an identifier prefix
    for op in WORD_OPS {
        // get() rejects indices inside a multibyte character
        let prefix = match rest.get(..op.len()) {
            Some(p) => p,
            None => continue,
        };
        if prefix.eq_ignore_ascii_case(op) {
            let boundary = rest[op.len()..]
                .chars()
                .next()
                .map_or(true, |c| !is_ident_continue(c));
            if boundary {
                return Some(op.len());
            }
        }
    }

    None
}

pub(crate) fn match_identifier(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, ch)) if is_ident_start(ch) => {}
        _ => return None,
    }
    for (idx, ch) in chars {
        if !is_ident_continue(ch) {
            return Some(idx);
        }
    }
    Some(rest.len())
}
