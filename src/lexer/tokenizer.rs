use std::str::Chars;

use super::scanner::{bump, is_hex_digit, skip_whitespace};
use super::*;

pub(super) fn next_token(lexer: &mut Lexer) -> Token {
    skip_whitespace(lexer);
    let start = lexer.offset;

    let kind = match lexer.peek {
        None => TokenKind::Eof,
        Some(',') => scan_symbol(lexer, TokenKind::Comma),
        Some(':') => scan_symbol(lexer, TokenKind::Colon),
        Some('{') => scan_symbol(lexer, TokenKind::OpenBrace),
        Some('}') => scan_symbol(lexer, TokenKind::CloseBrace),
        Some('[') => scan_symbol(lexer, TokenKind::OpenBracket),
        Some(']') => scan_symbol(lexer, TokenKind::CloseBracket),
        Some('"') => scan_string(lexer),
        Some(c) if c == '-' || c.is_ascii_digit() => scan_number(lexer),
        Some(c) if c.is_alphabetic() => scan_literal(lexer, start),
        Some(_) => {
            bump(lexer);
            TokenKind::Error
        }
    };

    Token {
        kind,
        start,
        length: lexer.offset - start,
    }
}

fn scan_symbol(lexer: &mut Lexer, kind: TokenKind) -> TokenKind {
    bump(lexer);
    kind
}

/// Scan a double-quoted string, validating escapes without decoding them.
///
/// An unterminated string, a raw control character, an unknown escape, or a
/// malformed `\uXXXX` all produce an `Error` token spanning from the opening
/// quote to wherever scanning stopped.
fn scan_string(lexer: &mut Lexer) -> TokenKind {
    bump(lexer); // consume opening '"'

    loop {
        match lexer.peek {
            None => return TokenKind::Error,
            Some('"') => {
                bump(lexer);
                return TokenKind::String;
            }
            Some('\\') => {
                bump(lexer);
                match lexer.peek {
                    Some('"') | Some('\\') | Some('/') | Some('b') | Some('f') | Some('n')
                    | Some('r') | Some('t') => {
                        bump(lexer);
                    }
                    Some('u') => {
                        bump(lexer);
                        for _ in 0..4 {
                            match lexer.peek {
                                Some(c) if is_hex_digit(c) => {
                                    bump(lexer);
                                }
                                _ => return TokenKind::Error,
                            }
                        }
                    }
                    _ => return TokenKind::Error,
                }
            }
            Some(c) if c < ' ' => return TokenKind::Error,
            Some(_) => {
                bump(lexer);
            }
        }
    }
}

/// Scan a numeric literal: optional sign, integer digits, optional fraction,
/// optional exponent. Classification into int/float happens in the parser
/// from the token text.
fn scan_number(lexer: &mut Lexer) -> TokenKind {
    if lexer.peek == Some('-') {
        bump(lexer);
    }

    if !scan_digits(lexer) {
        return TokenKind::Error;
    }

    if lexer.peek == Some('.') {
        bump(lexer);
        if !scan_digits(lexer) {
            return TokenKind::Error;
        }
    }

    if lexer.peek == Some('e') || lexer.peek == Some('E') {
        bump(lexer);
        if lexer.peek == Some('+') || lexer.peek == Some('-') {
            bump(lexer);
        }
        if !scan_digits(lexer) {
            return TokenKind::Error;
        }
    }

    TokenKind::Number
}

fn scan_digits(lexer: &mut Lexer) -> bool {
    let mut seen = false;
    while let Some(c) = lexer.peek {
        if c.is_ascii_digit() {
            seen = true;
            bump(lexer);
        } else {
            break;
        }
    }
    seen
}

/// Scan an alphanumeric run; only the exact literals `true`, `false`, and
/// `null` are valid. Anything else (e.g. an unquoted key) is an `Error`
/// token covering the whole run.
fn scan_literal(lexer: &mut Lexer, start: usize) -> TokenKind {
    while let Some(c) = lexer.peek {
        if c.is_alphanumeric() {
            bump(lexer);
        } else {
            break;
        }
    }

    match &lexer.src[start..lexer.offset] {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        _ => TokenKind::Error,
    }
}

/// Decode the text of a validated `String` token, resolving escapes and
/// combining `\uXXXX` surrogate pairs. Returns `None` when the token does not
/// denote a decodable string (e.g. a lone surrogate).
pub fn decode_string(src: &str, token: Token) -> Option<String> {
    if token.kind != TokenKind::String || token.length < 2 {
        return None;
    }

    let raw = &src[token.start + 1..token.start + token.length - 1];
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next()? {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                let unit = hex4(&mut chars)?;
                let scalar = if (0xD800..=0xDBFF).contains(&unit) {
                    // High surrogate: a low surrogate escape must follow
                    if chars.next()? != '\\' || chars.next()? != 'u' {
                        return None;
                    }
                    let low = hex4(&mut chars)?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return None;
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                out.push(char::from_u32(scalar)?);
            }
            _ => return None,
        }
    }

    Some(out)
}

fn hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
