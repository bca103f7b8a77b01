use super::*;

/// Advance the character iterator and update the byte-offset cursor
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        lexer.offset += c.len_utf8();
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Skip insignificant whitespace between tokens.
///
/// Strict JSON whitespace only; comments are not part of the grammar and
/// fall through to the error-token path in the tokenizer.
pub(super) fn skip_whitespace(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                bump(lexer);
            }
            _ => break,
        }
    }
}

pub(super) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
