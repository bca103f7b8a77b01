use indexmap::IndexMap;

use super::*;
use crate::lexer::{TokenKind, decode_string};
use crate::value::Number;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Value, JsonError> {
    let value = parse_value(parser)?;

    let token = parser.bump();
    if token.kind != TokenKind::Eof {
        return Err(unexpected(parser, token, "expected end of input after the root value"));
    }

    Ok(value)
}

fn unexpected(parser: &Parser, token: Token, message: &str) -> JsonError {
    match token.kind {
        TokenKind::Eof => JsonError::UnexpectedEof {
            message: message.to_string(),
            offset: token.start,
        },
        TokenKind::Error => JsonError::UnexpectedToken {
            message: format!("'{}' is not a valid JSON token", token.text(parser.src())),
            token: token.kind.label().to_string(),
            offset: token.start,
            length: token.length,
            hint: Some(message.to_string()),
        },
        _ => JsonError::UnexpectedToken {
            message: message.to_string(),
            token: token.kind.label().to_string(),
            offset: token.start,
            length: token.length,
            hint: None,
        },
    }
}

fn parse_value(parser: &mut Parser) -> Result<Value, JsonError> {
    match parser.peek().kind {
        TokenKind::True => {
            parser.bump();
            Ok(Value::Bool(true))
        }
        TokenKind::False => {
            parser.bump();
            Ok(Value::Bool(false))
        }
        TokenKind::Null => {
            parser.bump();
            Ok(Value::Null)
        }
        TokenKind::Number => parse_number(parser),
        TokenKind::String => parse_string(parser).map(Value::String),
        TokenKind::OpenBrace => parse_object(parser),
        TokenKind::OpenBracket => parse_array(parser),
        _ => {
            let token = parser.bump();
            Err(unexpected(parser, token, "expected a value"))
        }
    }
}

fn parse_string(parser: &mut Parser) -> Result<String, JsonError> {
    let token = parser.bump();
    decode_string(parser.src(), token).ok_or_else(|| JsonError::UnexpectedToken {
        message: "string token does not decode to valid text".to_string(),
        token: token.kind.label().to_string(),
        offset: token.start,
        length: token.length,
        hint: Some("Check \\u escapes for lone surrogates".into()),
    })
}

/// Classify and parse a numeric literal from its token text. A fraction or
/// exponent forces the double-only classification; a plain integer literal
/// stays an integer unless it overflows i64, in which case it degrades to a
/// double.
fn parse_number(parser: &mut Parser) -> Result<Value, JsonError> {
    let token = parser.bump();
    let text = token.text(parser.src());

    let number = if text.contains(['.', 'e', 'E']) {
        text.parse::<f64>().ok().map(Number::Float)
    } else {
        match text.parse::<i64>() {
            Ok(i) => Some(Number::Int(i)),
            Err(_) => text.parse::<f64>().ok().map(Number::Float),
        }
    };

    match number {
        Some(n) => Ok(Value::Number(n)),
        None => Err(unexpected(parser, token, "malformed number literal")),
    }
}

fn parse_object(parser: &mut Parser) -> Result<Value, JsonError> {
    parser.bump(); // consume '{'
    let mut members = IndexMap::new();

    if parser.peek().kind == TokenKind::CloseBrace {
        parser.bump();
        return Ok(Value::Object(members));
    }

    loop {
        let key_token = parser.peek();
        if key_token.kind != TokenKind::String {
            let token = parser.bump();
            return Err(unexpected(parser, token, "expected a quoted key name"));
        }

        let key = parse_string(parser)?;
        if members.contains_key(&key) {
            return Err(JsonError::DuplicateKey {
                key,
                offset: key_token.start,
                length: key_token.length,
            });
        }

        let colon = parser.bump();
        if colon.kind != TokenKind::Colon {
            return Err(unexpected(parser, colon, "expected ':' after key name"));
        }

        let value = parse_value(parser)?;
        members.insert(key, value);

        let sep = parser.bump();
        match sep.kind {
            // Next iteration requires a key, so a trailing comma fails there
            TokenKind::Comma => {}
            TokenKind::CloseBrace => break,
            _ => return Err(unexpected(parser, sep, "expected ',' or '}' after member")),
        }
    }

    Ok(Value::Object(members))
}

fn parse_array(parser: &mut Parser) -> Result<Value, JsonError> {
    parser.bump(); // consume '['
    let mut items = Vec::new();

    if parser.peek().kind == TokenKind::CloseBracket {
        parser.bump();
        return Ok(Value::Array(items));
    }

    loop {
        items.push(parse_value(parser)?);

        let sep = parser.bump();
        match sep.kind {
            TokenKind::Comma => {}
            TokenKind::CloseBracket => break,
            _ => return Err(unexpected(parser, sep, "expected ',' or ']' after element")),
        }
    }

    Ok(Value::Array(items))
}
