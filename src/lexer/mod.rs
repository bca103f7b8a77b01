use std::str::Chars;

mod scanner;
mod tokenizer;

pub use tokenizer::decode_string;

/// Lexical classes produced by the tokenizer.
///
/// `Error` marks input that cannot begin any valid token (or an unterminated
/// string / malformed number). Turning it into a hard failure is the parser's
/// decision; the lexer itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Error,

    // --- literals ---
    True,
    False,
    Null,
    String,
    Number,

    // --- structure ---
    Comma,
    Colon,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
}

impl TokenKind {
    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Eof => "end-of-input",
            TokenKind::Error => "error",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
        }
    }
}

/// A token and its source span. Tokens carry no decoded payload; the parser
/// slices the source through [`Token::text`] when it needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub length: usize,
}

impl Token {
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.start + self.length]
    }
}

pub struct Lexer<'a> {
    src: &'a str,
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut lexer = Lexer {
            src,
            input: src.chars(),
            peek: None,
            offset: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Produce the next token. Total: yields `Eof` at the end of input and
    /// `Error` tokens for unlexable input, never an `Err` and never a panic.
    pub fn next_token(&mut self) -> Token {
        tokenizer::next_token(self)
    }
}
