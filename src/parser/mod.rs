use crate::JsonError;
use crate::lexer::{Lexer, Token};
use crate::value::{Dynamic, Value};

mod grammar;

/// Recursive-descent parser with one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Token,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let peek = lexer.next_token();
        Self { lexer, peek }
    }

    pub(crate) fn bump(&mut self) -> Token {
        let curr = self.peek;
        self.peek = self.lexer.next_token();
        curr
    }

    pub(crate) fn peek(&self) -> Token {
        self.peek
    }

    pub(crate) fn src(&self) -> &'a str {
        self.lexer.src()
    }

    /// Parse one complete document: a single root value followed by
    /// end of input.
    pub fn parse_document(&mut self) -> Result<Value, JsonError> {
        grammar::parse_document(self)
    }
}

/// Parse `input` into a [`Value`] tree.
///
/// Total over all inputs: malformed text yields a root in the
/// [`Value::Exception`] variant carrying the [`JsonError`], never an `Err`
/// and never a panic. Callers either check [`Value::is_exception`] up front
/// or proceed through the safe accessors, which degrade to
/// [`Value::Invalid`].
pub fn parse(input: &str) -> Value {
    let mut parser = Parser::new(input);
    match parser.parse_document() {
        Ok(value) => value,
        Err(err) => Value::Exception(err),
    }
}

/// Parse `input` and convert the root into `T`.
///
/// Surfaces the parse's own [`JsonError`] if parsing failed, otherwise any
/// conversion failure.
pub fn parse_as<T>(input: &str) -> Result<T, JsonError>
where
    T: TryFrom<Value, Error = JsonError>,
{
    match parse(input) {
        Value::Exception(err) => Err(err),
        value => T::try_from(value),
    }
}

/// Parse `input` into a [`Dynamic`] for ad-hoc member/index navigation.
pub fn parse_dynamic(input: &str) -> Dynamic {
    Dynamic::new(parse(input))
}
