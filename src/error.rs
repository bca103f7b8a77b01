use std::fmt;

/// The main error type for JSON lexing, parsing, and conversion.
///
/// Parse-time errors never escape [`crate::parse`] as an `Err`; they are
/// carried inside [`crate::Value::Exception`] and inspected as data. Only the
/// conversion APIs return this type directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A token that the grammar did not allow at this point, including
    /// lexical error tokens (invalid characters, unterminated strings,
    /// malformed numbers).
    UnexpectedToken {
        message: String,
        /// Label of the offending token kind, e.g. "error" or "string".
        token: String,
        offset: usize,
        length: usize,
        hint: Option<String>,
    },
    /// Input ended while the grammar still expected more.
    UnexpectedEof {
        message: String,
        offset: usize,
    },
    /// Raised when an object repeats a member key.
    DuplicateKey {
        key: String,
        offset: usize,
        length: usize,
    },
    /// A value could not be converted to the requested target type.
    TypeError {
        message: String,
        hint: Option<String>,
    },
    /// A required record member had no corresponding object key.
    MissingKey {
        key: String,
    },
}

impl JsonError {
    /// Byte offset of the offending token, where one exists.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedToken { offset, .. }
            | JsonError::UnexpectedEof { offset, .. }
            | JsonError::DuplicateKey { offset, .. } => Some(*offset),
            JsonError::TypeError { .. } | JsonError::MissingKey { .. } => None,
        }
    }

    /// Byte length of the offending token, where one exists.
    pub fn length(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedToken { length, .. }
            | JsonError::DuplicateKey { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// Label of the offending token kind, where one exists.
    pub fn token(&self) -> Option<&str> {
        match self {
            JsonError::UnexpectedToken { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Helper for conversion failures with a consistent shape.
    pub fn type_error(message: impl Into<String>) -> Self {
        JsonError::TypeError {
            message: message.into(),
            hint: None,
        }
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::UnexpectedToken { message, token, offset, length, hint } =>
                write!(f, "[JSON] Unexpected {} token at offset {} (len {}): {}{}",
                    token, offset, length, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
                ),
            JsonError::UnexpectedEof { message, offset } =>
                write!(f, "[JSON] Unexpected end of input at offset {}: {}", offset, message),
            JsonError::DuplicateKey { key, offset, length } =>
                write!(f, "[JSON] Duplicate object key '{}' at offset {} (len {})", key, offset, length),
            JsonError::TypeError { message, hint } =>
                write!(f, "[JSON] Type Error: {}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
                ),
            JsonError::MissingKey { key } =>
                write!(f, "[JSON] Missing required key '{}'", key),
        }
    }
}

impl std::error::Error for JsonError {}
