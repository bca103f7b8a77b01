pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

pub use error::JsonError;
pub use parser::{parse, parse_as, parse_dynamic, Parser};
pub use value::{Cursor, Dynamic, Fields, Number, Value};
