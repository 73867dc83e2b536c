mod error;
mod parser;

pub use self::error::ParseError;
use crate::Definition;

/// Parses a definition in the form of `NAME[=VALUE]`.
pub fn parse_definition(source: &str) -> Result<Definition, ParseError> {
    Ok(parser::definition(source)?.1)
}
