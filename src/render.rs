mod error;

pub use self::error::RenderError;
use crate::{Definition, Definitions};
use itertools::Itertools;

const DEFINE_FLAG: &str = "-D";

pub fn preprocessor_argument(definition: &Definition) -> Result<String, RenderError> {
    let name = definition
        .name()
        .ok_or_else(|| RenderError::NameNotSet(definition.value().map(ToOwned::to_owned)))?;

    Ok(if let Some(value) = definition.value() {
        format!("{DEFINE_FLAG}{name}={value}")
    } else {
        format!("{DEFINE_FLAG}{name}")
    })
}

pub fn preprocessor_arguments(definitions: &Definitions) -> Result<Vec<String>, RenderError> {
    definitions.iter().map(preprocessor_argument).collect()
}

/// Renders definitions as a string appended to a compiler command line, with
/// each argument preceded by a space.
pub fn define_string(definitions: &Definitions) -> Result<String, RenderError> {
    Ok(preprocessor_arguments(definitions)?
        .iter()
        .map(|argument| format!(" {argument}"))
        .join(""))
}
