use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderError {
    NameNotSet(Option<String>),
}

impl Error for RenderError {}

impl Display for RenderError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::NameNotSet(Some(value)) => {
                write!(formatter, "name not set for definition of value \"{value}\"")
            }
            Self::NameNotSet(None) => write!(formatter, "name not set for definition"),
        }
    }
}
