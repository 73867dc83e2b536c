use crate::{ParseError, RenderError};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Other(String),
    Parse(ParseError),
    Render(RenderError),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Parse(error) => write!(formatter, "{}", error),
            Self::Render(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ParseError> for ApplicationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RenderError> for ApplicationError {
    fn from(error: RenderError) -> Self {
        Self::Render(error)
    }
}
