mod definition;
mod definitions;
mod error;
mod parse;
mod render;

pub use definition::*;
pub use definitions::*;
pub use error::*;
pub use parse::*;
pub use render::*;
