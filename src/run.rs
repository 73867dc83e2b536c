mod options;

pub use self::options::Options;
use crate::{context::Context, debug};
use define_task::{ApplicationError, Definitions, define_string, preprocessor_arguments};
use itertools::Itertools;

pub async fn run(context: &Context, definitions: &Definitions) -> Result<(), ApplicationError> {
    for definition in definitions {
        debug!(
            context,
            "definition {:?} = {:?}",
            definition.name(),
            definition.value()
        );
    }

    let output = if context.options().inline {
        define_string(definitions)? + "\n"
    } else {
        preprocessor_arguments(definitions)?
            .iter()
            .map(|argument| format!("{argument}\n"))
            .join("")
    };

    context
        .console()
        .lock()
        .await
        .write_stdout(output.as_bytes())
        .await?;

    debug!(context, "{} definitions rendered", definitions.len());

    Ok(())
}
