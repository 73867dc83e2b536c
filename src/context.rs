use crate::{infrastructure::Console, run::Options};
use tokio::sync::Mutex;

pub struct Context {
    console: Mutex<Box<dyn Console + Send + Sync + 'static>>,
    options: Options,
}

impl Context {
    pub fn new(console: impl Console + Send + Sync + 'static, options: Options) -> Self {
        Self {
            console: Mutex::new(Box::new(console)),
            options,
        }
    }

    pub fn console(&self) -> &Mutex<Box<dyn Console + Send + Sync>> {
        &self.console
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
