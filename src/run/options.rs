#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub inline: bool,
    pub log_prefix: String,
}
