/// A named value declared by a `define` entry of a build task.
///
/// Both fields start out unset and hold whatever was written last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definition {
    name: Option<String>,
    value: Option<String>,
}

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<impl Into<String>>) {
        self.name = name.map(Into::into);
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<impl Into<String>>) {
        self.value = value.map(Into::into);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_unset_definition() {
        let definition = Definition::new();

        assert_eq!(definition.name(), None);
        assert_eq!(definition.value(), None);
    }

    #[test]
    fn set_name_and_value() {
        let mut definition = Definition::new();

        definition.set_name(Some("DEBUG"));
        definition.set_value(Some("1"));

        assert_eq!(definition.name(), Some("DEBUG"));
        assert_eq!(definition.value(), Some("1"));
    }

    #[test]
    fn set_value_only() {
        let mut definition = Definition::new();

        definition.set_value(Some("x"));

        assert_eq!(definition.name(), None);
        assert_eq!(definition.value(), Some("x"));
    }

    #[test]
    fn overwrite_name() {
        let mut definition = Definition::new();

        definition.set_name(Some("a"));
        definition.set_name(Some("b"));

        assert_eq!(definition.name(), Some("b"));
    }

    #[test]
    fn unset_value() {
        let mut definition = Definition::new();

        definition.set_value(Some("x"));
        definition.set_value(None::<String>);

        assert_eq!(definition.value(), None);
    }

    #[test]
    fn keep_empty_strings() {
        let mut definition = Definition::new();

        definition.set_name(Some(""));
        definition.set_value(Some(String::new()));

        assert_eq!(definition.name(), Some(""));
        assert_eq!(definition.value(), Some(""));
    }

    #[test]
    fn keep_fields_independent() {
        let mut definition = Definition::new();

        definition.set_name(Some("FOO"));
        definition.set_value(Some("1"));
        definition.set_name(Some("BAR"));

        assert_eq!(definition.value(), Some("1"));

        definition.set_value(Some("2"));

        assert_eq!(definition.name(), Some("BAR"));
    }

    #[test]
    fn round_trip_arbitrary_strings() {
        for string in ["", " ", "=", "a b", "ÄÖÜ", "-DX=1", "\n"] {
            let mut definition = Definition::new();

            definition.set_name(Some(string));
            definition.set_value(Some(string));

            assert_eq!(definition.name(), Some(string));
            assert_eq!(definition.value(), Some(string));
        }
    }
}
