use crate::Definition;
use std::slice;

/// Definitions declared by a build task in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definitions {
    definitions: Vec<Definition>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unset definition to be populated by a caller.
    pub fn create(&mut self) -> &mut Definition {
        self.definitions.push(Definition::new());

        let index = self.definitions.len() - 1;
        &mut self.definitions[index]
    }

    pub fn push(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    pub fn iter(&self) -> slice::Iter<'_, Definition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<Definition> for Definitions {
    fn from_iter<T: IntoIterator<Item = Definition>>(iterator: T) -> Self {
        Self {
            definitions: iterator.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = &'a Definition;
    type IntoIter = slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
