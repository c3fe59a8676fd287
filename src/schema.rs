use std::collections::BTreeMap;

use crate::model::{Declared, ValueType};

/// Immutable mapping from variable name to declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entries: BTreeMap<String, Declared>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from textual tags.
    ///
    /// Unrecognized tags are retained and surface as
    /// [`Error::UnsupportedType`](crate::Error::UnsupportedType) on lookup.
    pub fn from_tags<I, K, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: AsRef<str>,
    {
        tags.into_iter()
            .fold(Self::new(), |schema, (name, tag)| schema.tag(name, tag.as_ref()))
    }

    pub fn string(self, name: impl Into<String>) -> Self {
        self.entry(name, ValueType::String)
    }

    pub fn number(self, name: impl Into<String>) -> Self {
        self.entry(name, ValueType::Number)
    }

    pub fn boolean(self, name: impl Into<String>) -> Self {
        self.entry(name, ValueType::Boolean)
    }

    /// Declare `name` with `value_type`, replacing any earlier declaration.
    pub fn entry(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.entries.insert(name.into(), Declared::Known(value_type));
        self
    }

    /// Declare `name` with a textual tag.
    pub fn tag(mut self, name: impl Into<String>, tag: &str) -> Self {
        let declared = match tag.parse::<ValueType>() {
            Ok(value_type) => Declared::Known(value_type),
            Err(_) => Declared::Unrecognized(tag.to_owned()),
        };
        self.entries.insert(name.into(), declared);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Declared> {
        self.entries.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, ValueType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, ValueType)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |schema, (name, value_type)| {
                schema.entry(name, value_type)
            })
    }
}
