use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::PropError;

/// The props a caller passes to a component for one invocation.
///
/// Each entry is either a value or explicitly absent. An explicitly absent entry behaves exactly
/// like a missing key. Every JSON value counts as present, including `null`, `0`, `""` and `[]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputBag {
    entries: IndexMap<String, Option<Value>>,
}

impl InputBag {
    /// An empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(name.into(), Some(value));
        self
    }

    /// Mark `name` as explicitly not provided
    pub fn insert_absent(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// Builder-style [`insert`](InputBag::insert)
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style [`insert_absent`](InputBag::insert_absent)
    pub fn with_absent(mut self, name: impl Into<String>) -> Self {
        self.insert_absent(name);
        self
    }

    /// The supplied value, or `None` if `name` is missing or explicitly absent
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    /// Whether the bag has an entry for `name`, absent or not
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The entry names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// The number of entries, absent ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for InputBag {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for InputBag {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), Some(value)))
                .collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, Value)> for InputBag {
    fn extend<T: IntoIterator<Item = (K, Value)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// The outcome of [`resolve`](crate::resolve): every declared prop, in declaration order, mapped
/// to its final value or to absent.
///
/// The bag borrows from the [`InputBag`] and the [`PropSpec`](crate::PropSpec) it was resolved
/// from, so values are never copied and the bag cannot outlive either of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedBag<'a> {
    entries: IndexMap<&'a str, Option<&'a Value>>,
}

impl<'a> ResolvedBag<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'a str, value: Option<&'a Value>) {
        self.entries.insert(name, value);
    }

    /// The resolved value, or `None` if `name` resolved as absent or was never declared
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.entries.get(name).copied().flatten()
    }

    /// Whether `name` is one of the declared props
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether `name` is declared but has neither a supplied value nor a default
    pub fn is_absent(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(None))
    }

    /// The resolved value, or [`PropError::MissingProp`] if there is none.
    ///
    /// Use this where a consumer cannot go on without the value.
    ///
    /// ```
    /// # use propkit::*;
    /// let spec = PropSpec::builder().param("title").build().unwrap();
    /// let input = InputBag::new();
    /// let resolved = resolve(&spec, &input);
    ///
    /// assert_eq!(resolved.require("title"), Err(PropError::MissingProp("title".to_owned())));
    /// ```
    pub fn require(&self, name: &str) -> Result<&'a Value, PropError> {
        self.get(name)
            .ok_or_else(|| PropError::MissingProp(name.to_owned()))
    }

    /// Every declared prop with its resolved value, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Option<&'a Value>)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, *value))
    }

    /// The declared names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    /// The names that resolved as absent
    pub fn absent(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
    }

    /// The number of declared props
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the component declares no props
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A JSON object holding every present value. Absent props are left out.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .filter_map(|(name, value)| value.map(|value| ((*name).to_owned(), value.clone())))
                .collect(),
        )
    }
}
