use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::SpecError;

/// A single declared parameter of a component: its name and, optionally, the value used when a
/// caller leaves it out.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    name: String,
    default: Option<Value>,
}

impl ParamSpec {
    /// A parameter with no default. If the caller leaves it out it resolves as absent.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter that falls back to `default` when the caller leaves it out.
    pub fn with_default(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
        }
    }

    /// The prop name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared default, if any
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// The ordered set of parameters a component accepts.
///
/// Names are unique: every way of building a `PropSpec` rejects duplicates with
/// [`SpecError::DuplicateParameter`]. Once built, a spec is immutable.
///
/// ```
/// # use propkit::*;
/// # use serde_json::json;
/// let spec = PropSpec::builder()
///     .param("title")
///     .param_with_default("posterSrc", json!("placeholder.png"))
///     .param("genres")
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.names().collect::<Vec<_>>(), ["title", "posterSrc", "genres"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropSpec {
    params: Vec<ParamSpec>,
}

impl PropSpec {
    /// Build a spec from parameters in declaration order
    pub fn new(params: impl IntoIterator<Item = ParamSpec>) -> Result<Self, SpecError> {
        let params: Vec<ParamSpec> = params.into_iter().collect();
        let mut seen = IndexSet::with_capacity(params.len());
        for param in &params {
            if !seen.insert(param.name()) {
                return Err(SpecError::DuplicateParameter(param.name.clone()));
            }
        }
        Ok(Self { params })
    }

    /// Start building a spec one parameter at a time
    pub fn builder() -> PropSpecBuilder {
        PropSpecBuilder::default()
    }

    /// Build a spec from a list of prop names plus a separate table of defaults.
    ///
    /// The names are declared first, in order. A key of `defaults` that is not in `names` is
    /// declared afterwards (in table order) so its default still applies.
    ///
    /// ```
    /// # use propkit::*;
    /// # use serde_json::json;
    /// let defaults = json!({ "posterSrc": "placeholder.png" });
    /// let spec = PropSpec::from_defaults(
    ///     ["title", "posterSrc", "genres"],
    ///     defaults.as_object().unwrap().clone(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(spec.get("posterSrc").and_then(ParamSpec::default), Some(&json!("placeholder.png")));
    /// assert_eq!(spec.get("title").and_then(ParamSpec::default), None);
    /// ```
    pub fn from_defaults<I, S>(names: I, mut defaults: Map<String, Value>) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut params: Vec<ParamSpec> = names
            .into_iter()
            .map(Into::into)
            .map(|name| match defaults.remove(&name) {
                Some(default) => ParamSpec::with_default(name, default),
                None => ParamSpec::required(name),
            })
            .collect();
        params.extend(
            defaults
                .into_iter()
                .map(|(name, default)| ParamSpec::with_default(name, default)),
        );
        Self::new(params)
    }

    /// The declared parameters in declaration order
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// The declared names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(ParamSpec::name)
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Whether `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The number of declared parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters are declared
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Collects parameters for a [`PropSpec`]. Duplicates are only reported by [`build`].
///
/// [`build`]: PropSpecBuilder::build
#[derive(Debug, Default)]
pub struct PropSpecBuilder {
    params: Vec<ParamSpec>,
}

impl PropSpecBuilder {
    /// Declare a parameter without a default
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamSpec::required(name));
        self
    }

    /// Declare a parameter with a default
    pub fn param_with_default(mut self, name: impl Into<String>, default: Value) -> Self {
        self.params.push(ParamSpec::with_default(name, default));
        self
    }

    /// Finish the spec
    pub fn build(self) -> Result<PropSpec, SpecError> {
        PropSpec::new(self.params)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_keeps_declaration_order() {
        let spec = PropSpec::builder()
            .param("b")
            .param_with_default("a", json!(1))
            .param("c")
            .build()
            .unwrap();
        assert_eq!(spec.names().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = PropSpec::builder()
            .param("title")
            .param_with_default("title", json!("x"))
            .build()
            .unwrap_err();
        assert_eq!(err, SpecError::DuplicateParameter("title".to_owned()));
    }

    #[test]
    fn defaults_table_applies_to_listed_names() {
        let defaults = json!({ "posterSrc": "placeholder.png" });
        let spec = PropSpec::from_defaults(
            ["title", "posterSrc"],
            defaults.as_object().unwrap().clone(),
        )
        .unwrap();
        assert_eq!(
            spec.params(),
            [
                ParamSpec::required("title"),
                ParamSpec::with_default("posterSrc", json!("placeholder.png")),
            ]
        );
    }

    #[test]
    fn defaults_table_declares_unlisted_keys_last() {
        let defaults = json!({ "rating": 0, "title": "Untitled" });
        let spec =
            PropSpec::from_defaults(["title"], defaults.as_object().unwrap().clone()).unwrap();
        assert_eq!(spec.names().collect::<Vec<_>>(), ["title", "rating"]);
        assert_eq!(spec.get("rating").and_then(ParamSpec::default), Some(&json!(0)));
    }

    #[test]
    fn defaults_table_rejects_repeated_names() {
        let err = PropSpec::from_defaults(["genres", "genres"], Map::new()).unwrap_err();
        assert_eq!(err, SpecError::DuplicateParameter("genres".to_owned()));
    }

    #[test]
    fn empty_spec_is_allowed() {
        let spec = PropSpec::new(Vec::new()).unwrap();
        assert!(spec.is_empty());
        assert!(!spec.contains("title"));
    }
}
