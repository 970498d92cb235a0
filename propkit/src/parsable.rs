use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::PropError;

/// This trait converts one resolved prop into a rust type.
///
/// For a prop that may be absent, use [`Option<T>`] to make it optional.
/// The following types are implemented out of the box:
///
/// | JSON shape    | Rust type                        |
/// |---------------|----------------------------------|
/// | string        | [`String`]                       |
/// | boolean       | [`bool`]                         |
/// | integer       | [`i64`], [`u64`]                 |
/// | number        | [`f64`]                          |
/// | array         | [`Vec<T>`]                       |
/// | object        | [`Map<String, Value>`]           |
/// | anything      | [`Value`], [`Json<T>`]           |
pub trait ParsableProp: Sized {
    /// Try to parse this from the resolved value of the prop called `name`.
    /// The prop might have resolved as absent, hence the optional input - if this is a
    /// non-optional type we would normally return a [`PropError::MissingProp`] in this case.
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError>;
}

fn present<'a>(name: &str, value: Option<&'a Value>) -> Result<&'a Value, PropError> {
    value.ok_or_else(|| PropError::MissingProp(name.to_owned()))
}

fn invalid(name: &str, expected: &'static str) -> PropError {
    PropError::InvalidProp {
        name: name.to_owned(),
        expected,
    }
}

impl ParsableProp for String {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        match present(name, value)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(invalid(name, "a string")),
        }
    }
}

impl ParsableProp for bool {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        present(name, value)?
            .as_bool()
            .ok_or_else(|| invalid(name, "a boolean"))
    }
}

impl ParsableProp for i64 {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        present(name, value)?
            .as_i64()
            .ok_or_else(|| invalid(name, "a signed integer"))
    }
}

impl ParsableProp for u64 {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        present(name, value)?
            .as_u64()
            .ok_or_else(|| invalid(name, "an unsigned integer"))
    }
}

impl ParsableProp for f64 {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        present(name, value)?
            .as_f64()
            .ok_or_else(|| invalid(name, "a number"))
    }
}

impl ParsableProp for Value {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        present(name, value).cloned()
    }
}

impl ParsableProp for Map<String, Value> {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        match present(name, value)? {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(invalid(name, "an object")),
        }
    }
}

impl<T: ParsableProp> ParsableProp for Vec<T> {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        match present(name, value)? {
            Value::Array(items) => items
                .iter()
                .map(|item| T::parse_from(name, Some(item)))
                .collect(),
            _ => Err(invalid(name, "an array")),
        }
    }
}

/// Absent props and `null` both become `None`.
impl<T: ParsableProp> ParsableProp for Option<T> {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(T::parse_from(name, Some(value))?)),
        }
    }
}

/// A prop of any shape that serde can deserialize
///
/// ```
/// # use propkit::parsable::*;
/// # use serde_json::json;
/// #[derive(Debug, PartialEq, serde::Deserialize)]
/// struct Rating {
///     score: f64,
///     votes: u64,
/// }
///
/// let value = json!({ "score": 8.1, "votes": 1200 });
/// let Json(rating) = Json::<Rating>::parse_from("rating", Some(&value)).unwrap();
/// assert_eq!(rating, Rating { score: 8.1, votes: 1200 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T: DeserializeOwned> ParsableProp for Json<T> {
    fn parse_from(name: &str, value: Option<&Value>) -> Result<Self, PropError> {
        serde_json::from_value(present(name, value)?.clone())
            .map(Json)
            .map_err(|_| invalid(name, std::any::type_name::<T>()))
    }
}
