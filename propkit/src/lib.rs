//! Props with defaults for reusable components
//!
//! Propkit resolves the props a caller passes to a component against the parameters the component
//! declares. A supplied value is used as is, a missing one falls back to the declared default, and
//! a prop with neither is left absent for whoever reads it to deal with.
//!
//! Resolution itself never fails. Absence only turns into an error where a value is actually
//! needed: in [`ResolvedBag::require`], or when the resolved props are parsed into a typed struct.
//!
//! With Propkit, you can go from a caller's props to a rendered component in three steps:
//! ```
//! # use propkit::*;
//! # use propkit_macros::Props;
//! // 1. Create a struct representing the props of the component and derive/implement the
//! // Props trait. Use the `default_value` attribute for fallback values and `Option` for props that
//! // may stay absent.
//! #[derive(Debug, Props)]
//! struct MovieCardProps {
//!     title: String,
//!     #[name = "posterSrc"]
//!     #[default_value = "placeholder.png"]
//!     poster_src: String,
//!     genres: Option<Vec<String>>,
//! }
//!
//! // 2. Implement the Component trait to define what the component turns its props into
//! struct MovieCard;
//!
//! impl Component for MovieCard {
//!     type Props = MovieCardProps;
//!     type Output = String;
//!
//!     fn render(&self, props: &MovieCardProps) -> String {
//!         let genres = props.genres.as_deref().unwrap_or_default().join(", ");
//!         format!("{} [{}] {}", props.title, props.poster_src, genres)
//!     }
//! }
//!
//! // 3. Pass the caller's props
//! let input = props! { "title" => "Mad Max", "genres" => ["Action", "Thriller"] };
//! let card = render(&MovieCard, &input).unwrap();
//! assert_eq!(card, "Mad Max [placeholder.png] Action, Thriller");
//! ```

#![warn(missing_docs)]

mod bag;
/// This module contains logic for parsing resolved props into rust types
pub mod parsable;
mod resolve;
mod spec;

pub use bag::{InputBag, ResolvedBag};
pub use resolve::resolve;
pub use serde_json::Value;
pub use spec::{ParamSpec, PropSpec, PropSpecBuilder};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// An error in the declaration of a component's props
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// Two parameters share a name
    #[error("prop `{0}` is declared more than once")]
    DuplicateParameter(String),
}

/// An error that occured while reading a resolved prop
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    /// The prop was not supplied and has no default
    #[error("prop `{0}` was not supplied and has no default")]
    MissingProp(String),
    /// The prop has a value of the wrong shape
    #[error("prop `{name}` is invalid: expected {expected}")]
    InvalidProp {
        /// The prop name
        name: String,
        /// A description of the accepted shape
        expected: &'static str,
    },
}

/// This trait declares the props of a component and parses resolved props into a struct.
///
/// For most use cases, just derive it via the macros crate:
/// ```
/// # use propkit::*;
/// # use propkit_macros::Props;
/// #[derive(Debug, Props)]
/// struct GreetingProps {
///     name: String,
///     #[default_value = "Hello"]
///     greeting: String,
/// }
///
/// let props = GreetingProps::from_input(&props! { "name" => "Ada" }).unwrap();
/// assert_eq!(props.greeting, "Hello");
/// ```
/// Every field must implement the [`parsable::ParsableProp`] trait - see the docs for the trait
/// for a list of types supported out of the box.
///
/// You may also provide attributes on the fields:
///
/// | Attribute     | Explanation                                       | Examples                                              |
/// |---------------|---------------------------------------------------|-------------------------------------------------------|
/// | name          | The prop name, if it differs from the field name  | `#[name = "posterSrc"]`                               |
/// | default_value | The value used when the prop is not supplied      | `#[default_value = 3]` `#[default_value(["Action"])]` |
///
/// The parenthesised form of `default_value` accepts anything [`serde_json::json!`] does.
pub trait Props: Sized {
    /// The parameters this component declares
    fn spec() -> &'static PropSpec;

    /// Try to build the props from an already resolved bag
    fn from_resolved(resolved: &ResolvedBag<'_>) -> Result<Self, PropError>;

    /// Resolve `input` against [`Props::spec`] and build the props from the result
    fn from_input(input: &InputBag) -> Result<Self, PropError> {
        Self::from_resolved(&resolve(Self::spec(), input))
    }
}

/// This trait connects resolved props to whatever turns them into visible output.
///
/// Propkit does not render anything itself: `Output` is up to the implementor, be it a string,
/// a markup tree or a draw list.
pub trait Component {
    /// The props this component accepts
    type Props: Props;
    /// What rendering produces
    type Output;

    /// Render the component for one set of props
    fn render(&self, props: &Self::Props) -> Self::Output;
}

/// Resolve and parse `input` for `component`, then render it
pub fn render<C: Component>(component: &C, input: &InputBag) -> Result<C::Output, PropError> {
    let props = C::Props::from_input(input)?;
    Ok(component.render(&props))
}

/// Build an [`InputBag`] from `"name" => value` pairs.
///
/// Values go through [`serde_json::json!`], so anything it accepts as a single token tree works.
/// Wrap other expressions, such as negative numbers, in parentheses.
///
/// Examples:
/// ```
/// # use propkit::*;
/// # use serde_json::json;
/// let empty = props! {};
/// assert!(empty.is_empty());
///
/// let input = props! {
///     "title" => "Mad Max",
///     "genres" => ["Action", "Thriller"],
///     "offset" => (-1),
/// };
/// assert_eq!(input.get("genres"), Some(&json!(["Action", "Thriller"])));
/// assert_eq!(input.get("offset"), Some(&json!(-1)));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::InputBag::new()
    };
    ($($name:literal => $value:tt),+ $(,)?) => {{
        let mut bag = $crate::InputBag::new();
        $(
            bag.insert($name, $crate::__private::serde_json::json!($value));
        )+
        bag
    }};
}
