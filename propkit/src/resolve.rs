use log::{debug, log_enabled, trace, Level};

use crate::{InputBag, PropSpec, ResolvedBag};

/// Resolve a caller's props against a component's declared parameters.
///
/// For each declared parameter, in declaration order:
/// 1. a value supplied in `input` is used as is,
/// 2. otherwise the declared default is used,
/// 3. otherwise the prop resolves as absent.
///
/// Keys in `input` that the spec does not declare are ignored. Falsy values such as `0`, `""`,
/// `[]` or `null` count as supplied and never fall back to the default.
///
/// Resolution never fails. A prop left absent is reported by whatever reads it, see
/// [`ResolvedBag::require`] and [`Props::from_resolved`](crate::Props::from_resolved).
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
/// let input = props! { "title" => "Mad Max", "genres" => [] };
///
/// let resolved = resolve(&spec, &input);
/// assert_eq!(resolved.get("title"), Some(&json!("Mad Max")));
/// assert_eq!(resolved.get("posterSrc"), Some(&json!("placeholder.png")));
/// assert_eq!(resolved.get("genres"), Some(&json!([])));
/// ```
pub fn resolve<'a>(spec: &'a PropSpec, input: &'a InputBag) -> ResolvedBag<'a> {
    let mut resolved = ResolvedBag::with_capacity(spec.len());
    for param in spec.params() {
        let value = input.get(param.name()).or_else(|| {
            let default = param.default();
            if default.is_some() {
                trace!("prop `{}` not supplied, using its default", param.name());
            }
            default
        });
        resolved.push(param.name(), value);
    }

    if log_enabled!(Level::Trace) {
        for key in input.keys().filter(|key| !spec.contains(key)) {
            trace!("ignoring undeclared prop `{}`", key);
        }
    }
    debug!(
        "resolved {} props ({} absent)",
        resolved.len(),
        resolved.absent().count()
    );
    resolved
}
