use proc_macro2::{Delimiter, TokenStream, TokenTree};
use proc_macro_error::abort;
use quote::ToTokens;
use syn::{Attribute, Lit, Meta};

pub(crate) fn get_name(attrs: &[Attribute]) -> Option<String> {
    let mut names = attrs.iter().filter(|attr| attr.path.is_ident("name"));
    let attr = names.next()?;
    if let Some(extra) = names.next() {
        abort!(extra, "A prop can only have one \"name\" attribute");
    }

    match attr.parse_meta() {
        Ok(Meta::NameValue(value)) => match value.lit {
            Lit::Str(ref name) => Some(name.value()),
            _ => abort!(value.lit, "Prop names must be string literals"),
        },
        Ok(_) => abort!(
            attr,
            "Invalid \"name\" attribute. Attribute must be of the form #[name = \"value\"]"
        ),
        Err(_) => abort!(attr, "Invalid \"name\" attribute"),
    }
}

/// The body to hand to `serde_json::json!` for the field's default, if it has one.
/// Accepts `#[default_value = literal]` and `#[default_value(json body)]`.
pub(crate) fn get_default_value(attrs: &[Attribute]) -> Option<TokenStream> {
    let mut defaults = attrs
        .iter()
        .filter(|attr| attr.path.is_ident("default_value"));
    let attr = defaults.next()?;
    if let Some(extra) = defaults.next() {
        abort!(extra, "A prop can only have one \"default_value\" attribute");
    }

    let mut tokens = attr.tokens.clone().into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(TokenTree::Group(group)), None) if group.delimiter() == Delimiter::Parenthesis => {
            if group.stream().is_empty() {
                abort!(attr, "Empty \"default_value\" attribute");
            }
            Some(group.stream())
        }
        _ => match attr.parse_meta() {
            Ok(Meta::NameValue(value)) => Some(value.lit.into_token_stream()),
            _ => abort!(
                attr,
                "Invalid \"default_value\" attribute. Attribute must be of the form #[default_value = literal] or #[default_value(value)]"
            ),
        },
    }
}
