use crate::utility;
use itertools::Itertools;
use proc_macro::TokenStream;
use proc_macro_error::abort;
use quote::{format_ident, quote, ToTokens};
use std::collections::HashSet;
use syn::{DataStruct, Field, Generics, Ident};

/// For each prop, we need three sections of code:
/// - param_spec: Declare the prop (and its default) in the component's PropSpec
/// - parse_fetch: Parse the prop from the resolved bag into a variable
/// - parse_struct_item: Add the field to the resulting struct
#[derive(Debug)]
pub struct PropTokenSections {
    pub prop_name: String,
    pub param_spec: proc_macro2::TokenStream,
    pub parse_fetch: proc_macro2::TokenStream,
    pub parse_struct_item: proc_macro2::TokenStream,
}

fn prop_token_sections_from_field(field: &Field) -> PropTokenSections {
    let field_ident = field.ident.as_ref().unwrap_or_else(|| {
        abort!(field.ty, "Unnamed struct fields are not supported for props");
    });
    let prop_name = utility::get_name(field.attrs.as_slice())
        .unwrap_or_else(|| field_ident.to_string().trim_start_matches("r#").to_owned());

    let param_spec = match utility::get_default_value(field.attrs.as_slice()) {
        Some(default) => quote! {
            ::propkit::ParamSpec::with_default(
                #prop_name,
                ::propkit::__private::serde_json::json!(#default),
            )
        },
        None => quote! {
            ::propkit::ParamSpec::required(#prop_name)
        },
    };

    // Locals get a prefix so a field can't shadow the bag or another local
    let local = format_ident!("__prop_{}", field_ident);
    let field_type = field.ty.to_token_stream();
    PropTokenSections {
        param_spec,
        parse_fetch: quote! {
            let #local = <#field_type as ::propkit::parsable::ParsableProp>::parse_from(#prop_name, __propkit_resolved.get(#prop_name))?;
        },
        parse_struct_item: quote! {
            #field_ident: #local,
        },
        prop_name,
    }
}

pub fn props_for_struct_data(data: &DataStruct) -> Vec<PropTokenSections> {
    let props: Vec<PropTokenSections> = match data.fields {
        syn::Fields::Named(_) => data
            .fields
            .iter()
            .map(prop_token_sections_from_field)
            .collect(),
        syn::Fields::Unit => Vec::new(),
        _ => abort!(
            data.fields,
            "Can only derive Props for unit structs or structs with named fields"
        ),
    };

    let mut seen = HashSet::new();
    for (field, prop) in data.fields.iter().zip(&props) {
        if !seen.insert(prop.prop_name.as_str()) {
            abort!(
                field.ident,
                "Prop \"{}\" is declared more than once",
                prop.prop_name
            );
        }
    }
    props
}

pub fn impl_props_for_struct(
    identifier: Ident,
    generics: Generics,
    props: Vec<PropTokenSections>,
) -> TokenStream {
    let (param_spec, parse_fetch, parse_struct_item): (Vec<_>, Vec<_>, Vec<_>) = props
        .into_iter()
        .map(|prop| {
            let PropTokenSections {
                param_spec,
                parse_fetch,
                parse_struct_item,
                ..
            } = prop;
            (param_spec, parse_fetch, parse_struct_item)
        })
        .multiunzip();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let output = quote! {
        impl #impl_generics ::propkit::Props for #identifier #ty_generics #where_clause {
            fn spec() -> &'static ::propkit::PropSpec {
                static SPEC: ::std::sync::OnceLock<::propkit::PropSpec> = ::std::sync::OnceLock::new();
                SPEC.get_or_init(|| {
                    let params: ::std::vec::Vec<::propkit::ParamSpec> = ::std::vec![
                        #(#param_spec,)*
                    ];
                    match ::propkit::PropSpec::new(params) {
                        Ok(spec) => spec,
                        // Duplicate prop names are rejected when the derive expands
                        Err(err) => unreachable!("{}", err),
                    }
                })
            }

            #[allow(unused_variables, non_snake_case)]
            fn from_resolved(
                __propkit_resolved: &::propkit::ResolvedBag<'_>,
            ) -> ::std::result::Result<Self, ::propkit::PropError> {
                #(#parse_fetch)*

                ::std::result::Result::Ok(Self {
                    #(#parse_struct_item)*
                })
            }
        }
    };
    output.into()
}
