use proc_macro::TokenStream;
use proc_macro_error::{abort, proc_macro_error};
use props::{impl_props_for_struct, props_for_struct_data};
use syn::{parse_macro_input, DeriveInput};

mod props;
mod utility;

#[proc_macro_error]
#[proc_macro_derive(Props, attributes(name, default_value))]
pub fn derive_props(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        data,
        generics,
        ..
    } = parse_macro_input!(input);

    match data {
        syn::Data::Struct(ref data) => {
            impl_props_for_struct(ident, generics, props_for_struct_data(data))
        }
        _ => abort!(ident, "Can only derive Props for structs"),
    }
}
