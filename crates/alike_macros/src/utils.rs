//! Shared utilities for derive macros.

use syn::{
    parse_quote, punctuated::Punctuated, token::Comma, Data, DeriveInput, Field, Fields,
    GenericParam, Generics,
};

/// Validate that the input is a struct with named fields, returning the fields.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Reject lifetime parameters: registered types must be `'static`.
pub fn reject_lifetimes(generics: &Generics, macro_name: &str) -> syn::Result<()> {
    match generics.lifetimes().next() {
        Some(lifetime) => Err(syn::Error::new_spanned(
            lifetime,
            format!("{macro_name} derive does not support lifetime parameters"),
        )),
        None => Ok(()),
    }
}

/// Add `bound + 'static` to every type parameter.
pub fn add_static_bounds(mut generics: Generics, bound: &syn::Path) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(#bound));
            ty.bounds.push(parse_quote!('static));
        }
    }
    generics
}
