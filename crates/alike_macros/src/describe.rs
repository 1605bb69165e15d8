//! Describe derive macro implementation.
//!
//! Generates `alike_value::Describe` implementations from struct definitions.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, DeriveInput, Field, Ident, LitStr, Path};

use crate::utils::{add_static_bounds, reject_lifetimes, validate_struct_with_named_fields};

/// Main entry point for the Describe derive macro.
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_describe_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed `#[describe(...)]` on the struct.
#[derive(Default)]
struct ContainerAttrs {
    name: Option<LitStr>,
    equality: Option<Path>,
    ordering: Option<Path>,
}

/// A field that takes part in comparison.
struct Member<'a> {
    ident: &'a Ident,
    name: String,
}

pub(crate) fn derive_describe_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let fields = validate_struct_with_named_fields(input, "Describe")?;
    reject_lifetimes(&input.generics, "Describe")?;

    let attrs = parse_container_attrs(input)?;
    let members = collect_members(fields.iter())?;

    let bound: Path = parse_quote!(::alike_value::Describe);
    let generics = add_static_bounds(input.generics.clone(), &bound);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_name = match &attrs.name {
        Some(name) => quote! { #name },
        None => quote! { &*::alike_value::friendly_type_name::<Self>() },
    };
    let member_names = members.iter().map(|m| &m.name);
    let field_idents = members.iter().map(|m| m.ident);
    let equality = attrs.equality.iter().map(|f| quote! { .equality(#f) });
    let ordering = attrs.ordering.iter().map(|f| quote! { .ordering(#f) });

    Ok(quote! {
        impl #impl_generics ::alike_value::Describe for #ident #ty_generics #where_clause {
            fn describe(&self) -> ::alike_value::Value {
                let ty = ::alike_value::TypeRegistry::global().describe_type::<Self>(|| {
                    ::alike_value::TypeDef::record(#type_name)
                        #(.member(#member_names))*
                        #(#equality)*
                        #(#ordering)*
                });
                ::alike_value::Value::from_layout(
                    &ty,
                    ::std::vec![#(::alike_value::Describe::describe(&self.#field_idents)),*],
                )
            }
        }
    })
}

fn parse_container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut attrs = ContainerAttrs::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("describe")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                attrs.name = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("equality") {
                attrs.equality = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("ordering") {
                attrs.ordering = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error(
                    "unknown describe attribute, expected `name`, `equality`, or `ordering`",
                ));
            }
            Ok(())
        })?;
    }
    Ok(attrs)
}

fn collect_members<'a>(fields: impl Iterator<Item = &'a Field>) -> syn::Result<Vec<Member<'a>>> {
    let mut members: Vec<Member<'a>> = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;

        let mut rename: Option<LitStr> = None;
        let mut skip = false;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("describe")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    skip = true;
                } else {
                    return Err(meta.error("unknown describe attribute, expected `rename` or `skip`"));
                }
                Ok(())
            })?;
        }
        if skip {
            continue;
        }

        let name = rename.map_or_else(|| ident.unraw().to_string(), |lit| lit.value());
        if members.iter().any(|m| m.name == name) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate member name `{name}`"),
            ));
        }
        members.push(Member { ident, name });
    }
    Ok(members)
}

#[cfg(test)]
mod tests;
