#![allow(clippy::unwrap_used, reason = "test fixtures")]

use pretty_assertions::assert_eq;
use syn::parse_quote;

use super::*;

fn expand(input: &DeriveInput) -> String {
    derive_describe_impl(input).unwrap().to_string()
}

fn error(input: &DeriveInput) -> String {
    derive_describe_impl(input).unwrap_err().to_string()
}

#[test]
fn members_follow_declaration_order() {
    let input: DeriveInput = parse_quote! {
        struct User {
            id: u64,
            name: String,
        }
    };
    let out = expand(&input);
    let id = out.find(". member (\"id\")").unwrap();
    let name = out.find(". member (\"name\")").unwrap();
    assert!(id < name);
    assert!(out.contains("friendly_type_name :: < Self >"));
}

#[test]
fn container_attributes() {
    let input: DeriveInput = parse_quote! {
        #[describe(name = "Money", equality = money_eq, ordering = crate::cmp::by_amount)]
        struct Money {
            amount: i64,
        }
    };
    let out = expand(&input);
    assert!(out.contains("TypeDef :: record (\"Money\")"));
    assert!(out.contains(". equality (money_eq)"));
    assert!(out.contains(". ordering (crate :: cmp :: by_amount)"));
}

#[test]
fn rename_and_skip() {
    let input: DeriveInput = parse_quote! {
        struct Row {
            #[describe(rename = "key")]
            id: u64,
            #[describe(skip)]
            cache: String,
            r#type: String,
        }
    };
    let out = expand(&input);
    assert!(out.contains(". member (\"key\")"));
    assert!(out.contains(". member (\"type\")"));
    assert!(!out.contains("\"cache\""));
    assert!(!out.contains("self . cache"));
}

#[test]
fn type_parameters_get_bounds() {
    let input: DeriveInput = parse_quote! {
        struct Page<T> {
            items: Vec<T>,
        }
    };
    let out = expand(&input);
    assert!(out.contains("T : :: alike_value :: Describe + 'static"));
}

#[test]
fn rejects_enums() {
    let input: DeriveInput = parse_quote! {
        enum Status { Active }
    };
    assert_eq!(error(&input), "Describe derive only supports structs");
}

#[test]
fn rejects_tuple_structs() {
    let input: DeriveInput = parse_quote! {
        struct Pair(i32, i32);
    };
    assert_eq!(
        error(&input),
        "Describe derive only supports structs with named fields"
    );
}

#[test]
fn rejects_lifetimes() {
    let input: DeriveInput = parse_quote! {
        struct View<'a> {
            name: &'a str,
        }
    };
    assert_eq!(
        error(&input),
        "Describe derive does not support lifetime parameters"
    );
}

#[test]
fn rejects_duplicate_names_after_rename() {
    let input: DeriveInput = parse_quote! {
        struct Clash {
            id: u64,
            #[describe(rename = "id")]
            other: u64,
        }
    };
    assert_eq!(error(&input), "duplicate member name `id`");
}

#[test]
fn rejects_unknown_attributes() {
    let input: DeriveInput = parse_quote! {
        struct Odd {
            #[describe(flatten)]
            inner: u64,
        }
    };
    assert!(error(&input).starts_with("unknown describe attribute"));
}
