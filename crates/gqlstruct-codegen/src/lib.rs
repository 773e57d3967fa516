// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, GenericParam, LitStr};

/// Field info for code generation
struct FieldInfo {
    /// Rust field identifier
    ident: syn::Ident,
    /// Raw `#[graphql("...")]` annotation, if present
    annotation: Option<String>,
}

/// `#[derive(GraphqlObject)]` macro: generates `Reflect` + `Record` impls
///
/// Field annotations:
/// - `#[graphql("name")]`: nullable field `name`
/// - `#[graphql("!name")]`: non-null field `name`
/// - `#[graphql(name = "...")]`: same as above, long form
/// - no attribute: field is skipped by the translator
///
/// Container attribute `#[graphql(name = "...")]` overrides the object name
/// (defaults to the struct name).
///
/// # Errors
///
/// Emits a compile error for enums, unions, tuple/unit structs, structs with
/// type or const parameters, and malformed `graphql` attributes.
///
/// Example:
/// ```ignore
/// use gqlstruct::GraphqlObject;
///
/// #[derive(GraphqlObject)]
/// struct Sensor {
///     #[graphql("!id")]
///     id: u32,
///     #[graphql("reading")]
///     reading: Option<f64>,
///     calibration: Vec<u8>, // skipped
/// }
/// ```
#[proc_macro_derive(GraphqlObject, attributes(graphql))]
pub fn derive_graphql_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only structs with named fields are supported",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(input, "Only structs are supported")),
    };

    if let Some(param) = input
        .generics
        .params
        .iter()
        .find(|p| !matches!(p, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            param,
            "Type and const parameters are not supported",
        ));
    }

    let object_name = container_name(&input.attrs)?.unwrap_or_else(|| name.unraw().to_string());

    let mut field_infos = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        field_infos.push(FieldInfo {
            ident: ident.clone(),
            annotation: field_annotation(&field.attrs)?,
        });
    }

    // One FieldDecl per declared field, annotated or not
    let field_decls: Vec<_> = field_infos
        .iter()
        .map(|f| {
            let ident = &f.ident;
            let name_str = ident.unraw().to_string();
            let annotation = match &f.annotation {
                Some(raw) => quote! { ::core::option::Option::Some(#raw) },
                None => quote! { ::core::option::Option::None },
            };

            quote! {
                {
                    let probe = Probe(&self.#ident);
                    let value = (&probe).field_value();
                    let value = (&probe).attach_by_ref(value);
                    let value = (&probe).attach_pointee(value);
                    let value = (&probe).attach_direct(value);
                    ::gqlstruct::FieldDecl::new(#name_str, #annotation, value)
                }
            }
        })
        .collect();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::gqlstruct::Reflect for #name #ty_generics #where_clause {
            fn shape() -> ::gqlstruct::Shape {
                ::gqlstruct::Shape::Record(#object_name)
            }
        }

        impl #impl_generics ::gqlstruct::Record for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #object_name
            }

            fn fields(&self) -> ::std::vec::Vec<::gqlstruct::FieldDecl<'_>> {
                #[allow(unused_imports)]
                use ::gqlstruct::__private::{
                    Probe, ShapeFallback, ShapeOf, Typed, TypedByRef, TypedByRefFallback,
                    TypedFallback, TypedPointee, TypedPointeeFallback,
                };

                ::std::vec![#(#field_decls),*]
            }
        }
    })
}

/// Parse the annotation of a field
///
/// Accepts `#[graphql("name")]` and `#[graphql(name = "name")]`.
fn field_annotation(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut annotation = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("graphql")) {
        if annotation.is_some() {
            return Err(syn::Error::new_spanned(attr, "Duplicate graphql attribute"));
        }

        if let Ok(lit) = attr.parse_args::<LitStr>() {
            annotation = Some(lit.value());
            continue;
        }

        let mut name = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("Unsupported graphql field attribute, expected `name`"))
            }
        })?;

        let Some(name) = name else {
            return Err(syn::Error::new_spanned(attr, "Missing graphql field name"));
        };
        annotation = Some(name);
    }

    Ok(annotation)
}

/// Parse the container `#[graphql(name = "...")]` attribute
fn container_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut name = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("graphql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("Unsupported graphql container attribute, expected `name`"))
            }
        })?;
    }

    Ok(name)
}
