//! Derive macro for `masker`.
//!
//! This crate generates the record walker behind `#[derive(Maskable)]`. It:
//! - reads `#[mask(...)]` field attributes
//! - emits a `Maskable` implementation that masks, walks or clones each field
//! - emits a `Debug` implementation that prints masked values
//!
//! It does **not** define categories or masking rules. Those live in the
//! `masker` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::{Ident, Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
#[cfg(feature = "slog")]
use syn::parse_quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_bounds;
use transform::{UsedGenerics, MAPPER};

/// Derives `masker::Maskable` (and a masking `Debug`) for structs and enums.
///
/// # Container Attributes
///
/// - `#[mask(skip_debug)]` - Opt out of `Debug` impl generation, e.g. when the type
///   needs a hand-written `Debug`.
///
/// # Field Attributes
///
/// - **No annotation**: the field is cloned into the output unchanged. The field type
///   must implement `Clone`.
///
/// - `#[mask]`: the field is a nested record (or a container of records such as
///   `Option<Box<T>>`) and is walked with `Maskable::mask_with`. The first error stops
///   the walk and is returned as-is. `None` stays `None`.
///
/// - `#[mask(Category)]`: the field is text and is masked with the category's rule.
///   Works for `String`, `Cow<str>`, and `Option`/`Vec`/`Box` of those, via
///   `masker::Categorized`.
///
/// Putting a category or a bare `#[mask]` on a primitive scalar (`i32`, `bool`, ...) is
/// a compile error. Unions are rejected.
///
/// # Additional Generated Impls
///
/// - `Debug`: when *not* building with `cfg(any(test, feature = "testing"))`, categorized
///   fields are printed in their masked form. Nested fields use their own `Debug`.
/// - `slog::Value` (behind `cfg(feature = "slog")`): logs the masked value as JSON via
///   `masker::slog::IntoMaskedJson`. The type must implement `serde::Serialize`. The
///   derive looks for a top-level `slog` crate, then for a path in the
///   `MASKER_SLOG_CRATE` env var (e.g., `my_log::slog`).
#[proc_macro_derive(Maskable, attributes(mask))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the masker crate root.
///
/// Handles crate renaming (e.g., `pii = { package = "masker", ... }`). Inside
/// the masker package (its unit tests and doctests) the root is `::masker`,
/// which the library aliases to itself.
fn crate_root() -> TokenStream {
    match crate_name("masker") {
        Ok(FoundCrate::Itself) => quote! { ::masker },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::masker },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// Falls back to the `MASKER_SLOG_CRATE` env var when no top-level `slog`
/// dependency is found.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("MASKER_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the MASKER_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("MASKER_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = syn::parse_str::<syn::Path>(item).expect("masker crate path should parse");
    quote! { #root::#item_ident }
}

/// Generated bodies and collected generics for one derive input.
pub(crate) struct DeriveOutput {
    pub(crate) mask_body: TokenStream,
    pub(crate) masked_debug_body: TokenStream,
    pub(crate) plain_debug_body: TokenStream,
    pub(crate) used: UsedGenerics,
}

#[allow(clippy::too_many_lines)]
fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { skip_debug } = parse_container_options(&attrs)?;

    let crate_root = crate_root();

    let DeriveOutput {
        mask_body,
        masked_debug_body,
        plain_debug_body,
        used,
    } = match data {
        Data::Struct(data) => derive_struct(&ident, data, &generics)?,
        Data::Enum(data) => derive_enum(&ident, data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Maskable` cannot be derived for unions",
            ));
        }
    };

    let maskable_bound = quote! { #crate_root::Maskable };
    let categorized_bound = quote! { #crate_root::Categorized };
    let clone_bound = quote! { ::core::clone::Clone };
    let debug_bound = quote! { ::core::fmt::Debug };

    let mask_generics = add_bounds(generics.clone(), &used.walked, &maskable_bound);
    let mask_generics = add_bounds(mask_generics, &used.categorized, &categorized_bound);
    let mask_generics = add_bounds(mask_generics, &used.copied, &clone_bound);
    let (impl_generics, ty_generics, where_clause) = mask_generics.split_for_impl();

    let plain_debug_generics = add_bounds(generics.clone(), &used.debugged, &debug_bound);
    let (plain_impl_generics, plain_ty_generics, plain_where_clause) =
        plain_debug_generics.split_for_impl();
    let masked_debug_generics =
        add_bounds(plain_debug_generics.clone(), &used.categorized, &categorized_bound);
    let (masked_impl_generics, masked_ty_generics, masked_where_clause) =
        masked_debug_generics.split_for_impl();

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        quote! {
            #[cfg(any(test, feature = "testing"))]
            impl #plain_impl_generics ::core::fmt::Debug for #ident #plain_ty_generics #plain_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #plain_debug_body
                }
            }

            #[cfg(not(any(test, feature = "testing")))]
            impl #masked_impl_generics ::core::fmt::Debug for #ident #masked_ty_generics #masked_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #masked_debug_body
                }
            }
        }
    };

    // Only generate the slog impl when the slog feature is enabled on masker-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        let mut slog_generics = generics;
        let slog_where_clause = slog_generics.make_where_clause();
        let self_ty: syn::Type = parse_quote!(#ident #ty_generics);
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: ::serde::Serialize));
        slog_where_clause
            .predicates
            .push(parse_quote!(#self_ty: #crate_root::slog::IntoMaskedJson));
        let (slog_impl_generics, slog_ty_generics, slog_where_clause) =
            slog_generics.split_for_impl();
        quote! {
            impl #slog_impl_generics #slog_crate::Value for #ident #slog_ty_generics #slog_where_clause {
                fn serialize(
                    &self,
                    record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    let masked = #crate_root::slog::IntoMaskedJson::into_masked_json(self);
                    #slog_crate::Value::serialize(&masked, record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    let mapper = Ident::new(MAPPER, Span::call_site());

    Ok(quote! {
        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            fn mask_with<__MaskerMapper: #crate_root::MaskMapper>(
                &self,
                #mapper: &__MaskerMapper,
            ) -> ::core::result::Result<Self, #crate_root::MaskError> {
                #mask_body
            }
        }

        #debug_impl

        #slog_impl
    })
}
