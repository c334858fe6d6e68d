//! Enum-specific `Maskable` derivation.
//!
//! Each variant becomes one match arm. Fields inside a variant follow the same
//! rules as struct fields.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_code, UsedGenerics},
    DeriveOutput,
};

/// Match arms accumulated across variants.
#[derive(Default)]
struct Arms {
    mask: Vec<TokenStream>,
    masked_debug: Vec<TokenStream>,
    plain_debug: Vec<TokenStream>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let mut used = UsedGenerics::default();
    let mut arms = Arms::default();

    for variant in data.variants {
        derive_variant(name, variant, generics, &mut used, &mut arms)?;
    }

    let Arms {
        mask,
        masked_debug,
        plain_debug,
    } = arms;

    // An empty enum has no values; `match *self {}` is still exhaustive.
    let (mask_body, masked_debug_body, plain_debug_body) = if mask.is_empty() {
        (
            quote! { match *self {} },
            quote! { match *self {} },
            quote! { match *self {} },
        )
    } else {
        (
            quote! { match self { #(#mask),* } },
            quote! { match self { #(#masked_debug),* } },
            quote! { match self { #(#plain_debug),* } },
        )
    };

    Ok(DeriveOutput {
        mask_body,
        masked_debug_body,
        plain_debug_body,
        used,
    })
}

fn derive_variant(
    name: &Ident,
    variant: syn::Variant,
    generics: &syn::Generics,
    used: &mut UsedGenerics,
    arms: &mut Arms,
) -> Result<()> {
    let variant_ident = variant.ident;
    let label = quote! { stringify!(#name::#variant_ident) };

    let named = matches!(variant.fields, Fields::Named(_));
    let unit = matches!(variant.fields, Fields::Unit);

    let mut bindings = Vec::new();
    let mut transforms = Vec::new();
    let mut masked_debug_fields = Vec::new();
    let mut plain_debug_fields = Vec::new();

    for (index, field) in variant.fields.into_iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let binding = field
            .ident
            .clone()
            .unwrap_or_else(|| format_ident!("field_{index}"));
        let code = generate_field_code(generics, used, &field.ty, &binding, span, &strategy)?;
        let masked_debug = code.masked_debug;

        if named {
            masked_debug_fields.push(quote_spanned! { span =>
                debug.field(stringify!(#binding), #masked_debug);
            });
            plain_debug_fields.push(quote_spanned! { span =>
                debug.field(stringify!(#binding), #binding);
            });
        } else {
            masked_debug_fields.push(quote_spanned! { span =>
                debug.field(#masked_debug);
            });
            plain_debug_fields.push(quote_spanned! { span =>
                debug.field(#binding);
            });
        }
        transforms.push(code.transform);
        bindings.push(binding);
    }

    if unit {
        arms.mask.push(quote! {
            Self::#variant_ident => ::core::result::Result::Ok(Self::#variant_ident)
        });
        let debug = quote! { Self::#variant_ident => f.write_str(#label) };
        arms.masked_debug.push(debug.clone());
        arms.plain_debug.push(debug);
        return Ok(());
    }

    let (pattern, builder) = if named {
        (
            quote! { Self::#variant_ident { #(#bindings),* } },
            quote! { f.debug_struct(#label) },
        )
    } else {
        (
            quote! { Self::#variant_ident ( #(#bindings),* ) },
            quote! { f.debug_tuple(#label) },
        )
    };

    arms.mask.push(quote! {
        #pattern => {
            #(#transforms)*
            ::core::result::Result::Ok(#pattern)
        }
    });
    arms.masked_debug.push(quote! {
        #pattern => {
            let mut debug = #builder;
            #(#masked_debug_fields)*
            debug.finish()
        }
    });
    arms.plain_debug.push(quote! {
        #pattern => {
            let mut debug = #builder;
            #(#plain_debug_fields)*
            debug.finish()
        }
    });
    Ok(())
}
