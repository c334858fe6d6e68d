//! Struct-specific `Maskable` derivation.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_code, UsedGenerics},
    DeriveOutput,
};

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let mut used = UsedGenerics::default();
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();
    let mut masked_debug_fields = Vec::new();
    let mut plain_debug_fields = Vec::new();

    let named = matches!(data.fields, Fields::Named(_));
    let unit = matches!(data.fields, Fields::Unit);
    for (index, field) in data.fields.into_iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let binding = field
            .ident
            .clone()
            .unwrap_or_else(|| format_ident!("field_{index}"));
        let code = generate_field_code(generics, &mut used, &field.ty, &binding, span, &strategy)?;
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

    let (pattern, debug_builder) = if unit {
        (quote! { Self }, None)
    } else if named {
        (
            quote! { Self { #(#bindings),* } },
            Some(quote! { f.debug_struct(stringify!(#name)) }),
        )
    } else {
        (
            quote! { Self ( #(#bindings),* ) },
            Some(quote! { f.debug_tuple(stringify!(#name)) }),
        )
    };

    let debug_body = |fields: &[TokenStream]| match &debug_builder {
        None => quote! { f.write_str(stringify!(#name)) },
        Some(builder) => quote! {
            match self {
                #pattern => {
                    let mut debug = #builder;
                    #(#fields)*
                    debug.finish()
                }
            }
        },
    };

    let mask_body = if unit {
        quote! { ::core::result::Result::Ok(Self) }
    } else {
        quote! {
            let #pattern = self;
            #(#transforms)*
            ::core::result::Result::Ok(#pattern)
        }
    };

    Ok(DeriveOutput {
        masked_debug_body: debug_body(&masked_debug_fields),
        plain_debug_body: debug_body(&plain_debug_fields),
        mask_body,
        used,
    })
}
