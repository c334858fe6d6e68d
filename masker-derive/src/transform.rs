//! Per-field code generation shared by struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;
use syn::Result;

use crate::{
    crate_path, generics::collect_generics_from_type, strategy::Strategy, types::is_scalar_type,
};

/// Name of the mapper parameter in generated `mask_with` bodies.
///
/// Prefixed so it cannot be shadowed by a field binding.
pub(crate) const MAPPER: &str = "__masker_mapper";

/// Generic parameters collected while generating field code, grouped by the
/// bound each group needs.
#[derive(Default)]
pub(crate) struct UsedGenerics {
    pub(crate) walked: Vec<Ident>,
    pub(crate) categorized: Vec<Ident>,
    pub(crate) copied: Vec<Ident>,
    pub(crate) debugged: Vec<Ident>,
}

/// Generated code for one field.
pub(crate) struct FieldCode {
    /// Statement rebinding the field to its masked copy.
    pub(crate) transform: TokenStream,
    /// Expression of type `&dyn Debug` used by the masked `Debug` impl.
    pub(crate) masked_debug: TokenStream,
}

/// Generates the walk statement and masked `Debug` value for a single field.
///
/// | Strategy | Walk | Masked `Debug` |
/// |----------|------|----------------|
/// | `Copy` | `Clone::clone` | field as-is |
/// | `Nested` | `Maskable::mask_with(..)?` | field's own `Debug` |
/// | `Categorize` | `Categorized::apply_category` | masked text |
pub(crate) fn generate_field_code(
    generics: &syn::Generics,
    used: &mut UsedGenerics,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> Result<FieldCode> {
    let mapper = Ident::new(MAPPER, Span::call_site());
    collect_generics_from_type(ty, generics, &mut used.debugged);

    match strategy {
        Strategy::Copy => {
            collect_generics_from_type(ty, generics, &mut used.copied);
            Ok(FieldCode {
                transform: quote_spanned! { span =>
                    let #binding = ::core::clone::Clone::clone(#binding);
                },
                masked_debug: quote_spanned! { span => #binding },
            })
        }
        Strategy::Nested => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "bare #[mask] walks nested records; scalar fields cannot be walked. \
                    Remove the attribute to copy the field unchanged.",
                ));
            }
            collect_generics_from_type(ty, generics, &mut used.walked);
            let maskable = crate_path("Maskable");
            Ok(FieldCode {
                transform: quote_spanned! { span =>
                    let #binding = #maskable::mask_with(#binding, #mapper)?;
                },
                masked_debug: quote_spanned! { span => #binding },
            })
        }
        Strategy::Categorize(category) => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "mask categories apply to text fields; scalar fields cannot be categorized",
                ));
            }
            collect_generics_from_type(ty, generics, &mut used.categorized);
            let categorized = crate_path("Categorized");
            let masker = crate_path("Masker");
            Ok(FieldCode {
                transform: quote_spanned! { span =>
                    let #binding = #categorized::apply_category::<#category, _>(#binding, #mapper);
                },
                masked_debug: quote_spanned! { span =>
                    &#categorized::apply_category::<#category, _>(#binding, &#masker)
                },
            })
        }
    }
}
