//! Type utilities for the derive macro.

/// Checks if a type is a bare primitive scalar (`i32`, `bool`, `char`, ...).
///
/// Qualified paths, generic types and aliases are not recognized. Those fall
/// through to the trait bounds, which report their own diagnostics.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() {
        return false;
    }
    if path.path.segments.len() != 1 {
        return false;
    }
    let Some(segment) = path.path.segments.first() else {
        return false;
    };
    if !segment.arguments.is_empty() {
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn primitives_detected() {
        for ty in [quote! { i32 }, quote! { bool }, quote! { char }, quote! { f64 }] {
            assert!(is_scalar_type(&parse_type(ty)));
        }
    }

    #[test]
    fn text_and_wrappers_are_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { String })));
        assert!(!is_scalar_type(&parse_type(quote! { Option<i32> })));
        assert!(!is_scalar_type(&parse_type(quote! { &'static str })));
    }

    #[test]
    fn qualified_paths_are_not_scalar() {
        assert!(!is_scalar_type(&parse_type(quote! { std::primitive::i32 })));
        assert!(!is_scalar_type(&parse_type(quote! { ::std::primitive::i32 })));
    }
}
