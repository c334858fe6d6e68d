//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to walk decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field handling selected by `#[mask(...)]` attributes.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Copy` | Field cloned unchanged |
/// | `#[mask]` | `Nested` | Walk the nested record |
/// | `#[mask(Category)]` | `Categorize(Category)` | Apply the category's text rule |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: clone the field into the output.
    Copy,
    /// Bare `#[mask]`: recurse with `Maskable::mask_with`.
    Nested,
    /// `#[mask(Category)]`: mask text with the category marker's rule.
    Categorize(syn::Path),
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[mask] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::Nested, attr.span())?;
            }
            Meta::List(list) => match syn::parse2::<syn::Path>(list.tokens.clone()) {
                Ok(path) => {
                    set_strategy(&mut strategy, Strategy::Categorize(path), attr.span())?;
                }
                Err(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a mask category (e.g., #[mask(Email)])",
                    ));
                }
            },
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[mask]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Copy))
}
