//! Application layer: the mapper threaded through a walk.
//!
//! Derived walkers never call leaf rules directly. They hand each categorized
//! string to a [`MaskMapper`], so the rule lookup stays in one place.

use super::maskable::Maskable;
use crate::{category::Category, error::MaskError};

/// Applies leaf categories to text encountered during a walk.
pub trait MaskMapper {
    /// Masks `value` according to category `C`.
    fn mask_text<C: Category>(&self, value: &str) -> String;
}

/// The stateless default mapper.
///
/// `Masker` is zero-sized and `Copy`; there is nothing to initialise and no
/// shared instance to manage. It applies each category's fixed rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Masker;

impl Masker {
    /// Returns a masked copy of `value`.
    pub fn mask<T: Maskable>(self, value: &T) -> Result<T, MaskError> {
        value.mask_with(&self)
    }
}

impl MaskMapper for Masker {
    fn mask_text<C: Category>(&self, value: &str) -> String {
        C::apply_to(value)
    }
}

/// Returns a masked copy of `value` using the default [`Masker`].
///
/// The input is only borrowed. On error no partial result is produced.
pub fn mask<T: Maskable>(value: &T) -> Result<T, MaskError> {
    Masker.mask(value)
}
