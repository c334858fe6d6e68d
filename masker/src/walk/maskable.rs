//! Domain layer: records that can be walked and text that can be categorized.
//!
//! - [`Maskable`]: types that *contain* maskable data (records, containers)
//! - [`Categorized`]: types that *are* maskable text (`String`, `Cow<str>`)
//!
//! ## Field Handling
//!
//! | Annotation | Generated Code | Behavior |
//! |------------|----------------|----------|
//! | None | `Clone::clone` | Field copied unchanged |
//! | `#[mask]` | `Maskable::mask_with` | Walk nested record, propagate errors |
//! | `#[mask(Category)]` | `Categorized::apply_category` | Apply the leaf rule |
//!
//! ## Container Implementations
//!
//! `Option`, `Box`, `Rc`, `Arc`, `Vec` and the std maps implement
//! [`Maskable`] by walking their contents. `None` is not an error: an absent
//! nested record stays absent. Map keys are cloned, never masked.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    rc::Rc,
    sync::Arc,
};

use super::{mapper::Masker, MaskMapper};
use crate::{category::Category, error::MaskError};

// =============================================================================
// Categorized - Types that ARE maskable text (leaf values)
// =============================================================================

/// Text-typed values that a leaf category can be applied to.
///
/// Implemented for `String` and `Cow<str>`, and for `Option`, `Vec` and `Box`
/// of any implementor. For a text newtype from your own crate, implement this
/// trait by masking the inner string with `mapper.mask_text::<C>(..)`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot carry a mask category",
    label = "mask categories apply to text fields only",
    note = "categories like `#[mask(Name)]` are for strings (String, Cow<str>, Option<String>, ...)",
    note = "if `{Self}` is a record that derives `Maskable`, use bare `#[mask]` to walk into it"
)]
pub trait Categorized: Sized {
    /// Returns a copy of `self` masked with category `C`.
    #[must_use]
    fn apply_category<C: Category, M: MaskMapper>(&self, mapper: &M) -> Self;
}

impl Categorized for String {
    fn apply_category<C: Category, M: MaskMapper>(&self, mapper: &M) -> Self {
        mapper.mask_text::<C>(self)
    }
}

impl Categorized for Cow<'_, str> {
    fn apply_category<C: Category, M: MaskMapper>(&self, mapper: &M) -> Self {
        Cow::Owned(mapper.mask_text::<C>(self))
    }
}

impl<T: Categorized> Categorized for Option<T> {
    fn apply_category<C: Category, M: MaskMapper>(&self, mapper: &M) -> Self {
        self.as_ref().map(|value| value.apply_category::<C, M>(mapper))
    }
}

impl<T: Categorized> Categorized for Vec<T> {
    fn apply_category<C: Category, M: MaskMapper>(&self, mapper: &M) -> Self {
        self.iter()
            .map(|value| value.apply_category::<C, M>(mapper))
            .collect()
    }
}

impl<T: Categorized> Categorized for Box<T> {
    fn apply_category<C: Category, M: MaskMapper>(&self, mapper: &M) -> Self {
        Box::new((**self).apply_category::<C, M>(mapper))
    }
}

// =============================================================================
// Maskable - Types that CONTAIN maskable data (records)
// =============================================================================

/// A record that can be walked to produce a masked copy.
///
/// Derive it with `#[derive(Maskable)]`. Hand-written implementations must
/// leave `self` untouched, process fields in declaration order, and return the
/// first error from a nested walk without building a partial result.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type cannot be walked as a nested record",
    note = "use `#[derive(Maskable)]` on the type definition",
    note = "or use `#[mask(Category)]` if this is a text value like String"
)]
pub trait Maskable: Sized {
    /// Builds a masked copy of `self`, applying leaf categories through `mapper`.
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError>;

    /// Builds a masked copy of `self` with the default [`Masker`].
    fn masked(&self) -> Result<Self, MaskError> {
        self.mask_with(&Masker)
    }
}

impl<T: Maskable> Maskable for Option<T> {
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        self.as_ref().map(|value| value.mask_with(mapper)).transpose()
    }
}

impl<T: Maskable> Maskable for Box<T> {
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        (**self).mask_with(mapper).map(Box::new)
    }
}

impl<T: Maskable> Maskable for Rc<T> {
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        (**self).mask_with(mapper).map(Rc::new)
    }
}

impl<T: Maskable> Maskable for Arc<T> {
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        (**self).mask_with(mapper).map(Arc::new)
    }
}

impl<T: Maskable> Maskable for Vec<T> {
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        self.iter().map(|value| value.mask_with(mapper)).collect()
    }
}

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Maskable,
    S: BuildHasher + Clone,
{
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            result.insert(key.clone(), value.mask_with(mapper)?);
        }
        Ok(result)
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Clone + Ord,
    V: Maskable,
{
    fn mask_with<M: MaskMapper>(&self, mapper: &M) -> Result<Self, MaskError> {
        self.iter()
            .map(|(key, value)| value.mask_with(mapper).map(|value| (key.clone(), value)))
            .collect()
    }
}
