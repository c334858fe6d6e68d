//! Masking categories: "which fixed rule applies to this value?"
//!
//! Categories exist in two forms:
//!
//! - zero-sized marker types ([`Name`], [`Email`], ...) used in
//!   `#[mask(Category)]` field attributes, resolved at compile time;
//! - the runtime [`MaskKind`] tag, used by policy tables and anywhere the
//!   category is only known as data.
//!
//! The nested-record category has no marker type. A bare `#[mask]` attribute
//! selects it, and [`MaskKind::Struct`] is its runtime tag.

use std::{fmt, str::FromStr};

use crate::{error::MaskError, text};

/// Runtime tag for one of the nine masking categories.
///
/// The string tags (`"password"`, `"addr"`, `"tel"`, ...) are stable and are
/// the form used by [`FromStr`], [`fmt::Display`] and serde.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskKind {
    #[cfg_attr(feature = "json", serde(rename = "password"))]
    Password,
    #[cfg_attr(feature = "json", serde(rename = "name"))]
    Name,
    #[cfg_attr(feature = "json", serde(rename = "addr"))]
    Address,
    #[cfg_attr(feature = "json", serde(rename = "email"))]
    Email,
    #[cfg_attr(feature = "json", serde(rename = "mobile"))]
    Mobile,
    #[cfg_attr(feature = "json", serde(rename = "tel"))]
    Telephone,
    #[cfg_attr(feature = "json", serde(rename = "id"))]
    Id,
    #[cfg_attr(feature = "json", serde(rename = "credit"))]
    CreditCard,
    /// Walk into a nested record instead of masking text.
    #[cfg_attr(feature = "json", serde(rename = "struct"))]
    Struct,
}

impl MaskKind {
    /// Every category, in declaration order.
    pub const ALL: [MaskKind; 9] = [
        MaskKind::Password,
        MaskKind::Name,
        MaskKind::Address,
        MaskKind::Email,
        MaskKind::Mobile,
        MaskKind::Telephone,
        MaskKind::Id,
        MaskKind::CreditCard,
        MaskKind::Struct,
    ];

    /// Returns the canonical string tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            MaskKind::Password => "password",
            MaskKind::Name => "name",
            MaskKind::Address => "addr",
            MaskKind::Email => "email",
            MaskKind::Mobile => "mobile",
            MaskKind::Telephone => "tel",
            MaskKind::Id => "id",
            MaskKind::CreditCard => "credit",
            MaskKind::Struct => "struct",
        }
    }

    /// Returns `true` for the nested-record category.
    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, MaskKind::Struct)
    }

    /// Applies the leaf rule for this category.
    ///
    /// Returns `None` for [`MaskKind::Struct`], which has no text rule.
    #[must_use]
    pub fn apply_to(self, value: &str) -> Option<String> {
        let masked = match self {
            MaskKind::Password => text::password(value),
            MaskKind::Name => text::name(value),
            MaskKind::Address => text::address(value),
            MaskKind::Email => text::email(value),
            MaskKind::Mobile => text::mobile(value),
            MaskKind::Telephone => text::telephone(value),
            MaskKind::Id => text::id(value),
            MaskKind::CreditCard => text::credit_card(value),
            MaskKind::Struct => return None,
        };
        Some(masked)
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MaskKind {
    type Err = MaskError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        MaskKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| MaskError::UnknownCategory(tag.to_string()))
    }
}

/// Marker trait for leaf categories usable in `#[mask(Category)]`.
///
/// Implementors are zero-sized unit structs. Each one binds a runtime
/// [`MaskKind`] and the fixed text rule for that kind.
pub trait Category {
    /// Runtime tag of this category.
    const KIND: MaskKind;

    /// Masks `value` with this category's rule.
    fn apply_to(value: &str) -> String;
}

macro_rules! leaf_category {
    ($(#[$doc:meta])* $marker:ident, $kind:ident, $rule:path) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $marker;

        impl Category for $marker {
            const KIND: MaskKind = MaskKind::$kind;

            fn apply_to(value: &str) -> String {
                $rule(value)
            }
        }
    };
}

leaf_category!(
    /// Passwords and other secrets. Always masked in full.
    Password,
    Password,
    text::password
);
leaf_category!(
    /// Personal names.
    Name,
    Name,
    text::name
);
leaf_category!(
    /// Postal addresses.
    Address,
    Address,
    text::address
);
leaf_category!(
    /// Email addresses.
    Email,
    Email,
    text::email
);
leaf_category!(
    /// Mobile phone numbers.
    Mobile,
    Mobile,
    text::mobile
);
leaf_category!(
    /// Landline telephone numbers.
    Telephone,
    Telephone,
    text::telephone
);
leaf_category!(
    /// National identification numbers.
    Id,
    Id,
    text::id
);
leaf_category!(
    /// Payment card numbers.
    CreditCard,
    CreditCard,
    text::credit_card
);
