//! Fixed-rule masking of personal data for display and log safety.
//!
//! This crate separates:
//! - **Rules**: pure string transforms for each kind of personal data
//!   ([`name`], [`email`], [`telephone`], ...), with fixed offsets and mask
//!   literals.
//! - **Categories**: which rule applies to a value, either as a marker type in
//!   `#[mask(Category)]` or as a runtime [`MaskKind`] tag.
//! - **Walking**: `#[derive(Maskable)]` builds a masked copy of a record,
//!   applying each field's category and recursing into nested records.
//!
//! Key rules:
//! - Use `#[mask(Category)]` on text fields (`String`, `Option<String>`, ...).
//! - Use bare `#[mask]` on nested records; an absent (`None`) record stays
//!   absent.
//! - Unannotated fields are cloned unchanged.
//! - The input is only borrowed; masking never mutates it.
//! - The first error from a nested record aborts the walk; there are no
//!   partial results.
//!
//! ```rust
//! use masker::{Email, Maskable, Name, Password};
//!
//! #[derive(Clone, Maskable)]
//! # #[cfg_attr(feature = "slog", derive(serde::Serialize))]
//! struct User {
//!     #[mask(Name)]
//!     name: String,
//!     #[mask(Email)]
//!     email: String,
//!     #[mask(Password)]
//!     password: String,
//!     #[mask]
//!     friend: Option<Box<User>>,
//!     locale: String,
//! }
//!
//! let user = User {
//!     name: "ABCD".into(),
//!     email: "ggw.chang@gmail.com".into(),
//!     password: "hunter2".into(),
//!     friend: None,
//!     locale: "zh-TW".into(),
//! };
//!
//! let masked = user.masked().unwrap();
//! assert_eq!(masked.name, "A**D");
//! assert_eq!(masked.email, "ggw****@gmail.com");
//! assert_eq!(masked.password, "************");
//! assert!(masked.friend.is_none());
//! assert_eq!(masked.locale, "zh-TW");
//! ```
//!
//! What it does not do:
//! - detect sensitive data: callers declare which fields are sensitive
//! - validate formats: malformed values are masked best-effort
//! - perform I/O or logging (see the `slog` feature for an adapter)
//!
//! Runtime-shaped records (`serde_json::Value`) are masked with a
//! [`MaskPolicy`] table behind the `json` feature.

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

// Lets derived code name `::masker` from inside this crate.
extern crate self as masker;

#[cfg(feature = "walk")]
pub use masker_derive::Maskable;

// Module declarations
mod category;
mod error;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "slog")]
pub mod slog;
mod text;
#[cfg(feature = "walk")]
mod walk;

// Re-exports
pub use category::{
    Address, Category, CreditCard, Email, Id, MaskKind, Mobile, Name, Password, Telephone,
};
pub use error::MaskError;
#[cfg(feature = "json")]
pub use json::MaskPolicy;
pub use text::{address, credit_card, email, id, mobile, name, overlay, password, telephone};
#[cfg(feature = "walk")]
pub use walk::{mask, Categorized, MaskMapper, Maskable, Masker};
