//! Test: Using a category on a nested record should fail.
//!
//! Categories like `#[mask(Name)]` are for text values (String, etc.).
//! For record types that derive Maskable, use bare `#[mask]` to walk into them.

use masker::{Maskable, Name};

#[derive(Clone, Maskable)]
#[mask(skip_debug)]
struct Inner {
    #[mask(Name)]
    name: String,
}

#[derive(Clone, Maskable)]
#[mask(skip_debug)]
struct Outer {
    #[mask(Name)]
    inner: Inner,
}

fn main() {}
