//! Test: Using a category on a scalar type should fail.
//!
//! Scalars (i32, bool, etc.) are not text. Leave them unannotated to copy
//! them unchanged.

use masker::Maskable;

#[derive(Clone, Maskable)]
struct Record {
    #[mask(masker::Name)]
    count: i32,
}

fn main() {}
