//! Test: Using bare #[mask] on an external type that doesn't implement Maskable.
//!
//! External types like `std::time::SystemTime` are not records. Leave them
//! unannotated to copy them unchanged.

use std::time::SystemTime;

use masker::Maskable;

#[derive(Clone, Maskable)]
#[mask(skip_debug)]
struct Record {
    #[mask]
    timestamp: SystemTime,
}

fn main() {}
