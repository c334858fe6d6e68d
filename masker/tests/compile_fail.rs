//! Compile-fail tests to ensure proper error messages for incorrect usage.
//!
//! These tests verify that the derive macro produces helpful compiler errors
//! when used incorrectly, such as:
//! - Using a category on a scalar field
//! - Using a category on a nested record (should use bare `#[mask]` instead)
//! - Using bare `#[mask]` on a type that doesn't implement `Maskable`

// The slog derive adds a `Serialize` bound these cases don't satisfy.
#![cfg(not(feature = "slog"))]

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
