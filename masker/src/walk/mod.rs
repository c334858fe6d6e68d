//! Record walking: traversal, mapping, and entrypoints.
//!
//! - **`maskable`**: what can be walked (`Maskable`) and which field types can
//!   carry a leaf category (`Categorized`), plus std container impls
//! - **`mapper`**: how leaf categories are applied during a walk (`MaskMapper`,
//!   `Masker`) and the `mask` entrypoint
//!
//! Categories live in `crate::category`, leaf rules in `crate::text`.

mod mapper;
mod maskable;

pub use mapper::{mask, MaskMapper, Masker};
pub use maskable::{Categorized, Maskable};
