//! Layout module for tracking picker regions
//!
//! `LayoutRegions` records where each part of the picker was drawn on the
//! last render, and `region_at()` maps a mouse position back to it.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
