//! Value objects describing validated clamp bounds.

pub mod clamp_range;

pub use clamp_range::ClampRange;
