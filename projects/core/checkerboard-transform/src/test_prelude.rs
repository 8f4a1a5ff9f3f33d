//! Common test imports and utilities for transform tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Crate types every test module touches
pub use crate::{
    channel_to_space, mix, space_to_channel, split_anchor, split_non_anchor, unsplit_anchor,
    unsplit_non_anchor, CheckerboardError, Shape, Tensor,
};

/// Tensor of the given shape filled with 1.0, 2.0, ... in row-major order,
/// so every scalar position holds a distinct value.
pub(crate) fn sequential(shape: Shape) -> Tensor<f32> {
    let data = (1..=shape.element_count()).map(|v| v as f32).collect();
    Tensor::from_vec(shape, data).unwrap()
}
