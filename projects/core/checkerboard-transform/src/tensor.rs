//! Dense NHWC tensor storage and the channel-axis helpers the transforms
//! build on.
//!
//! The transforms only ever need three structural capabilities from their
//! array type: contiguous row-major storage, copying a contiguous channel
//! band, and joining tensors along the channel axis. [`Tensor`] provides
//! exactly those, with all shape preconditions checked at entry.

use crate::error::CheckerboardError;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use likely_stable::unlikely;

/// Dimensions of a [`Tensor`] in NHWC order: batch, height, width, channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Batch count.
    pub n: usize,
    /// Spatial height.
    pub h: usize,
    /// Spatial width.
    pub w: usize,
    /// Channel count.
    pub c: usize,
}

impl Shape {
    /// Creates a shape from its four NHWC dimensions.
    pub const fn new(n: usize, h: usize, w: usize, c: usize) -> Self {
        Self { n, h, w, c }
    }

    /// Total number of scalar elements a tensor of this shape holds.
    pub const fn element_count(&self) -> usize {
        self.n * self.h * self.w * self.c
    }

    /// Whether both spatial dimensions admit a full 2×2 tiling.
    pub(crate) const fn has_even_spatial_dims(&self) -> bool {
        self.h % 2 == 0 && self.w % 2 == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}x{}", self.n, self.h, self.w, self.c)
    }
}

/// A dense 4D array in row-major NHWC layout.
///
/// Tensors are caller-owned values; every transform in this crate is a pure
/// function from borrowed input tensors to a freshly allocated output tensor
/// and never retains a reference across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Copy> Tensor<T> {
    /// Wraps an existing buffer as a tensor of the given shape.
    ///
    /// # Errors
    ///
    /// - [`CheckerboardError::DataLengthMismatch`] if `data.len()` differs
    ///   from `shape.element_count()`
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self, CheckerboardError> {
        let expected = shape.element_count();
        if unlikely(data.len() != expected) {
            return Err(CheckerboardError::DataLengthMismatch {
                len: data.len(),
                expected,
                shape,
            });
        }

        Ok(Self { shape, data })
    }

    /// Creates a zero-filled tensor of the given shape.
    pub fn zeros(shape: Shape) -> Self
    where
        T: Default,
    {
        Self {
            shape,
            data: vec![T::default(); shape.element_count()],
        }
    }

    /// The tensor's NHWC shape.
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// The backing buffer in row-major NHWC order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the tensor, returning the backing buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// The value at batch `n`, row `y`, column `x`, channel `ch`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds for the tensor's shape.
    pub fn at(&self, n: usize, y: usize, x: usize, ch: usize) -> T {
        assert!(
            n < self.shape.n && y < self.shape.h && x < self.shape.w && ch < self.shape.c,
            "index ({n}, {y}, {x}, {ch}) out of bounds for shape {}",
            self.shape
        );
        self.data[self.row_start(n, y, x) + ch]
    }

    /// Copies a contiguous band of `width` channels starting at `start` into
    /// a new tensor of shape (N, H, W, `width`).
    ///
    /// # Errors
    ///
    /// - [`CheckerboardError::ChannelSliceOutOfRange`] if the band reaches
    ///   past the channel axis
    pub fn channel_slice(&self, start: usize, width: usize) -> Result<Self, CheckerboardError> {
        let end = start + width;
        if unlikely(end > self.shape.c) {
            return Err(CheckerboardError::ChannelSliceOutOfRange {
                start,
                end,
                channels: self.shape.c,
            });
        }

        let out_shape = Shape::new(self.shape.n, self.shape.h, self.shape.w, width);
        let mut out = Vec::with_capacity(out_shape.element_count());
        let rows = self.shape.n * self.shape.h * self.shape.w;
        for row in 0..rows {
            let row_start = row * self.shape.c;
            out.extend_from_slice(&self.data[row_start + start..row_start + end]);
        }

        Ok(Self {
            shape: out_shape,
            data: out,
        })
    }

    /// Offset of the first channel at batch `n`, row `y`, column `x`.
    pub(crate) const fn row_start(&self, n: usize, y: usize, x: usize) -> usize {
        ((n * self.shape.h + y) * self.shape.w + x) * self.shape.c
    }
}

/// Joins tensors along the channel axis; all parts must share batch and
/// spatial dimensions. Call sites always pass a fixed, non-empty set of
/// bands.
pub(crate) fn concat_channels<T: Copy>(
    parts: &[&Tensor<T>],
) -> Result<Tensor<T>, CheckerboardError> {
    debug_assert!(!parts.is_empty());
    let base = parts[0].shape;

    let mut total_channels = 0;
    for part in parts {
        if unlikely((part.shape.n, part.shape.h, part.shape.w) != (base.n, base.h, base.w)) {
            return Err(CheckerboardError::ConcatShapeMismatch {
                left: base,
                right: part.shape,
            });
        }
        total_channels += part.shape.c;
    }

    let out_shape = Shape::new(base.n, base.h, base.w, total_channels);
    let mut out = Vec::with_capacity(out_shape.element_count());
    let rows = base.n * base.h * base.w;
    for row in 0..rows {
        for part in parts {
            let start = row * part.shape.c;
            out.extend_from_slice(&part.data[start..start + part.shape.c]);
        }
    }

    Tensor::from_vec(out_shape, out)
}
