//! Error types for checkerboard transform operations.

use crate::tensor::Shape;
use thiserror::Error;

/// Validation errors for checkerboard transform operations.
///
/// Every operation validates its preconditions at entry and returns one of
/// these instead of producing a partial result. A shape violation indicates a
/// caller bug, not a transient condition; nothing is retried or recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckerboardError {
    /// Height or width is odd where a 2×2 block repack is required.
    #[error("Spatial dimensions must be even for 2x2 tiling: got {height}x{width}")]
    OddSpatialDimensions {
        /// The offending height.
        height: usize,
        /// The offending width.
        width: usize,
    },

    /// Two inputs that must share a shape do not.
    #[error("Input shapes must match: {left} vs {right}")]
    ShapeMismatch {
        /// Shape of the first input.
        left: Shape,
        /// Shape of the second input.
        right: Shape,
    },

    /// Channel count is not divisible as the operation requires
    /// (4 for `channel_to_space`, 2 for the unsplit operations).
    #[error("Channel count {channels} must be divisible by {divisor}")]
    ChannelsNotDivisible {
        /// The offending channel count.
        channels: usize,
        /// The required divisor.
        divisor: usize,
    },

    /// A channel band selection reaches past the end of the channel axis.
    #[error("Channel slice {start}..{end} out of range for {channels} channels")]
    ChannelSliceOutOfRange {
        /// First channel of the requested band.
        start: usize,
        /// One past the last channel of the requested band.
        end: usize,
        /// The tensor's channel count.
        channels: usize,
    },

    /// Tensors joined along the channel axis disagree on batch or spatial
    /// dimensions.
    #[error("Tensors joined along the channel axis must share batch and spatial dimensions: {left} vs {right}")]
    ConcatShapeMismatch {
        /// Shape of the first part.
        left: Shape,
        /// Shape of the mismatching part.
        right: Shape,
    },

    /// Backing buffer length does not match the declared shape.
    #[error("Data length {len} does not match shape {shape} ({expected} elements)")]
    DataLengthMismatch {
        /// The buffer length provided.
        len: usize,
        /// The element count the shape requires.
        expected: usize,
        /// The declared shape.
        shape: Shape,
    },
}
