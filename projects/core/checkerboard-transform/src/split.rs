//! Extracting one checkerboard half at half spatial resolution.
//!
//! The split operations leave their result in the repacked representation:
//! half the spatial resolution, twice the channels, with the two quadrant
//! bands side by side on the channel axis. This is a genuinely different
//! representation from [`mix`](crate::mix)'s full-resolution output; the two
//! must not be confused. [`unsplit_non_anchor`](crate::unsplit_non_anchor) and
//! [`unsplit_anchor`](crate::unsplit_anchor) take it back to full resolution.

use crate::error::CheckerboardError;
use crate::repack::space_to_channel;
use crate::tensor::{concat_channels, Tensor};

/// Extracts the non-anchor half (quadrants A and D, the top-left and
/// bottom-right of every 2×2 tile): (N, H, W, C) → (N, H/2, W/2, 2C).
///
/// # Errors
///
/// - [`CheckerboardError::OddSpatialDimensions`] if H or W is odd
pub fn split_non_anchor<T: Copy>(input: &Tensor<T>) -> Result<Tensor<T>, CheckerboardError> {
    let c = input.shape().c;
    let packed = space_to_channel(input)?;

    concat_channels(&[
        &packed.channel_slice(0, c)?,     // A (top-left)
        &packed.channel_slice(3 * c, c)?, // D (bottom-right)
    ])
}

/// Extracts the anchor half (quadrants B and C-slice, the top-right and
/// bottom-left of every 2×2 tile): (N, H, W, C) → (N, H/2, W/2, 2C).
///
/// # Errors
///
/// - [`CheckerboardError::OddSpatialDimensions`] if H or W is odd
pub fn split_anchor<T: Copy>(input: &Tensor<T>) -> Result<Tensor<T>, CheckerboardError> {
    let c = input.shape().c;
    let packed = space_to_channel(input)?;

    concat_channels(&[
        &packed.channel_slice(c, c)?,     // B (top-right)
        &packed.channel_slice(2 * c, c)?, // C-slice (bottom-left)
    ])
}
