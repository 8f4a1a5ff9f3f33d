//! Merging two full-resolution tensors along the checkerboard partition.

use crate::error::CheckerboardError;
use crate::repack::{channel_to_space, space_to_channel};
use crate::tensor::{concat_channels, Tensor};
use likely_stable::unlikely;

/// Combines two equal-shaped tensors into one, taking anchor positions
/// (quadrants B and C-slice, the top-right and bottom-left of every 2×2 tile)
/// from `beta` and non-anchor positions (quadrants A and D) from `alpha`.
///
/// The argument convention inverts the natural "alpha = anchor" reading:
/// `alpha` supplies the non-anchor values and `beta` the anchor values. The
/// swap keeps the operation consistent with Figure 1 of the checkerboard
/// paper (arXiv:2103.15306), whose appendix labels the two the other way
/// around. Callers depend on this convention; do not "correct" it.
///
/// # Errors
///
/// - [`CheckerboardError::ShapeMismatch`] if `alpha` and `beta` differ in
///   shape
/// - [`CheckerboardError::OddSpatialDimensions`] if H or W is odd
///
/// # Examples
///
/// ```
/// use checkerboard_transform::{mix, Shape, Tensor};
/// # use checkerboard_transform::CheckerboardError;
///
/// # fn main() -> Result<(), CheckerboardError> {
/// let alpha = Tensor::from_vec(Shape::new(1, 2, 2, 1), vec![1.0f32, 2.0, 3.0, 4.0])?;
/// let beta = Tensor::from_vec(Shape::new(1, 2, 2, 1), vec![5.0f32, 6.0, 7.0, 8.0])?;
///
/// // Top-left and bottom-right from alpha, the rest from beta.
/// let mixed = mix(&alpha, &beta)?;
/// assert_eq!(mixed.data(), &[1.0, 6.0, 7.0, 4.0]);
/// # Ok(())
/// # }
/// ```
pub fn mix<T: Copy>(alpha: &Tensor<T>, beta: &Tensor<T>) -> Result<Tensor<T>, CheckerboardError> {
    if unlikely(alpha.shape() != beta.shape()) {
        return Err(CheckerboardError::ShapeMismatch {
            left: alpha.shape(),
            right: beta.shape(),
        });
    }

    let c = alpha.shape().c;
    let alpha_packed = space_to_channel(alpha)?;
    let beta_packed = space_to_channel(beta)?;

    let mixed = concat_channels(&[
        &alpha_packed.channel_slice(0, c)?,     // A (top-left)
        &beta_packed.channel_slice(c, c)?,      // B (top-right)
        &beta_packed.channel_slice(2 * c, c)?,  // C-slice (bottom-left)
        &alpha_packed.channel_slice(3 * c, c)?, // D (bottom-right)
    ])?;

    channel_to_space(&mixed)
}
