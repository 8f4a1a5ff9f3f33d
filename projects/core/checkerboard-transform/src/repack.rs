//! The 2×2 block repack primitive shared by every checkerboard operation.
//!
//! [`space_to_channel`] trades each non-overlapping 2×2 spatial tile for a 4×
//! wider channel band; [`channel_to_space`] is its exact inverse. Both are
//! bijections on the set of scalar positions: no value is ever approximated,
//! duplicated or dropped.
//!
//! Within a repacked tile the four C-wide quadrant bands appear in row-major
//! tile order, and channel identity is preserved inside each band:
//!
//! | Band    | Offset | Tile position |
//! |---------|--------|---------------|
//! | A       | `0`    | top-left      |
//! | B       | `C`    | top-right     |
//! | C-slice | `2C`   | bottom-left   |
//! | D       | `3C`   | bottom-right  |

use crate::error::CheckerboardError;
use crate::tensor::{Shape, Tensor};
use alloc::vec::Vec;
use likely_stable::unlikely;

/// Number of quadrant bands produced by one 2×2 repack.
pub(crate) const QUADRANTS: usize = 4;

/// (row, column) offsets of the four tile positions in band order.
const TILE_OFFSETS: [(usize, usize); QUADRANTS] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Repacks each 2×2 spatial tile into a 4C channel band:
/// (N, H, W, C) → (N, H/2, W/2, 4C).
///
/// # Errors
///
/// - [`CheckerboardError::OddSpatialDimensions`] if H or W is odd
///
/// # Examples
///
/// ```
/// use checkerboard_transform::{space_to_channel, Shape, Tensor};
/// # use checkerboard_transform::CheckerboardError;
///
/// # fn main() -> Result<(), CheckerboardError> {
/// // One 2x2 tile; the band holds top-left, top-right,
/// // bottom-left, bottom-right in order.
/// let t = Tensor::from_vec(Shape::new(1, 2, 2, 1), vec![1.0f32, 2.0, 3.0, 4.0])?;
/// let packed = space_to_channel(&t)?;
/// assert_eq!(packed.shape(), Shape::new(1, 1, 1, 4));
/// assert_eq!(packed.data(), &[1.0, 2.0, 3.0, 4.0]);
/// # Ok(())
/// # }
/// ```
pub fn space_to_channel<T: Copy>(input: &Tensor<T>) -> Result<Tensor<T>, CheckerboardError> {
    let shape = input.shape();
    if unlikely(!shape.has_even_spatial_dims()) {
        return Err(CheckerboardError::OddSpatialDimensions {
            height: shape.h,
            width: shape.w,
        });
    }

    let out_shape = Shape::new(shape.n, shape.h / 2, shape.w / 2, QUADRANTS * shape.c);
    let mut out = Vec::with_capacity(out_shape.element_count());
    let data = input.data();

    // Each output position gathers four contiguous C-wide runs, one per
    // quadrant, in band order.
    for n in 0..shape.n {
        for tile_y in 0..out_shape.h {
            for tile_x in 0..out_shape.w {
                for (dy, dx) in TILE_OFFSETS {
                    let start = input.row_start(n, 2 * tile_y + dy, 2 * tile_x + dx);
                    out.extend_from_slice(&data[start..start + shape.c]);
                }
            }
        }
    }

    Tensor::from_vec(out_shape, out)
}

/// Exact inverse of [`space_to_channel`]:
/// (N, H/2, W/2, 4C) → (N, H, W, C).
///
/// # Errors
///
/// - [`CheckerboardError::ChannelsNotDivisible`] if the channel count is not
///   divisible by 4
pub fn channel_to_space<T: Copy>(input: &Tensor<T>) -> Result<Tensor<T>, CheckerboardError> {
    let shape = input.shape();
    if unlikely(shape.c % QUADRANTS != 0) {
        return Err(CheckerboardError::ChannelsNotDivisible {
            channels: shape.c,
            divisor: QUADRANTS,
        });
    }

    let c = shape.c / QUADRANTS;
    let out_shape = Shape::new(shape.n, shape.h * 2, shape.w * 2, c);
    let mut out = Vec::with_capacity(out_shape.element_count());
    let data = input.data();

    // Each full-resolution position reads back its quadrant's C-wide run.
    for n in 0..shape.n {
        for y in 0..out_shape.h {
            for x in 0..out_shape.w {
                let quadrant = (y % 2) * 2 + (x % 2);
                let start = input.row_start(n, y / 2, x / 2) + quadrant * c;
                out.extend_from_slice(&data[start..start + c]);
            }
        }
    }

    Tensor::from_vec(out_shape, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn space_to_channel_orders_bands_row_major() {
        // Two stacked 2x2 tiles.
        let t = sequential(Shape::new(1, 4, 2, 1));
        let packed = space_to_channel(&t).unwrap();

        assert_eq!(packed.shape(), Shape::new(1, 2, 1, 4));
        assert_eq!(packed.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn space_to_channel_keeps_channel_identity_within_bands() {
        // Two side-by-side 2x2 tiles with C = 2.
        let t = sequential(Shape::new(1, 2, 4, 2));
        let packed = space_to_channel(&t).unwrap();

        // Band q holds the C channels of tile position q, in channel order.
        assert_eq!(packed.shape(), Shape::new(1, 1, 2, 8));
        assert_eq!(
            packed.data(),
            &[
                1.0, 2.0, 3.0, 4.0, 9.0, 10.0, 11.0, 12.0, // left tile
                5.0, 6.0, 7.0, 8.0, 13.0, 14.0, 15.0, 16.0, // right tile
            ]
        );
    }

    #[test]
    fn channel_to_space_scatters_bands_back() {
        let packed = sequential(Shape::new(1, 1, 1, 4));
        let t = channel_to_space(&packed).unwrap();

        assert_eq!(t.shape(), Shape::new(1, 2, 2, 1));
        assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[rstest]
    #[case(Shape::new(1, 2, 2, 1))]
    #[case(Shape::new(1, 6, 6, 1))]
    #[case(Shape::new(2, 4, 6, 3))]
    #[case(Shape::new(3, 2, 8, 5))]
    fn repack_round_trip_is_exact(#[case] shape: Shape) {
        let t = sequential(shape);
        let restored = channel_to_space(&space_to_channel(&t).unwrap()).unwrap();
        assert_eq!(restored, t);
    }

    #[rstest]
    #[case(3, 4)]
    #[case(4, 3)]
    #[case(5, 5)]
    fn space_to_channel_rejects_odd_spatial_dims(#[case] h: usize, #[case] w: usize) {
        let t = Tensor::<f32>::zeros(Shape::new(1, h, w, 2));
        assert!(matches!(
            space_to_channel(&t),
            Err(CheckerboardError::OddSpatialDimensions { height, width })
                if height == h && width == w
        ));
    }

    #[test]
    fn channel_to_space_rejects_indivisible_channels() {
        let t = Tensor::<f32>::zeros(Shape::new(1, 2, 2, 6));
        assert!(matches!(
            channel_to_space(&t),
            Err(CheckerboardError::ChannelsNotDivisible {
                channels: 6,
                divisor: 4
            })
        ));
    }
}
