//! Re-expanding a split half to full resolution with zero-filled gaps.
//!
//! These are *partial* inverses of the split operations: the quadrants owned
//! by the other half come back as exact zeros, not as reconstructions of the
//! original values. `unsplit_x(split_x(t))` therefore reproduces `t` only at
//! the positions x owns. Callers rely on this to reinsert decoded partial
//! information into a full grid before merging the two halves with
//! [`mix`](crate::mix).

use crate::error::CheckerboardError;
use crate::repack::channel_to_space;
use crate::tensor::{concat_channels, Tensor};
use likely_stable::unlikely;

/// Re-expands a non-anchor half: (N, H/2, W/2, 2C) → (N, H, W, C), placing
/// the first C-wide half at quadrant A (top-left), the second at quadrant D
/// (bottom-right), and exact zeros at the anchor quadrants.
///
/// # Errors
///
/// - [`CheckerboardError::ChannelsNotDivisible`] if the channel count is odd
pub fn unsplit_non_anchor<T: Copy + Default>(
    input: &Tensor<T>,
) -> Result<Tensor<T>, CheckerboardError> {
    let (first, second, zeros) = halve_channels(input)?;

    let packed = concat_channels(&[&first, &zeros, &zeros, &second])?;
    channel_to_space(&packed)
}

/// Re-expands an anchor half: (N, H/2, W/2, 2C) → (N, H, W, C), placing the
/// first C-wide half at quadrant B (top-right), the second at quadrant
/// C-slice (bottom-left), and exact zeros at the non-anchor quadrants.
///
/// # Errors
///
/// - [`CheckerboardError::ChannelsNotDivisible`] if the channel count is odd
pub fn unsplit_anchor<T: Copy + Default>(
    input: &Tensor<T>,
) -> Result<Tensor<T>, CheckerboardError> {
    let (first, second, zeros) = halve_channels(input)?;

    let packed = concat_channels(&[&zeros, &first, &second, &zeros])?;
    channel_to_space(&packed)
}

/// Splits a doubled-channel tensor into its two C-wide halves plus a
/// shape-matched zero band.
#[allow(clippy::type_complexity)]
fn halve_channels<T: Copy + Default>(
    input: &Tensor<T>,
) -> Result<(Tensor<T>, Tensor<T>, Tensor<T>), CheckerboardError> {
    let channels = input.shape().c;
    if unlikely(channels % 2 != 0) {
        return Err(CheckerboardError::ChannelsNotDivisible {
            channels,
            divisor: 2,
        });
    }

    let half = channels / 2;
    let first = input.channel_slice(0, half)?;
    let second = input.channel_slice(half, half)?;
    let zeros = Tensor::zeros(first.shape());

    Ok((first, second, zeros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn unsplit_non_anchor_fills_tile_diagonal() {
        let half = Tensor::from_vec(Shape::new(1, 1, 1, 2), vec![1.0f32, 4.0]).unwrap();
        let full = unsplit_non_anchor(&half).unwrap();

        assert_eq!(full.shape(), Shape::new(1, 2, 2, 1));
        assert_eq!(full.data(), &[1.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn unsplit_anchor_fills_tile_anti_diagonal() {
        let half = Tensor::from_vec(Shape::new(1, 1, 1, 2), vec![2.0f32, 3.0]).unwrap();
        let full = unsplit_anchor(&half).unwrap();

        assert_eq!(full.shape(), Shape::new(1, 2, 2, 1));
        assert_eq!(full.data(), &[0.0, 2.0, 3.0, 0.0]);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn unsplit_rejects_odd_channel_count(#[case] c: usize) {
        let t = Tensor::<f32>::zeros(Shape::new(1, 2, 2, c));
        assert!(matches!(
            unsplit_non_anchor(&t),
            Err(CheckerboardError::ChannelsNotDivisible { channels, divisor: 2 })
                if channels == c
        ));
        assert!(matches!(
            unsplit_anchor(&t),
            Err(CheckerboardError::ChannelsNotDivisible { channels, divisor: 2 })
                if channels == c
        ));
    }

    #[test]
    fn unsplit_after_split_reproduces_owned_quadrants_only() {
        let shape = Shape::new(1, 4, 4, 2);
        let t = sequential(shape);

        let non_anchor = unsplit_non_anchor(&split_non_anchor(&t).unwrap()).unwrap();
        let anchor = unsplit_anchor(&split_anchor(&t).unwrap()).unwrap();

        for y in 0..shape.h {
            for x in 0..shape.w {
                for ch in 0..shape.c {
                    let original = t.at(0, y, x, ch);
                    // Tile-local diagonal is non-anchor, anti-diagonal anchor.
                    if (y % 2) == (x % 2) {
                        assert_eq!(non_anchor.at(0, y, x, ch), original);
                        assert_eq!(anchor.at(0, y, x, ch), 0.0);
                    } else {
                        assert_eq!(non_anchor.at(0, y, x, ch), 0.0);
                        assert_eq!(anchor.at(0, y, x, ch), original);
                    }
                }
            }
        }
    }
}
