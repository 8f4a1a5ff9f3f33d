#![no_main]

// Checks the global lossless-reconstruction invariant: the anchor and
// non-anchor split/unsplit round trips are complementary halves that mix
// recombines into the original tensor exactly.

use checkerboard_transform::{
    mix, split_anchor, split_non_anchor, unsplit_anchor, unsplit_non_anchor, Shape, Tensor,
};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct TensorSpec {
    pub batches: u8,
    pub tile_rows: u8,
    pub tile_cols: u8,
    pub channels: u8,
    pub seed: u32,
}

impl TensorSpec {
    // Small even-sided shapes; u32 payloads keep equality bit-exact.
    fn materialize(&self) -> Tensor<u32> {
        let shape = Shape::new(
            (self.batches % 3 + 1) as usize,
            ((self.tile_rows % 4 + 1) * 2) as usize,
            ((self.tile_cols % 4 + 1) * 2) as usize,
            (self.channels % 5 + 1) as usize,
        );

        let mut state = self.seed;
        let data = (0..shape.element_count())
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                state
            })
            .collect();

        Tensor::from_vec(shape, data).unwrap()
    }
}

fuzz_target!(|spec: TensorSpec| {
    let t = spec.materialize();

    let non_anchor = unsplit_non_anchor(&split_non_anchor(&t).unwrap()).unwrap();
    let anchor = unsplit_anchor(&split_anchor(&t).unwrap()).unwrap();

    let restored = mix(&non_anchor, &anchor).unwrap();
    assert_eq!(restored, t, "split/unsplit/mix must reconstruct exactly");
});
