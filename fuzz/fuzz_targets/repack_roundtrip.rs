#![no_main]

// Checks that the 2x2 block repack is a bijection: channel_to_space must
// restore space_to_channel's input bit-for-bit for every valid shape.

use checkerboard_transform::{channel_to_space, space_to_channel, Shape, Tensor};
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

    let restored = channel_to_space(&space_to_channel(&t).unwrap()).unwrap();
    assert_eq!(restored, t, "block repack must round-trip exactly");
});
