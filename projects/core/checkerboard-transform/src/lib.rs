#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub(crate) mod error;
pub(crate) mod mix;
pub(crate) mod repack;
pub(crate) mod split;
pub(crate) mod tensor;
pub(crate) mod unsplit;

pub use error::CheckerboardError;
pub use mix::mix;
pub use repack::{channel_to_space, space_to_channel};
pub use split::{split_anchor, split_non_anchor};
pub use tensor::{Shape, Tensor};
pub use unsplit::{unsplit_anchor, unsplit_non_anchor};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
