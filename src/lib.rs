pub mod bitstreams;
pub mod codec;
pub mod container;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod stats;

/// One fixed-width text unit (a UTF-16 code unit) of the input stream.
/// Characters outside the basic multilingual plane surface as two
/// independent symbols, each coded on its own.
pub type Symbol = u16;

pub use codec::{compress, decompress};
pub use error::{Error, Result};
