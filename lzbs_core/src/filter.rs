//! Invertible pre-compression / post-decompression transforms.

use std::fmt;

use crate::error::BlockError;

/// Result type filter transforms return; any error aborts the enclosing
/// block operation as [`BlockError::Filter`].
pub type FilterResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Boxed in-place transform over one whole block's bytes.
pub type FilterFn = Box<dyn Fn(&mut [u8]) -> FilterResult + Send + Sync>;

/// Invertible, length-preserving, in-place byte transform applied to a
/// block's uncompressed bytes — `encode` before compression, `decode` after
/// decompression.
///
/// Transforms always receive the entire block at once, never a partial
/// buffer. Carrying the forward and inverse transforms in one value keeps a
/// mismatched encode/decode pairing from being expressible at all; the only
/// contract a custom pair must honor is that `decode(encode(b)) == b`
/// bit-for-bit.
pub enum Filter {
    /// Leave block bytes untouched. The default.
    Identity,
    /// Caller-supplied transform pair.
    Custom {
        /// Runs on the raw block before compression.
        encode: FilterFn,
        /// Runs on the decompressed block; must invert `encode` exactly.
        decode: FilterFn,
    },
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Identity
    }
}

impl Filter {
    /// Pair a forward transform with its inverse.
    pub fn custom<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&mut [u8]) -> FilterResult + Send + Sync + 'static,
        D: Fn(&mut [u8]) -> FilterResult + Send + Sync + 'static,
    {
        Filter::Custom {
            encode: Box::new(encode),
            decode: Box::new(decode),
        }
    }

    /// Apply the forward transform in place.
    pub fn encode(&self, block: &mut [u8]) -> Result<(), BlockError> {
        match self {
            Filter::Identity => Ok(()),
            Filter::Custom { encode, .. } => encode(block).map_err(BlockError::Filter),
        }
    }

    /// Apply the inverse transform in place.
    pub fn decode(&self, block: &mut [u8]) -> Result<(), BlockError> {
        match self {
            Filter::Identity => Ok(()),
            Filter::Custom { decode, .. } => decode(block).map_err(BlockError::Filter),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Identity => f.write_str("Identity"),
            Filter::Custom { .. } => f.write_str("Custom"),
        }
    }
}
