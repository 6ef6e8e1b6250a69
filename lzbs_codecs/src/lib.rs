//! Bundled [`Codec`] implementations for the block-stream framing layer.
//!
//! None of these is an LZO kernel — that plugs in from outside through the
//! same trait. These satisfy the identical single-shot contract, so the
//! framing layer is fully usable (and testable) without a native binding.

mod lz4_codec;
mod passthrough;
mod zstd_codec;

pub use lz4_codec::Lz4Codec;
pub use passthrough::PassThrough;
pub use zstd_codec::ZstdCodec;

use std::sync::Arc;

use lzbs_core::Codec;

/// Resolve a bundled codec from its name.
///
/// The block stream carries no in-band codec tag, so both endpoints name the
/// codec out of band — typically from configuration — and resolve it here.
pub fn codec_by_name(name: &str) -> Option<Arc<dyn Codec>> {
    match name {
        "passthrough" | "store" => Some(Arc::new(PassThrough)),
        "lz4" => Some(Arc::new(Lz4Codec)),
        "zstd" => Some(Arc::new(ZstdCodec::default())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        for name in ["passthrough", "store", "lz4", "zstd"] {
            let codec = codec_by_name(name).unwrap();
            assert!(!codec.name().is_empty());
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(codec_by_name("lzma").is_none());
    }
}
