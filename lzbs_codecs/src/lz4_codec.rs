use lzbs_core::{BlockError, Codec};

/// LZ4 block codec.
///
/// Uses the raw LZ4 block format with no size prefix — the framing layer's
/// record header already carries the uncompressed length, and it is handed
/// back to [`decompress`](Codec::decompress) as the exact output size, which
/// is the shape the `lz4_flex` block API wants.
///
/// Best for: exercising the framing layer at real compression speed, and
/// deployments that want LZO-like latency without a native kernel.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, BlockError> {
        Ok(lz4_flex::block::compress(raw))
    }

    fn decompress(&self, compressed: &[u8], raw_len: usize) -> Result<Vec<u8>, BlockError> {
        lz4_flex::block::decompress(compressed, raw_len)
            .map_err(|e| BlockError::decompression(e))
    }
}
