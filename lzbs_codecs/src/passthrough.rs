use lzbs_core::{BlockError, Codec};

/// No-op codec: stores block bytes verbatim.
///
/// Useful for:
/// - Verifying the framing and checksum layers independently of any codec.
/// - Data that is already compressed, where a real codec would expand it.
pub struct PassThrough;

impl Codec for PassThrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, BlockError> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8], raw_len: usize) -> Result<Vec<u8>, BlockError> {
        if compressed.len() != raw_len {
            return Err(BlockError::decompression(format!(
                "stored block is {} bytes but {} were declared",
                compressed.len(),
                raw_len
            )));
        }
        Ok(compressed.to_vec())
    }
}
