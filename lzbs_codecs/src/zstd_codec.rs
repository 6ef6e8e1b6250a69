use lzbs_core::{BlockError, Codec};

/// Zstandard block codec.
///
/// Each block is compressed independently at the configured level
/// (default: 3), so any record can be decoded knowing only its own header.
///
/// Best for: throughput-insensitive streams where ratio matters more than
/// decode speed.
pub struct ZstdCodec {
    /// Compression level (1 = fast / larger, 22 = slow / smallest).
    pub level: i32,
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, BlockError> {
        zstd::bulk::compress(raw, self.level).map_err(|e| BlockError::compression(e))
    }

    fn decompress(&self, compressed: &[u8], raw_len: usize) -> Result<Vec<u8>, BlockError> {
        // raw_len bounds the output buffer; a payload that inflates past the
        // declared length fails here rather than over-allocating.
        zstd::bulk::decompress(compressed, raw_len).map_err(|e| BlockError::decompression(e))
    }
}
