use crate::error::BlockError;

/// Single-shot compression primitive plugged into the block layer.
///
/// The framing layer never inspects compressed bytes; it hands a whole block
/// to the codec and frames whatever comes back. Each implementation:
/// - Must compress/decompress individual blocks independently — no
///   cross-block state. This is the invariant that lets any record in a
///   stream be decoded knowing only its own header.
/// - Must reconstruct exactly the byte length it is asked for on decompress,
///   or fail.
///
/// An LZO kernel (the intended production primitive) satisfies this contract
/// directly; the `lzbs_codecs` crate bundles other conformant codecs so the
/// framing layer works without a native binding.
pub trait Codec: Send + Sync {
    /// Human-readable codec name for diagnostics.
    fn name(&self) -> &'static str;

    /// Compress a single independent block.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, BlockError>;

    /// Rewrite `compressed` in place so it decompresses faster, using full
    /// knowledge of the original bytes it was produced from.
    ///
    /// This is the second pass of optimize-mode compression: the payload may
    /// change arbitrarily, but it must still decompress to exactly `raw`.
    /// The default does nothing, which is conformant for codecs whose format
    /// has no post-hoc match rewriting.
    fn optimize(&self, compressed: &mut Vec<u8>, raw: &[u8]) -> Result<(), BlockError> {
        let _ = (compressed, raw);
        Ok(())
    }

    /// Decompress a single block to exactly `raw_len` bytes.
    ///
    /// `raw_len` comes from the block header; an implementation that cannot
    /// reconstruct exactly that many bytes must return
    /// [`BlockError::Decompression`].
    fn decompress(&self, compressed: &[u8], raw_len: usize) -> Result<Vec<u8>, BlockError>;
}
