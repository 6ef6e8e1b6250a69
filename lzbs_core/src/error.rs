use std::fmt;
use std::io;

use thiserror::Error;

/// Which of a block record's two checksummed buffers failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumTarget {
    /// The compressed payload as read from the stream.
    Compressed,
    /// The decompressed block bytes, before the decode filter runs.
    Uncompressed,
}

impl fmt::Display for ChecksumTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumTarget::Compressed => f.write_str("compressed"),
            ChecksumTarget::Uncompressed => f.write_str("uncompressed"),
        }
    }
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while coding a single block.
///
/// Every variant except a [`ChecksumMismatch`](BlockError::ChecksumMismatch)
/// downgraded by the caller's [`ChecksumPolicy`](crate::ChecksumPolicy)
/// aborts the block — and, through the stream drivers, the whole stream.
/// There is no partial recovery at this layer.
#[derive(Debug, Error)]
pub enum BlockError {
    /// The underlying reader or writer failed.
    #[error("i/o failure on the underlying stream")]
    Io(#[from] io::Error),

    /// The stream ended partway through a block header.
    ///
    /// A stream that ends *before* a header begins is a clean end of stream,
    /// not an error; this variant means some but not all header bytes were
    /// available.
    #[error("truncated block header: wanted {wanted} bytes, stream ended after {got}")]
    TruncatedHeader { wanted: usize, got: usize },

    /// The stream ended before the payload declared by the header.
    #[error("truncated block payload: header declares {declared} bytes, stream ended after {got}")]
    TruncatedPayload { declared: usize, got: usize },

    /// A header declared a length beyond the format's hard limits.
    #[error("corrupt block header: declared length {declared} exceeds the {limit}-byte limit")]
    Oversized { declared: u32, limit: u32 },

    /// A caller-supplied filter signaled failure.
    #[error("block filter failed")]
    Filter(#[source] BoxedError),

    /// The codec rejected the block on the compress path.
    #[error("codec could not compress block")]
    Compression(#[source] BoxedError),

    /// The codec could not reconstruct the declared number of bytes.
    #[error("codec could not decompress block")]
    Decompression(#[source] BoxedError),

    /// A stored checksum did not match the recomputed value.
    ///
    /// Only surfaced under [`ChecksumPolicy::Fail`](crate::ChecksumPolicy);
    /// the `Warn` and `Ignore` policies downgrade the mismatch before it
    /// becomes an error.
    #[error("{target} checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        target: ChecksumTarget,
        stored: u32,
        computed: u32,
    },
}

impl BlockError {
    /// Wrap a filter's failure cause.
    pub fn filter(source: impl Into<BoxedError>) -> Self {
        BlockError::Filter(source.into())
    }

    /// Wrap a codec's compress-side failure cause.
    pub fn compression(source: impl Into<BoxedError>) -> Self {
        BlockError::Compression(source.into())
    }

    /// Wrap a codec's decompress-side failure cause.
    pub fn decompression(source: impl Into<BoxedError>) -> Self {
        BlockError::Decompression(source.into())
    }
}

/// A block failure wrapped with its position in the stream.
///
/// `block` is the zero-based index of the failing block; `offset` is the byte
/// offset within the driver's input stream at which that block began (the
/// record start on the decompress path, the raw-data start on the compress
/// path). Bytes committed to the output for earlier blocks are left intact.
#[derive(Debug, Error)]
#[error("block {block} at input offset {offset} failed")]
pub struct StreamError {
    pub block: u64,
    pub offset: u64,
    #[source]
    pub source: BlockError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_mismatch_message_names_the_target() {
        let err = BlockError::ChecksumMismatch {
            target: ChecksumTarget::Compressed,
            stored: 0xdead_beef,
            computed: 0x0bad_f00d,
        };
        let msg = err.to_string();
        assert!(msg.contains("compressed"), "got: {msg}");
        assert!(msg.contains("0xdeadbeef"), "got: {msg}");
    }

    #[test]
    fn stream_error_exposes_source_kind() {
        let err = StreamError {
            block: 3,
            offset: 48,
            source: BlockError::TruncatedHeader { wanted: 16, got: 5 },
        };
        assert!(err.to_string().contains("block 3"));
        assert!(matches!(
            err.source,
            BlockError::TruncatedHeader { wanted: 16, got: 5 }
        ));
    }
}
