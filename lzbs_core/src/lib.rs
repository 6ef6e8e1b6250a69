//! Block-stream framing for LZO-family compression: bounded blocks,
//! checksummed self-describing records, invertible filters, and whole-stream
//! drivers. The compression kernel itself is abstracted behind [`Codec`];
//! see the `lzbs_codecs` crate for bundled implementations.

pub mod block;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod filter;
pub mod format;
pub mod stream;

pub use block::{compress_block, decompress_block, CompressOptions, DecompressOptions};
pub use checksum::{ChecksumKind, ChecksumPolicy};
pub use codec::Codec;
pub use error::{BlockError, ChecksumTarget, StreamError};
pub use filter::Filter;
pub use format::{BlockHeader, DEFAULT_BLOCK_SIZE, HEADER_SIZE, MAX_BLOCK_SIZE};
pub use stream::{compress_stream, decompress_stream, StreamStats};
