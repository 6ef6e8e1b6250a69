//! On-wire shape of a block record.
//!
//! A stream is a plain sequence of block records with no leading magic and no
//! trailing index; the stream ends when the reader finds no further header
//! bytes. Each record is independently decodable.

/// Hard upper bound on the raw bytes a single block may hold: 64 MiB.
///
/// Requests above this are silently capped; a header declaring more is
/// treated as corrupt framing.
pub const MAX_BLOCK_SIZE: u32 = 64 * 1024 * 1024;

/// Raw bytes read per block when the caller does not choose: 256 KiB.
pub const DEFAULT_BLOCK_SIZE: u32 = 256 * 1024;

/// Largest compressed payload length a header may declare.
///
/// LZO-family codecs expand incompressible input by at most
/// `len + len/16 + 64 + 3`; a declared payload beyond this bound for a
/// maximum-size block cannot have been produced by a conformant compressor
/// and is rejected before any allocation.
pub const MAX_COMPRESSED_SIZE: u32 = MAX_BLOCK_SIZE + MAX_BLOCK_SIZE / 16 + 64 + 3;

/// Serialized size of a [`BlockHeader`] in bytes.
///   uncompressed_len:u32 + compressed_len:u32
///   + uncompressed_checksum:u32 + compressed_checksum:u32
///   = 4 + 4 + 4 + 4 = 16
pub const HEADER_SIZE: usize = 16;

/// Decoded representation of the 16-byte record header that precedes each
/// compressed payload.
///
/// All four fields are written big-endian (network order). The checksum
/// fields hold whichever algorithm the two endpoints agreed on; the header
/// itself carries no algorithm tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Bytes the payload decompresses to — the number of bytes actually read
    /// from the input for this block.
    pub uncompressed_len: u32,
    /// Byte length of the compressed payload that follows the header.
    pub compressed_len: u32,
    /// Checksum of the (filtered) uncompressed block bytes.
    pub uncompressed_checksum: u32,
    /// Checksum of the compressed payload.
    pub compressed_checksum: u32,
}

impl BlockHeader {
    /// Serialize to exactly [`HEADER_SIZE`] bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.uncompressed_len.to_be_bytes());
        buf[4..8].copy_from_slice(&self.compressed_len.to_be_bytes());
        buf[8..12].copy_from_slice(&self.uncompressed_checksum.to_be_bytes());
        buf[12..16].copy_from_slice(&self.compressed_checksum.to_be_bytes());
        buf
    }

    /// Deserialize from exactly [`HEADER_SIZE`] bytes.
    ///
    /// Never fails: there is no magic to check and every bit pattern is a
    /// syntactically valid header. Length sanity limits are enforced by the
    /// decompress path, which knows how to classify a violation.
    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Self {
        Self {
            uncompressed_len: u32::from_be_bytes(buf[0..4].try_into().unwrap()),
            compressed_len: u32::from_be_bytes(buf[4..8].try_into().unwrap()),
            uncompressed_checksum: u32::from_be_bytes(buf[8..12].try_into().unwrap()),
            compressed_checksum: u32::from_be_bytes(buf[12..16].try_into().unwrap()),
        }
    }
}
