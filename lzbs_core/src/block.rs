//! Single-block compress and decompress operations.
//!
//! One call processes exactly one block record. Output is written only after
//! every fallible step for the block has succeeded, so a failed call never
//! leaves a partial record behind; callers must still treat the whole call
//! as failed and not assume any input was consumed usefully.
//!
//! # Record cycle, compress direction
//! ```text
//! read ≤ block_size bytes → filter (encode) → checksum raw
//!   → codec.compress [→ codec.optimize] → checksum payload
//!   → write 16-byte header + payload
//! ```
//! The decompress direction runs the same steps mirrored, verifying each
//! checksum where the compressor computed it.

use std::io::{self, ErrorKind, Read, Write};

use crate::checksum::{ChecksumKind, ChecksumPolicy};
use crate::codec::Codec;
use crate::error::{BlockError, ChecksumTarget};
use crate::filter::Filter;
use crate::format::{
    BlockHeader, DEFAULT_BLOCK_SIZE, HEADER_SIZE, MAX_BLOCK_SIZE, MAX_COMPRESSED_SIZE,
};

/// Knobs for [`compress_block`].
#[derive(Debug)]
pub struct CompressOptions {
    /// Bytes read from the input per block. Values above
    /// [`MAX_BLOCK_SIZE`] are capped; requesting more than the cap behaves
    /// identically to requesting exactly the cap. Zero is treated as one.
    pub block_size: u32,
    /// Algorithm filling both checksum slots of each record.
    pub checksum: ChecksumKind,
    /// Transform applied to the raw block before compression.
    pub filter: Filter,
    /// Run the codec's second optimize pass over each payload. Roughly
    /// doubles compression cost in exchange for faster future decompression.
    pub optimize: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            checksum: ChecksumKind::default(),
            filter: Filter::Identity,
            optimize: false,
        }
    }
}

/// Knobs for [`decompress_block`].
///
/// `checksum` must match what the compressing side used; the stream itself
/// carries no algorithm tag.
#[derive(Debug, Default)]
pub struct DecompressOptions {
    /// Algorithm assumed for both checksum slots of each record.
    pub checksum: ChecksumKind,
    /// Inverse transform applied to each block after decompression.
    pub filter: Filter,
    /// Response to a checksum that fails verification.
    pub on_checksum_fail: ChecksumPolicy,
}

/// Fill `buf` from `input`, stopping early only at end of stream.
///
/// Plain `read` may return short; this loops until the buffer is full or the
/// reader reports EOF, retrying interrupted reads.
fn read_up_to<R: Read + ?Sized>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match input.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Compress one block from `input` and write its record to `output`.
///
/// Reads up to `opts.block_size` bytes (capped at [`MAX_BLOCK_SIZE`]),
/// filters them, compresses them with `codec`, and writes a self-describing
/// record: 16-byte header (sizes and both checksums) followed by the
/// compressed payload.
///
/// Returns `(bytes_read, bytes_written)`. An exhausted input is a no-op
/// returning `(0, 0)` with nothing written — the stream-level end marker.
pub fn compress_block<R, W>(
    input: &mut R,
    output: &mut W,
    codec: &dyn Codec,
    opts: &CompressOptions,
) -> Result<(u64, u64), BlockError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    // Clamp the caller's request into the format's bounds; zero would read
    // nothing and masquerade as end of stream.
    let block_size = opts.block_size.clamp(1, MAX_BLOCK_SIZE) as usize;
    let mut raw = vec![0u8; block_size];
    let n = read_up_to(input, &mut raw)?;
    if n == 0 {
        return Ok((0, 0));
    }
    raw.truncate(n);

    opts.filter.encode(&mut raw)?;
    let uncompressed_checksum = opts.checksum.compute(&raw);

    let mut payload = codec.compress(&raw)?;
    if opts.optimize {
        codec.optimize(&mut payload, &raw)?;
    }
    // Checksum the payload as it will appear on the wire, i.e. after the
    // optimize pass has had its chance to rewrite it.
    let compressed_checksum = opts.checksum.compute(&payload);

    let header = BlockHeader {
        uncompressed_len: n as u32,
        compressed_len: payload.len() as u32,
        uncompressed_checksum,
        compressed_checksum,
    };
    output.write_all(&header.to_bytes())?;
    output.write_all(&payload)?;

    Ok((n as u64, (HEADER_SIZE + payload.len()) as u64))
}

/// Read one block record from `input`, verify it, and write the decoded
/// bytes to `output`.
///
/// Returns `(bytes_read, bytes_written)`, the read side counting the header.
/// A stream with no further header bytes is a clean end of stream returning
/// `(0, 0)`; a header or payload cut off partway through is a framing error.
///
/// Checksum verification runs twice — over the payload before decompression
/// and over the decompressed bytes after — and each mismatch is dispatched
/// through `opts.on_checksum_fail` independently.
pub fn decompress_block<R, W>(
    input: &mut R,
    output: &mut W,
    codec: &dyn Codec,
    opts: &DecompressOptions,
) -> Result<(u64, u64), BlockError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut header_buf = [0u8; HEADER_SIZE];
    let got = read_up_to(input, &mut header_buf)?;
    if got == 0 {
        return Ok((0, 0));
    }
    if got < HEADER_SIZE {
        return Err(BlockError::TruncatedHeader {
            wanted: HEADER_SIZE,
            got,
        });
    }
    let header = BlockHeader::from_bytes(&header_buf);

    // Reject absurd declared lengths before trusting them for allocation.
    if header.uncompressed_len > MAX_BLOCK_SIZE {
        return Err(BlockError::Oversized {
            declared: header.uncompressed_len,
            limit: MAX_BLOCK_SIZE,
        });
    }
    if header.compressed_len > MAX_COMPRESSED_SIZE {
        return Err(BlockError::Oversized {
            declared: header.compressed_len,
            limit: MAX_COMPRESSED_SIZE,
        });
    }

    let mut payload = vec![0u8; header.compressed_len as usize];
    let got = read_up_to(input, &mut payload)?;
    if got < payload.len() {
        return Err(BlockError::TruncatedPayload {
            declared: payload.len(),
            got,
        });
    }

    verify_or_dispatch(
        opts,
        ChecksumTarget::Compressed,
        &payload,
        header.compressed_checksum,
    )?;

    let mut raw = codec.decompress(&payload, header.uncompressed_len as usize)?;
    if raw.len() != header.uncompressed_len as usize {
        return Err(BlockError::decompression(format!(
            "block decompressed to {} bytes but header declares {}",
            raw.len(),
            header.uncompressed_len
        )));
    }

    verify_or_dispatch(
        opts,
        ChecksumTarget::Uncompressed,
        &raw,
        header.uncompressed_checksum,
    )?;

    opts.filter.decode(&mut raw)?;
    output.write_all(&raw)?;

    Ok((
        (HEADER_SIZE + payload.len()) as u64,
        raw.len() as u64,
    ))
}

/// Recompute one checksum slot and route a mismatch through the policy.
fn verify_or_dispatch(
    opts: &DecompressOptions,
    target: ChecksumTarget,
    data: &[u8],
    stored: u32,
) -> Result<(), BlockError> {
    let computed = opts.checksum.compute(data);
    if computed == stored {
        return Ok(());
    }
    match opts.on_checksum_fail {
        ChecksumPolicy::Fail => Err(BlockError::ChecksumMismatch {
            target,
            stored,
            computed,
        }),
        ChecksumPolicy::Warn => {
            tracing::warn!(
                "{target} checksum mismatch: stored {stored:#010x}, computed {computed:#010x}; continuing"
            );
            Ok(())
        }
        ChecksumPolicy::Ignore => Ok(()),
    }
}
