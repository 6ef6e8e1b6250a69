//! Whole-stream drivers.
//!
//! A driver loops the single-block operation until it reports `(0, 0)` —
//! the clean end-of-stream signal — accumulating running byte totals. The
//! first block failure halts the stream immediately; nothing here retries.

use std::io::{Read, Write};

use crate::block::{compress_block, decompress_block, CompressOptions, DecompressOptions};
use crate::codec::Codec;
use crate::error::StreamError;

/// Byte totals accumulated by a stream driver over one full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Total bytes consumed from the input stream.
    pub bytes_read: u64,
    /// Total bytes committed to the output stream.
    pub bytes_written: u64,
    /// Number of block records processed.
    pub blocks: u64,
}

/// Compress `input` to the end, writing one block record per
/// `opts.block_size` bytes (the final block may be shorter).
///
/// The output is flushed once the input is exhausted. On failure the
/// returned [`StreamError`] carries the failing block's index and the input
/// offset where it began; records already written for earlier blocks remain
/// in the output.
pub fn compress_stream<R, W>(
    input: &mut R,
    output: &mut W,
    codec: &dyn Codec,
    opts: &CompressOptions,
) -> Result<StreamStats, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = StreamStats::default();
    loop {
        match compress_block(input, output, codec, opts) {
            Ok((0, 0)) => break,
            Ok((read, written)) => {
                stats.bytes_read += read;
                stats.bytes_written += written;
                stats.blocks += 1;
            }
            Err(source) => return Err(at(&stats, source)),
        }
    }
    output.flush().map_err(|e| at(&stats, e.into()))?;
    Ok(stats)
}

/// Decompress block records from `input` to the end of the stream.
///
/// Same looping, accounting, and failure contract as [`compress_stream`];
/// here `bytes_read` counts compressed records (headers included) and
/// `bytes_written` counts reconstructed data.
pub fn decompress_stream<R, W>(
    input: &mut R,
    output: &mut W,
    codec: &dyn Codec,
    opts: &DecompressOptions,
) -> Result<StreamStats, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = StreamStats::default();
    loop {
        match decompress_block(input, output, codec, opts) {
            Ok((0, 0)) => break,
            Ok((read, written)) => {
                stats.bytes_read += read;
                stats.bytes_written += written;
                stats.blocks += 1;
            }
            Err(source) => return Err(at(&stats, source)),
        }
    }
    output.flush().map_err(|e| at(&stats, e.into()))?;
    Ok(stats)
}

/// Pin a block failure to the position the driver had reached.
fn at(stats: &StreamStats, source: crate::error::BlockError) -> StreamError {
    StreamError {
        block: stats.blocks,
        offset: stats.bytes_read,
        source,
    }
}
