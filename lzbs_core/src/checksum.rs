//! Block integrity checksums.
//!
//! Every block record carries two 32-bit checksums, one over the (filtered)
//! uncompressed bytes and one over the compressed payload. Both slots use the
//! same algorithm, chosen once per compress/decompress call. The choice is
//! not recorded on the wire: compressor and decompressor must agree out of
//! band, exactly like the block format's other fixed parameters.

/// Checksum algorithm applied to both slots of every block record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumKind {
    /// Adler-32 rolling checksum (the zlib flavor). The default.
    #[default]
    Adler32,
    /// CRC-32 with the IEEE polynomial.
    Crc32,
}

impl ChecksumKind {
    /// Checksum `data` in full.
    ///
    /// Total over all inputs: the empty buffer checksums to 1 (Adler-32) or
    /// 0 (CRC-32).
    pub fn compute(self, data: &[u8]) -> u32 {
        match self {
            ChecksumKind::Adler32 => {
                let mut adler = adler2::Adler32::new();
                adler.write_slice(data);
                adler.checksum()
            }
            ChecksumKind::Crc32 => crc32fast::hash(data),
        }
    }

    /// Recompute over `data` and compare against a stored value.
    pub fn verify(self, data: &[u8], expected: u32) -> bool {
        self.compute(data) == expected
    }
}

/// What the decompress path does when a stored checksum does not match the
/// recomputed value.
///
/// Applied independently to the compressed-payload check and the
/// uncompressed-data check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Abort the block with [`BlockError::ChecksumMismatch`]; no bytes for
    /// the block reach the output. The default.
    ///
    /// [`BlockError::ChecksumMismatch`]: crate::BlockError::ChecksumMismatch
    #[default]
    Fail,
    /// Log a warning and keep going as if the checksum had matched.
    Warn,
    /// Keep going silently.
    Ignore,
}
