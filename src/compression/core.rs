//! The block codec seam.
//!
//! The container format never looks inside a payload; it only needs a way
//! to turn a chunk into compressed bytes and back. These traits are that
//! capability. The shipped implementation is LZ4 block mode (see
//! [`crate::compression::lz4`]), but anything that can reproduce a chunk
//! of a known exact size can stand in.

use bytes::Bytes;

use crate::error::Result;

/// Compresses one chunk at a time.
///
/// Implementations may keep internal buffers between calls; a compressor
/// is `&mut self` for exactly that reason.
pub trait Compressor {
    /// Compresses `data` and returns the compressed bytes.
    ///
    /// The output must not embed the uncompressed size: the container
    /// records both sizes in the frame header.
    fn compress(&mut self, data: &[u8]) -> Result<Bytes>;
}

/// Decompresses one payload at a time.
pub trait Decompressor {
    /// Decompresses `data`, which must reproduce exactly
    /// `expected_output_size` bytes.
    ///
    /// Producing any other number of bytes is a codec error, not a
    /// tolerated variation.
    fn decompress(&mut self, data: &[u8], expected_output_size: usize) -> Result<Bytes>;
}
