//! LZ4 block compression implementation for chunky.
//!
//! This module provides LZ4 compression and decompression using the
//! lz4_flex crate in raw block mode. No size prefix is embedded in the
//! compressed output; the container's frame headers carry both sizes.
//! The implementations maintain internal buffers for reuse.

use bytes::Bytes;
use lz4_flex::block;

use crate::compression::core::{Compressor, Decompressor};
use crate::error::{ChunkyError, Result};

/// LZ4 compressor implementation.
///
/// Compresses each chunk independently in LZ4 block mode, the fast
/// (non-HC) path.
#[derive(Debug, Default)]
pub struct Lz4Compressor {
    /// Internal buffer for compressed data
    compressed_buffer: Vec<u8>,
}

impl Lz4Compressor {
    /// Create a new Lz4Compressor.
    pub fn new() -> Self {
        Self {
            compressed_buffer: Vec::new(),
        }
    }
}

impl Compressor for Lz4Compressor {
    fn compress(&mut self, data: &[u8]) -> Result<Bytes> {
        // Size the buffer to the worst case so compress_into cannot run out
        let max_compressed_size = block::get_maximum_output_size(data.len());
        self.compressed_buffer.clear();
        self.compressed_buffer.resize(max_compressed_size, 0);

        match block::compress_into(data, &mut self.compressed_buffer) {
            Ok(compressed_size) => Ok(Bytes::copy_from_slice(
                &self.compressed_buffer[..compressed_size],
            )),
            Err(e) => Err(ChunkyError::Codec(format!("LZ4 compression failed: {}", e))),
        }
    }
}

/// LZ4 decompressor implementation.
///
/// Decompresses raw LZ4 blocks into a buffer of the exact expected size.
#[derive(Debug, Default)]
pub struct Lz4Decompressor {
    /// Buffer for decompressed data
    buffer: Vec<u8>,
}

impl Lz4Decompressor {
    /// Create a new Lz4Decompressor.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }
}

impl Decompressor for Lz4Decompressor {
    fn decompress(&mut self, data: &[u8], expected_output_size: usize) -> Result<Bytes> {
        self.buffer.resize(expected_output_size, 0);

        match block::decompress_into(data, &mut self.buffer) {
            Ok(actual_size) => {
                if actual_size != expected_output_size {
                    return Err(ChunkyError::Codec(format!(
                        "LZ4 decompression size mismatch: expected {}, got {}",
                        expected_output_size, actual_size
                    )));
                }

                // mem::take hands the buffer over and leaves an empty Vec
                // ready for the next call
                let decompressed = std::mem::take(&mut self.buffer);
                Ok(Bytes::from(decompressed))
            }
            Err(e) => Err(ChunkyError::Codec(format!(
                "LZ4 decompression failed: {}",
                e
            ))),
        }
    }
}
