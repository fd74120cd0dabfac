// Copyright 2024
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Encoder for the chunky container format.
//!
//! The encoder normalizes a payload (optional trailing newline strip, then
//! a mandatory null terminator), splits it into fixed-size chunks and
//! writes one self-describing frame per chunk.

use std::io::Write;

use bytes::{BufMut, BytesMut};
use log::debug;

use crate::compression::{Compressor, Lz4Compressor};
use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::error::{ChunkyError, Result};
use crate::frames::{write_frame_header, FrameHeader};

/// Configuration options for an Encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Size of an uncompressed chunk in bytes (default: 512 KiB).
    ///
    /// Every chunk except possibly the last has exactly this length.
    /// The chunk size is not recorded in the container; a decoder needs
    /// no knowledge of it.
    pub chunk_size: usize,

    /// Whether to remove trailing carriage-return/line-feed bytes from
    /// the payload before the null terminator is applied.
    ///
    /// Older writers of this format exposed the same flag but ignored
    /// it, so setting it was byte-identical to leaving it unset. Here
    /// the flag is honored; leave it unset to reproduce the old output
    /// exactly.
    pub strip_newlines: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            strip_newlines: false,
        }
    }
}

impl EncoderConfig {
    /// Creates a new EncoderConfig with a custom chunk size.
    ///
    /// Returns an error if the chunk size is zero or does not fit the
    /// signed 32-bit size field of a frame header.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self> {
        let config = Self {
            chunk_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkyError::InvalidConfig(
                "Chunk size must be greater than zero".to_string(),
            ));
        }
        if self.chunk_size > i32::MAX as usize {
            return Err(ChunkyError::InvalidConfig(format!(
                "Chunk size ({}) does not fit the signed 32-bit frame size field",
                self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Encoder for chunky containers.
///
/// Writes a sequence of frames to the underlying sink; the output is the
/// concatenation of the frame encodings with no outer wrapper. Encoding
/// operates on a copy of the input and never mutates the caller's buffer.
///
/// # Example
///
/// ```
/// use chunky::encoder::Encoder;
///
/// let mut sink = Vec::new();
/// let mut encoder = Encoder::new(&mut sink).unwrap();
/// encoder.encode(b"hello world").unwrap();
/// assert!(!sink.is_empty());
/// ```
pub struct Encoder<Sink: Write> {
    /// The underlying sink.
    sink: Sink,

    /// Configuration for the encoder.
    config: EncoderConfig,

    /// The block codec used to compress each chunk.
    compressor: Box<dyn Compressor>,
}

impl<Sink: Write> Encoder<Sink> {
    /// Creates a new Encoder with default configuration.
    pub fn new(sink: Sink) -> Result<Self> {
        Self::with_config(sink, EncoderConfig::default())
    }

    /// Creates a new Encoder with custom configuration.
    pub fn with_config(sink: Sink, config: EncoderConfig) -> Result<Self> {
        Self::with_compressor(sink, config, Box::new(Lz4Compressor::new()))
    }

    /// Creates a new Encoder with a custom block codec.
    pub fn with_compressor(
        sink: Sink,
        config: EncoderConfig,
        compressor: Box<dyn Compressor>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            sink,
            config,
            compressor,
        })
    }

    /// Encodes a payload and writes its frames to the sink.
    ///
    /// The logical payload is `data` with trailing CR/LF stripped when
    /// [`EncoderConfig::strip_newlines`] is set, followed by a null
    /// terminator unless the data already ends in one. The terminator is
    /// part of the payload: it is chunked, compressed and reproduced by
    /// the decoder.
    ///
    /// # Errors
    ///
    /// * [`ChunkyError::EmptyInput`] if the payload is empty after the
    ///   strip step.
    /// * [`ChunkyError::Codec`] if a chunk cannot be compressed.
    /// * [`ChunkyError::Io`] if writing to the sink fails.
    pub fn encode(&mut self, data: &[u8]) -> Result<()> {
        let payload = normalized_payload(data, self.config.strip_newlines)?;

        for chunk in payload.chunks(self.config.chunk_size) {
            let compressed = self.compressor.compress(chunk)?;

            let packed_size = i32::try_from(compressed.len()).map_err(|_| {
                ChunkyError::Codec(format!(
                    "Compressed chunk of {} bytes does not fit the frame size field",
                    compressed.len()
                ))
            })?;
            // chunk.len() <= chunk_size, which validate() bounds to i32::MAX
            let header = FrameHeader::new(packed_size, chunk.len() as i32)?;

            self.sink.write_all(&write_frame_header(&header))?;
            self.sink.write_all(&compressed)?;

            debug!(
                "wrote frame: packed_size={} unpacked_size={}",
                header.packed_size, header.unpacked_size
            );
        }

        Ok(())
    }

    /// Returns the underlying sink, consuming self.
    pub fn into_inner(self) -> Sink {
        self.sink
    }

    /// Gets a reference to the underlying sink.
    pub fn get_ref(&self) -> &Sink {
        &self.sink
    }

    /// Gets a mutable reference to the underlying sink.
    pub fn get_mut(&mut self) -> &mut Sink {
        &mut self.sink
    }
}

/// Builds the logical payload from the caller's data.
///
/// Copies the input, strips trailing `\r`/`\n` bytes when asked, and
/// appends a single null terminator unless one is already present.
fn normalized_payload(data: &[u8], strip_newlines: bool) -> Result<BytesMut> {
    let mut payload = BytesMut::from(data);

    if strip_newlines {
        while let Some(&last) = payload.last() {
            if last != b'\r' && last != b'\n' {
                break;
            }
            payload.truncate(payload.len() - 1);
        }
    }

    match payload.last() {
        None => Err(ChunkyError::EmptyInput),
        Some(&0) => Ok(payload),
        Some(_) => {
            payload.put_u8(0);
            Ok(payload)
        }
    }
}
