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

//! Decoder for the chunky container format.
//!
//! The decoder is a two-state machine: it keeps pulling frames while the
//! next four bytes of the source equal the frame marker, and ends
//! successfully the moment they do not. Hard failures (a truncated header
//! or payload, a codec error) abort the whole decode; the soft marker
//! mismatch is a normal end, indistinguishable from a container that
//! legitimately holds that many frames.

use std::io::Read;

use bytes::{Bytes, BytesMut};
use log::debug;

use crate::compression::{Decompressor, Lz4Decompressor};
use crate::error::{ChunkyError, Result};
use crate::frames::header_parser::{read_full, read_optional_frame_header};

/// Decoder for chunky containers.
///
/// # Example
///
/// ```
/// use chunky::decoder::Decoder;
/// use chunky::encoder::Encoder;
///
/// let mut encoder = Encoder::new(Vec::new()).unwrap();
/// encoder.encode(b"some payload").unwrap();
/// let container = encoder.into_inner();
///
/// let mut decoder = Decoder::new(&container[..]);
/// let decoded = decoder.decode().unwrap();
/// assert_eq!(&decoded[..], b"some payload\0");
/// ```
pub struct Decoder<Source: Read> {
    /// The underlying source.
    source: Source,

    /// The block codec used to decompress each payload.
    decompressor: Box<dyn Decompressor>,
}

impl<Source: Read> Decoder<Source> {
    /// Creates a new Decoder with the default LZ4 block codec.
    pub fn new(source: Source) -> Self {
        Self::with_decompressor(source, Box::new(Lz4Decompressor::new()))
    }

    /// Creates a new Decoder with a custom block codec.
    pub fn with_decompressor(source: Source, decompressor: Box<dyn Decompressor>) -> Self {
        Self {
            source,
            decompressor,
        }
    }

    /// Reads and decompresses the next frame from the source.
    ///
    /// Returns `Ok(None)` on soft termination: end of stream at a frame
    /// boundary, or four bytes that are not the frame marker. Bytes
    /// consumed by the failed marker read are discarded, not pushed back.
    ///
    /// # Errors
    ///
    /// * [`ChunkyError::TruncatedHeader`] — the marker matched but the
    ///   header was incomplete.
    /// * [`ChunkyError::TruncatedPayload`] — the header declared more
    ///   payload bytes than the source supplied.
    /// * [`ChunkyError::Codec`] — the payload did not decompress to
    ///   exactly the declared unpacked size.
    pub fn read_frame(&mut self) -> Result<Option<Bytes>> {
        let header = match read_optional_frame_header(&mut self.source)? {
            Some(header) => header,
            None => {
                debug!("no frame marker at boundary; ending decode");
                return Ok(None);
            }
        };

        let mut payload = vec![0u8; header.packed_len()];
        let filled = read_full(&mut self.source, &mut payload)?;
        if filled < payload.len() {
            return Err(ChunkyError::TruncatedPayload {
                expected: payload.len(),
                actual: filled,
            });
        }

        let chunk = self
            .decompressor
            .decompress(&payload, header.unpacked_len())?;

        debug!(
            "read frame: packed_size={} unpacked_size={}",
            header.packed_size, header.unpacked_size
        );

        Ok(Some(chunk))
    }

    /// Decodes the whole container, concatenating every frame's chunk.
    ///
    /// The returned bytes include the trailing null terminator written by
    /// the encoder; decoding performs no trimming.
    pub fn decode(&mut self) -> Result<Bytes> {
        let mut output = BytesMut::new();

        while let Some(chunk) = self.read_frame()? {
            output.extend_from_slice(&chunk);
        }

        Ok(output.freeze())
    }

    /// Returns the underlying source, consuming self.
    pub fn into_inner(self) -> Source {
        self.source
    }

    /// Gets a reference to the underlying source.
    pub fn get_ref(&self) -> &Source {
        &self.source
    }

    /// Gets a mutable reference to the underlying source.
    pub fn get_mut(&mut self) -> &mut Source {
        &mut self.source
    }
}
