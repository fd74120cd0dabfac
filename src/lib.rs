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

//! Chunky is a chunked LZ4 block container format.
//!
//! A payload is split into fixed-size chunks (512 KiB by default), each
//! chunk is compressed independently in LZ4 block mode, and the results
//! are written back-to-back as self-describing frames:
//!
//! ```text
//! marker (4) | packed_size (i32 le) | unpacked_size (i32 le) | reserved (4) | payload
//! ```
//!
//! There is no outer length field and no trailer: a container ends
//! wherever the next four bytes stop being the frame marker. Before
//! chunking, the payload is normalized with a trailing null terminator
//! (and optionally stripped of trailing newlines); the terminator is part
//! of the decoded output and is never trimmed by the decoder.
//!
//! The format carries no checksum and no version information.
//!
//! # Example
//!
//! ```
//! use chunky::{decode_from_bytes, encode_to_bytes, EncoderConfig};
//!
//! let container = encode_to_bytes(b"hello world", EncoderConfig::default()).unwrap();
//! let decoded = decode_from_bytes(&container).unwrap();
//!
//! // The null terminator written by the encoder is part of the output
//! assert_eq!(&decoded[..], b"hello world\0");
//! ```

pub mod compression;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frames;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use bytes::Bytes;

// Re-exports for a cleaner API
pub use decoder::Decoder;
pub use encoder::{Encoder, EncoderConfig};
pub use error::{ChunkyError, Result};

/// Encodes a payload into an in-memory container.
pub fn encode_to_bytes(data: &[u8], config: EncoderConfig) -> Result<Bytes> {
    let mut encoder = Encoder::with_config(Vec::new(), config)?;
    encoder.encode(data)?;
    Ok(Bytes::from(encoder.into_inner()))
}

/// Encodes a payload and writes the container to the given sink.
pub fn encode_to_sink<Sink: Write>(data: &[u8], sink: Sink, config: EncoderConfig) -> Result<()> {
    let mut encoder = Encoder::with_config(sink, config)?;
    encoder.encode(data)
}

/// Decodes a whole container from the given source.
pub fn decode_from_source<Source: Read>(source: Source) -> Result<Bytes> {
    Decoder::new(source).decode()
}

/// Decodes a whole container held in memory.
pub fn decode_from_bytes(buffer: &[u8]) -> Result<Bytes> {
    decode_from_source(buffer)
}

/// Encodes a payload and writes the container to a file at the given path.
///
/// The file handle is scoped to this call and released on every exit path.
pub fn encode_to_file<P: AsRef<Path>>(data: &[u8], path: P, config: EncoderConfig) -> Result<()> {
    let file = File::create(path)?;
    encode_to_sink(data, file, config)
}

/// Decodes a container file into memory.
pub fn decode_from_file<P: AsRef<Path>>(path: P) -> Result<Bytes> {
    let file = File::open(path)?;
    decode_from_source(file)
}

/// Decodes a container file and writes the decoded payload to a new file.
pub fn decode_file_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<()> {
    let decoded = decode_from_file(input_path)?;

    let mut output = File::create(output_path)?;
    output.write_all(&decoded)?;

    Ok(())
}
