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

//! Common definitions for chunky frame headers.

use crate::error::{ChunkyError, Result};

/// Represents a chunky frame header.
///
/// On the wire a frame header is 16 bytes:
/// - marker (4 bytes) — the fixed value `E5 A1 ED FE`
/// - packed_size (4 bytes) — signed little-endian length of the compressed payload
/// - unpacked_size (4 bytes) — signed little-endian length of the chunk before compression
/// - reserved (4 bytes) — always written as zero, never validated on read
///
/// The marker and reserved bytes carry no information beyond frame
/// delimitation, so only the two size fields are stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Length in bytes of the compressed payload that follows the header.
    pub packed_size: i32,
    /// Length in bytes of the chunk before compression.
    pub unpacked_size: i32,
}

impl FrameHeader {
    /// Creates a new FrameHeader with the given sizes.
    ///
    /// The wire format stores both sizes as signed 32-bit integers, so a
    /// negative value is representable but meaningless; it is rejected
    /// here rather than at every use site.
    pub fn new(packed_size: i32, unpacked_size: i32) -> Result<Self> {
        if packed_size < 0 {
            return Err(ChunkyError::InvalidSizeField(packed_size));
        }
        if unpacked_size < 0 {
            return Err(ChunkyError::InvalidSizeField(unpacked_size));
        }

        Ok(FrameHeader {
            packed_size,
            unpacked_size,
        })
    }

    /// The compressed payload length as a usize.
    pub fn packed_len(&self) -> usize {
        self.packed_size as usize
    }

    /// The uncompressed chunk length as a usize.
    pub fn unpacked_len(&self) -> usize {
        self.unpacked_size as usize
    }
}
