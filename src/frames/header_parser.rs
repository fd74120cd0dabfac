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

//! Parser for chunky frame headers.
//!
//! The end of a container is implicit: it is wherever the next four bytes
//! of the source stop being a frame marker. [`read_optional_frame_header`]
//! makes that rule explicit by returning `Ok(None)` instead of treating a
//! mismatch as a parse failure.

use std::io::Read;

use bytes::Buf;

use crate::constants::{FRAME_HEADER_SIZE, FRAME_MARKER};
use crate::error::{ChunkyError, Result};
use crate::frames::header::FrameHeader;

/// Reads until `buf` is full or the source is exhausted.
///
/// Returns the number of bytes actually read, which is less than
/// `buf.len()` only at end of stream. Interrupted reads are retried.
pub(crate) fn read_full<Source: Read>(source: &mut Source, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChunkyError::Io(e)),
        }
    }
    Ok(filled)
}

/// Attempts to read the next frame header from the source.
///
/// # Returns
///
/// * `Ok(Some(header))` — a full, valid frame header was read; the source
///   is now positioned at the first byte of the compressed payload.
/// * `Ok(None)` — soft termination: the source ended within the first four
///   bytes, or the four bytes read do not equal the frame marker. This is
///   the normal end of a container, not an error. Any bytes consumed by
///   the attempt are discarded, not pushed back.
/// * `Err(TruncatedHeader)` — the marker matched but the source ended
///   before supplying the remaining 12 header bytes.
/// * `Err(InvalidSizeField)` — a size field was negative.
pub fn read_optional_frame_header<Source: Read>(
    source: &mut Source,
) -> Result<Option<FrameHeader>> {
    let mut marker = [0u8; FRAME_MARKER.len()];
    let filled = read_full(source, &mut marker)?;
    if filled < marker.len() || marker != FRAME_MARKER {
        return Ok(None);
    }

    // Marker matched: the rest of the header is now mandatory.
    let mut rest = [0u8; FRAME_HEADER_SIZE - FRAME_MARKER.len()];
    let filled = read_full(source, &mut rest)?;
    if filled < rest.len() {
        return Err(ChunkyError::TruncatedHeader(format!(
            "marker matched but only {} of {} header bytes were available",
            FRAME_MARKER.len() + filled,
            FRAME_HEADER_SIZE
        )));
    }

    let mut buf = &rest[..];
    let packed_size = buf.get_i32_le();
    let unpacked_size = buf.get_i32_le();
    // The remaining four reserved bytes are discarded without validation.

    FrameHeader::new(packed_size, unpacked_size).map(Some)
}
