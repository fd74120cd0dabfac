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

//! Writer for chunky frame headers.

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{FRAME_HEADER_SIZE, FRAME_MARKER};
use crate::frames::header::FrameHeader;

/// Serializes a frame header into its 16-byte wire form.
///
/// The layout is: marker, packed_size (little-endian i32), unpacked_size
/// (little-endian i32), four zero reserved bytes.
///
/// # Example
///
/// ```
/// use chunky::frames::{write_frame_header, FrameHeader};
/// use chunky::constants::{FRAME_HEADER_SIZE, FRAME_MARKER};
///
/// let header = FrameHeader::new(10, 20).unwrap();
/// let bytes = write_frame_header(&header);
///
/// assert_eq!(bytes.len(), FRAME_HEADER_SIZE);
/// assert_eq!(&bytes[..4], &FRAME_MARKER);
/// ```
pub fn write_frame_header(header: &FrameHeader) -> Bytes {
    let mut bytes = BytesMut::with_capacity(FRAME_HEADER_SIZE);

    bytes.put_slice(&FRAME_MARKER);
    bytes.put_i32_le(header.packed_size);
    bytes.put_i32_le(header.unpacked_size);
    bytes.put_bytes(0, 4);

    bytes.freeze()
}
