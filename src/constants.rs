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

//! Constants of the chunky container format.

/// The 4-byte marker that opens every frame.
///
/// The decoder keeps reading frames for as long as the next four bytes of
/// the source equal this marker; anything else ends decoding.
pub const FRAME_MARKER: [u8; 4] = [0xE5, 0xA1, 0xED, 0xFE];

/// Size of a frame header in bytes.
///
/// A header is always 16 bytes: 4 for the marker, 4 for packed_size,
/// 4 for unpacked_size and 4 reserved zero bytes.
pub const FRAME_HEADER_SIZE: usize = 16;

/// Default size of an uncompressed chunk in bytes (512 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 524_288;
