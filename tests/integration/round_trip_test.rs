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

//! Integration tests for the encoder/decoder round trip.
//!
//! These tests verify that payloads encoded into a container can be
//! correctly decoded back, in memory and through files.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use chunky::error::Result;
use chunky::{
    decode_file_to_file, decode_from_bytes, decode_from_file, encode_to_bytes, encode_to_file,
    EncoderConfig,
};

/// Helper that appends the null terminator the encoder is expected to add.
fn with_terminator(data: &[u8]) -> Vec<u8> {
    let mut expected = data.to_vec();
    if expected.last() != Some(&0) {
        expected.push(0);
    }
    expected
}

/// Helper that round-trips `data` in memory with the given chunk size.
fn round_trip(data: &[u8], chunk_size: usize) -> Result<Vec<u8>> {
    let config = EncoderConfig::with_chunk_size(chunk_size)?;
    let container = encode_to_bytes(data, config)?;
    let decoded = decode_from_bytes(&container)?;
    Ok(decoded.to_vec())
}

#[test]
fn test_round_trip_simple_payload() -> Result<()> {
    let data = b"a reasonably ordinary payload with some text in it";

    let decoded = round_trip(data, 524_288)?;
    assert_eq!(decoded, with_terminator(data));

    Ok(())
}

#[test]
fn test_round_trip_is_chunk_size_independent() -> Result<()> {
    let data = b"the same payload, split every which way";
    let expected = with_terminator(data);

    for chunk_size in [1, 2, 3, 7, 16, 64, 1024, 524_288] {
        let decoded = round_trip(data, chunk_size)?;
        assert_eq!(
            decoded, expected,
            "Round trip altered the payload at chunk_size {}",
            chunk_size
        );
    }

    Ok(())
}

#[test]
fn test_round_trip_already_terminated_payload_keeps_length() -> Result<()> {
    // The terminator is idempotent: no second null byte is appended
    let data = b"terminated\0";

    let decoded = round_trip(data, 524_288)?;
    assert_eq!(decoded, data);

    Ok(())
}

#[test]
fn test_round_trip_single_null_byte() -> Result<()> {
    let decoded = round_trip(b"\0", 524_288)?;
    assert_eq!(decoded, b"\0");

    Ok(())
}

#[test]
fn test_round_trip_random_payloads() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    for len in [1usize, 100, 1000, 10_000] {
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);

        for chunk_size in [64, 1000, 524_288] {
            let decoded = round_trip(&data, chunk_size)?;
            assert_eq!(
                decoded,
                with_terminator(&data),
                "Random payload of {} bytes did not survive chunk_size {}",
                len,
                chunk_size
            );
        }
    }

    Ok(())
}

#[test]
fn test_round_trip_highly_compressible_payload() -> Result<()> {
    let data = vec![b'a'; 100_000];

    let config = EncoderConfig::with_chunk_size(4096)?;
    let container = encode_to_bytes(&data, config)?;

    // Repetitive input must actually shrink
    assert!(container.len() < data.len());

    let decoded = decode_from_bytes(&container)?;
    assert_eq!(decoded.to_vec(), with_terminator(&data));

    Ok(())
}

#[test]
fn test_round_trip_through_file() -> Result<()> {
    let data = b"payload that goes to disk and back";

    let file = NamedTempFile::new().expect("Failed to create temp file");
    encode_to_file(data, file.path(), EncoderConfig::default())?;

    let decoded = decode_from_file(file.path())?;
    assert_eq!(decoded.to_vec(), with_terminator(data));

    Ok(())
}

#[test]
fn test_decode_file_to_file() -> Result<()> {
    let data = b"payload decoded into a second file";

    let container_file = NamedTempFile::new().expect("Failed to create temp file");
    let output_file = NamedTempFile::new().expect("Failed to create temp file");

    encode_to_file(data, container_file.path(), EncoderConfig::default())?;
    decode_file_to_file(container_file.path(), output_file.path())?;

    let written = std::fs::read(output_file.path())?;
    assert_eq!(written, with_terminator(data));

    Ok(())
}

#[test]
fn test_concatenated_containers_decode_as_one() -> Result<()> {
    // Frames are read until the marker stops matching, so two containers
    // written back-to-back decode as the concatenation of both payloads.
    let config = EncoderConfig::default();

    let mut combined = encode_to_bytes(b"first", config.clone())?.to_vec();
    combined.extend_from_slice(&encode_to_bytes(b"second", config)?);

    let decoded = decode_from_bytes(&combined)?;
    assert_eq!(&decoded[..], b"first\0second\0");

    Ok(())
}

#[test]
fn test_strip_newlines_round_trip() -> Result<()> {
    let config = EncoderConfig {
        strip_newlines: true,
        ..EncoderConfig::default()
    };

    let container = encode_to_bytes(b"stripped\r\n", config)?;
    let decoded = decode_from_bytes(&container)?;

    assert_eq!(&decoded[..], b"stripped\0");

    Ok(())
}
