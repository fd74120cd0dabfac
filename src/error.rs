//! Error types for the chunky format.

use std::io;
use thiserror::Error;

/// The main error type for chunky operations.
#[derive(Debug, Error)]
pub enum ChunkyError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Tried to encode an empty payload. There is no last byte to
    /// inspect for the null-terminator rule, so nothing can be written.
    #[error("Cannot encode an empty payload")]
    EmptyInput,

    /// A frame marker matched but the source ended before supplying
    /// the rest of the 16-byte frame header.
    #[error("Unexpected end of frame header: {0}")]
    TruncatedHeader(String),

    /// A frame header declared more payload bytes than the source
    /// could supply. This is not recoverable.
    #[error("Missing frame payload: expected {expected} bytes, got {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    /// A frame header carried a negative size field.
    #[error("Frame header declares a negative size: {0}")]
    InvalidSizeField(i32),

    /// The block codec failed, either outright or by producing output
    /// of the wrong size. Propagated, never retried.
    #[error("Codec error: {0}")]
    Codec(String),

    /// An encoder or decoder was configured with invalid parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for chunky operations.
pub type Result<T> = std::result::Result<T, ChunkyError>;
