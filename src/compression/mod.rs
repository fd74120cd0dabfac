pub mod core;
pub mod lz4;

pub use core::{Compressor, Decompressor};
pub use lz4::{Lz4Compressor, Lz4Decompressor};
