//! One-shot file I/O wrappers around the in-memory codec.

use std::fs;
use std::path::Path;

use alloc::vec::Vec;
use rgb::RGB8;

use crate::bitmap::Bitmap;
use crate::decode::{self, BmpHeader};
use crate::encode;
use crate::error::BmpError;

/// Encode `bitmap` and write it to `path` in a single bulk write.
///
/// The byte stream is built fully in memory first, so an encode failure
/// leaves no file behind, and an open or write failure surfaces as
/// [`BmpError::Io`].
pub fn write_bitmap<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> Result<(), BmpError> {
    let bytes = encode::encode(bitmap)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a BMP file in one bulk read and decode it.
///
/// Rows come back in stored bottom-up order; see
/// [`decode_pixel_rows`](crate::decode_pixel_rows).
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> Result<(BmpHeader, Vec<Vec<RGB8>>), BmpError> {
    let bytes = fs::read(path)?;
    decode::decode(&bytes)
}
