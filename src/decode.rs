//! BMP decoder: header parsing and bottom-up pixel row recovery.

use alloc::format;
use alloc::vec::Vec;

use rgb::RGB8;

use crate::error::BmpError;
use crate::layout::{self, PIXEL_DATA_OFFSET};

/// Fields read from the combined 54-byte file + info header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Total file size as recorded in the file header.
    pub file_size: u32,
    /// Byte offset of the first stored pixel row (54 for files this crate
    /// writes).
    pub pixel_data_offset: u32,
    pub width: u32,
    pub height: u32,
}

/// Combine `len` little-endian bytes starting at `start` into an unsigned
/// integer.
///
/// Every byte is widened to unsigned before shifting, so values `>= 0x80`
/// accumulate correctly. `len` may be at most 8. Fails with
/// [`BmpError::UnexpectedEof`] when the range runs past the input.
pub fn parse_le(data: &[u8], start: usize, len: usize) -> Result<u64, BmpError> {
    debug_assert!(len <= 8);
    let end = start.checked_add(len).ok_or(BmpError::UnexpectedEof)?;
    if end > data.len() {
        return Err(BmpError::UnexpectedEof);
    }
    let mut value = 0u64;
    for (i, &byte) in data[start..end].iter().enumerate() {
        value |= u64::from(byte) << (8 * i);
    }
    Ok(value)
}

/// Parse the 54-byte combined header.
///
/// Rejects streams shorter than 54 bytes, a missing `BM` signature, and any
/// variant this crate does not write: negative (top-down) dimensions,
/// compression, and bit depths other than 24.
pub fn decode_header(data: &[u8]) -> Result<BmpHeader, BmpError> {
    if data.len() < PIXEL_DATA_OFFSET {
        return Err(BmpError::UnexpectedEof);
    }
    if &data[0..2] != b"BM" {
        return Err(BmpError::BadMagic);
    }

    let file_size = parse_le(data, 2, 4)? as u32;
    let pixel_data_offset = parse_le(data, 10, 4)? as u32;
    let width = parse_le(data, 18, 4)? as u32;
    let height = parse_le(data, 22, 4)? as u32;

    if (width as i32) < 0 || (height as i32) < 0 {
        return Err(BmpError::InvalidHeader(format!(
            "negative dimensions {}x{}",
            width as i32, height as i32
        )));
    }
    let bits_per_pixel = parse_le(data, 28, 2)?;
    if bits_per_pixel != 24 {
        return Err(BmpError::UnsupportedVariant(format!(
            "{bits_per_pixel} bits per pixel"
        )));
    }
    let compression = parse_le(data, 30, 4)?;
    if compression != 0 {
        return Err(BmpError::UnsupportedVariant(format!(
            "compression method {compression}"
        )));
    }

    Ok(BmpHeader {
        file_size,
        pixel_data_offset,
        width,
        height,
    })
}

/// Reinterpret raw pixel data as rows of RGB triples.
///
/// `data` is the byte run following the headers: `height` rows of
/// [`row_size`](crate::row_size) bytes each, bottom visual row stored first. Each
/// pixel's three BGR bytes are flipped into an [`RGB8`]; padding bytes are
/// discarded. Rows come back in the stored bottom-up order — reorienting
/// them for display is the caller's job.
pub fn decode_pixel_rows(width: u32, height: u32, data: &[u8]) -> Result<Vec<Vec<RGB8>>, BmpError> {
    let row_size =
        layout::row_size(width).ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let needed = row_size
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if data.len() < needed {
        return Err(BmpError::BufferTooSmall {
            needed,
            actual: data.len(),
        });
    }

    let w = width as usize;
    let mut rows = Vec::with_capacity(height as usize);
    if row_size == 0 {
        rows.resize(height as usize, Vec::new());
        return Ok(rows);
    }
    for stored_row in data[..needed].chunks_exact(row_size) {
        let mut row = Vec::with_capacity(w);
        for px in stored_row[..w * 3].chunks_exact(3) {
            row.push(RGB8::new(px[2], px[1], px[0]));
        }
        rows.push(row);
    }
    debug_assert_eq!(rows.len(), height as usize);
    Ok(rows)
}

/// Decode a complete BMP byte stream into its header and pixel rows.
///
/// Composes [`decode_header`] and [`decode_pixel_rows`] via the header's
/// pixel-data offset. Rows are in stored bottom-up order.
pub fn decode(data: &[u8]) -> Result<(BmpHeader, Vec<Vec<RGB8>>), BmpError> {
    let header = decode_header(data)?;
    let offset = header.pixel_data_offset as usize;
    if offset < PIXEL_DATA_OFFSET || offset > data.len() {
        return Err(BmpError::InvalidHeader(format!(
            "pixel data offset {offset} out of range"
        )));
    }
    let rows = decode_pixel_rows(header.width, header.height, &data[offset..])?;
    Ok((header, rows))
}
