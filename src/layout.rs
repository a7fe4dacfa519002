//! On-disk layout constants and row arithmetic shared by encoder and decoder.

/// BITMAPFILEHEADER size in bytes.
pub const FILE_HEADER_SIZE: usize = 14;

/// BITMAPINFOHEADER size in bytes.
pub const INFO_HEADER_SIZE: usize = 40;

/// Byte offset of the first stored pixel row. With no palette the pixel data
/// always follows the two headers directly.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Padded byte length of one pixel row.
///
/// Each row holds `width` 3-byte BGR pixels, zero-padded up to the next
/// multiple of four. A width whose raw row length is already 4-aligned takes
/// no padding (`row_size(4) == Some(12)`).
///
/// Returns `None` when the arithmetic overflows `usize`.
pub fn row_size(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Total pixel-data byte length: `row_size * height`.
pub fn image_size(width: u32, height: u32) -> Option<usize> {
    row_size(width)?.checked_mul(height as usize)
}
