//! BMP encoder: 24-bit uncompressed, bottom-up rows.

use alloc::vec::Vec;
use core::iter;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::layout::{self, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET};

/// Serialize `bitmap` into a complete BMP byte stream.
///
/// Rows are written from the bottom visual row up, each pixel as three
/// blue/green/red bytes (the packed color's top byte is discarded), each row
/// zero-padded to a multiple of four bytes. Pure function of the bitmap; no
/// I/O happens here.
pub fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, BmpError> {
    let width = bitmap.width();
    let height = bitmap.height();
    let w = width as usize;
    let h = height as usize;

    let row_size =
        layout::row_size(width).ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let image_size = row_size
        .checked_mul(h)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let file_size = image_size
        .checked_add(PIXEL_DATA_OFFSET)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::new();
    out.try_reserve_exact(file_size)
        .map_err(|_| BmpError::AllocationFailed { bytes: file_size })?;
    write_headers(&mut out, file_size, image_size, width, height);

    let pixels = bitmap.pixels();
    let pad_bytes = row_size - w * 3;
    for row in (0..h).rev() {
        for &color in &pixels[row * w..(row + 1) * w] {
            out.push((color & 0x0000FF) as u8);
            out.push(((color & 0x00FF00) >> 8) as u8);
            out.push(((color & 0xFF0000) >> 16) as u8);
        }
        out.extend(iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, file_size: usize, image_size: usize, width: u32, height: u32) {
    // BITMAPFILEHEADER (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // h resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le32(data: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(data[at..at + 4].try_into().unwrap())
    }

    fn le16(data: &[u8], at: usize) -> u16 {
        u16::from_le_bytes(data[at..at + 2].try_into().unwrap())
    }

    #[test]
    fn header_fields_at_fixed_offsets() {
        let bmp = Bitmap::new(30, 20).unwrap();
        let bytes = encode(&bmp).unwrap();

        let image_size = layout::image_size(30, 20).unwrap();
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(le32(&bytes, 2) as usize, 54 + image_size); // file size
        assert_eq!(le32(&bytes, 6), 0); // reserved
        assert_eq!(le32(&bytes, 10), 54); // pixel data offset
        assert_eq!(le32(&bytes, 14), 40); // info header size
        assert_eq!(le32(&bytes, 18), 30); // width
        assert_eq!(le32(&bytes, 22), 20); // height
        assert_eq!(le16(&bytes, 26), 1); // planes
        assert_eq!(le16(&bytes, 28), 24); // bits per pixel
        assert_eq!(le32(&bytes, 30), 0); // compression
        assert_eq!(le32(&bytes, 34) as usize, image_size);
        assert_eq!(bytes.len(), 54 + image_size);
    }

    #[test]
    fn rows_are_bottom_up_bgr() {
        // 2x2: top row red then green, bottom row blue then white.
        let mut bmp = Bitmap::new(2, 2).unwrap();
        bmp.set_pixel(0, 0, 0xFF0000);
        bmp.set_pixel(1, 0, 0x00FF00);
        bmp.set_pixel(0, 1, 0x0000FF);
        bmp.set_pixel(1, 1, 0xFFFFFF);

        let bytes = encode(&bmp).unwrap();
        let data = &bytes[54..];
        // First stored row is the bottom visual row: blue, white, 2 pad bytes.
        assert_eq!(&data[0..8], &[0xFF, 0, 0, 0xFF, 0xFF, 0xFF, 0, 0]);
        // Second stored row is the top visual row: red, green, 2 pad bytes.
        assert_eq!(&data[8..16], &[0, 0, 0xFF, 0, 0xFF, 0, 0, 0]);
    }

    #[test]
    fn packed_color_top_byte_is_discarded() {
        let mut bmp = Bitmap::new(1, 1).unwrap();
        bmp.set_pixel(0, 0, 0xDEAABBCC);
        let bytes = encode(&bmp).unwrap();
        assert_eq!(&bytes[54..57], &[0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn aligned_width_rows_have_no_padding() {
        let bmp = Bitmap::new(4, 1).unwrap();
        let bytes = encode(&bmp).unwrap();
        assert_eq!(bytes.len(), 54 + 12);
    }

    #[test]
    fn empty_bitmap_is_headers_only() {
        let bmp = Bitmap::new(0, 0).unwrap();
        let bytes = encode(&bmp).unwrap();
        assert_eq!(bytes.len(), 54);
        assert_eq!(&bytes[0..2], b"BM");
    }
}
