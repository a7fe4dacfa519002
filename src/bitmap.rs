//! Caller-owned pixel buffer that the encoder borrows read-only.

use alloc::vec::Vec;

use crate::error::BmpError;

/// A top-down, row-major grid of packed `0xRRGGBB` colors.
///
/// Row 0 is the visual top. The top byte of each color is ignored by the
/// encoder. Storage is released when the `Bitmap` is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Allocate a zero-filled (black) bitmap.
    ///
    /// Fails with [`BmpError::DimensionsTooLarge`] when a dimension does not
    /// fit the header's signed 32-bit fields or the pixel count overflows,
    /// and [`BmpError::AllocationFailed`] when the storage cannot be
    /// obtained.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(BmpError::DimensionsTooLarge { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BmpError::AllocationFailed {
                bytes: len.saturating_mul(4),
            })?;
        pixels.resize(len, 0);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixel storage, top row first.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Read the color at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write `color` at `(x, y)`.
    ///
    /// Out-of-range coordinates are a silent no-op, so [`Bitmap::fill`] can
    /// take rectangles that overhang the grid.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Set every pixel in the rectangle `(x1, y1)..=(x2, y2)` to `color`.
    ///
    /// Both corners are inclusive. The rectangle may overhang the grid;
    /// out-of-range pixels are skipped. Iteration is row-major top-down, so
    /// overlapping fills are last-write-wins.
    pub fn fill(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set_pixel(x, y, color);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let bmp = Bitmap::new(3, 2).unwrap();
        assert_eq!(bmp.pixels(), &[0; 6]);
        assert_eq!((bmp.width(), bmp.height()), (3, 2));
    }

    #[test]
    fn set_pixel_out_of_range_is_a_no_op() {
        let mut bmp = Bitmap::new(4, 4).unwrap();
        let before = bmp.clone();
        bmp.set_pixel(-1, 0, 0xFFFFFF);
        bmp.set_pixel(0, -1, 0xFFFFFF);
        bmp.set_pixel(4, 0, 0xFFFFFF);
        bmp.set_pixel(0, 4, 0xFFFFFF);
        assert_eq!(bmp, before);
    }

    #[test]
    fn set_pixel_writes_row_major() {
        let mut bmp = Bitmap::new(3, 2).unwrap();
        bmp.set_pixel(2, 1, 0xABCDEF);
        assert_eq!(bmp.get(2, 1), Some(0xABCDEF));
        assert_eq!(bmp.pixels()[5], 0xABCDEF);
    }

    #[test]
    fn fill_is_inclusive_and_clamped() {
        let mut bmp = Bitmap::new(4, 4).unwrap();
        bmp.fill(-2, -2, 1, 1, 0x112233);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x <= 1 && y <= 1 { 0x112233 } else { 0 };
                assert_eq!(bmp.get(x, y), Some(expected), "({x},{y})");
            }
        }
    }

    #[test]
    fn overlapping_fills_last_write_wins() {
        let mut bmp = Bitmap::new(5, 5).unwrap();
        bmp.fill(0, 0, 4, 4, 0x0055A4);
        bmp.fill(0, 0, 4, 4, 0xFFFFFF);
        assert!(bmp.pixels().iter().all(|&px| px == 0xFFFFFF));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        match Bitmap::new(u32::MAX, 1) {
            Err(BmpError::DimensionsTooLarge { .. }) => {}
            other => panic!("expected DimensionsTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn get_out_of_range_is_none() {
        let bmp = Bitmap::new(2, 2).unwrap();
        assert_eq!(bmp.get(-1, 0), None);
        assert_eq!(bmp.get(2, 0), None);
        assert_eq!(bmp.get(0, 2), None);
    }
}
