//! # bmp24
//!
//! Encoder and decoder for uncompressed 24-bit Windows BMP files, plus an
//! ANSI terminal previewer.
//!
//! The codec itself is `no_std + alloc`: build a [`Bitmap`], [`encode`] it
//! to a byte vector, or [`decode`] a byte stream back into per-row RGB
//! triples. File I/O ([`write_bitmap`], [`read_bitmap`]) and the terminal
//! previewer ([`render_rows`], [`print_rows`]) sit behind the `std` feature
//! (on by default).
//!
//! ## On-disk format
//!
//! Classic BITMAPFILEHEADER + BITMAPINFOHEADER (14 + 40 bytes), then pixel
//! rows stored bottom-up, each pixel as three BGR bytes, each row
//! zero-padded to a multiple of four bytes. The decoder hands rows back in
//! that stored order; reorienting them for display is the renderer's job.
//!
//! ## Non-Goals
//!
//! - Compressed BMP variants (RLE, bitfields)
//! - Color palettes / indexed color
//! - Bit depths other than 24
//! - Top-down (negative height) row order
//!
//! All of these are rejected at decode time rather than mis-decoded.
//!
//! ## Usage
//!
//! ```
//! use bmp24::{Bitmap, decode, encode};
//!
//! let mut flag = Bitmap::new(30, 20)?;
//! flag.fill(0, 0, 9, 19, 0x0055A4);
//! flag.fill(10, 0, 19, 19, 0xFFFFFF);
//! flag.fill(20, 0, 29, 19, 0xF04135);
//!
//! let bytes = encode(&flag)?;
//! assert_eq!(&bytes[0..2], b"BM");
//!
//! let (header, rows) = decode(&bytes)?;
//! assert_eq!((header.width, header.height), (30, 20));
//! // rows[0] is the bottom visual row; rows.last() the top.
//! # Ok::<(), bmp24::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod decode;
mod encode;
mod error;
mod layout;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "std")]
mod preview;

// Re-exports
pub use bitmap::Bitmap;
pub use decode::{BmpHeader, decode, decode_header, decode_pixel_rows, parse_le};
pub use encode::encode;
pub use error::BmpError;
pub use layout::{FILE_HEADER_SIZE, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET, image_size, row_size};
pub use rgb::RGB8;

#[cfg(feature = "std")]
pub use file::{read_bitmap, write_bitmap};
#[cfg(feature = "std")]
pub use preview::{print_rows, render_rows};
