use alloc::string::String;

/// Errors from BMP encoding and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("not a BMP stream: bad signature bytes")]
    BadMagic,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel data too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
