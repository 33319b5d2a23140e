use thiserror::Error;

/// Errors surfaced by the styling pipeline.
///
/// Encoder and imaging failures pass through unmodified. The only error
/// minted by this crate itself is [`StyleError::InvalidColor`], raised when
/// a malformed color string reaches the rasterizer.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to encode qr symbol: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color string {0:?}")]
    InvalidColor(String),
}
