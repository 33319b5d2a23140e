//! Module classification and coloring.
//!
//! Turns a [`ModuleMatrix`] into a colored canvas: every dark module is
//! classified as finder-region or body and filled per the ordered color
//! precedence; light modules keep the background.

use image::{Rgba, RgbaImage};

use crate::error::StyleError;
use crate::matrix::{in_finder_region, ModuleMatrix};
use crate::style::StyleConfig;
use crate::themes::{ThemeBundle, DEFAULT_COLOR};

/// Opaque white, the canvas background.
pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Parses a `#RRGGBB`, `RRGGBB` or `#RRGGBBAA` color string.
///
/// # Errors
///
/// Returns [`StyleError::InvalidColor`] for any malformed input.
///
/// # Example
///
/// ```rust
/// use qrstyler::render::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#96CC38").unwrap().0, [0x96, 0xCC, 0x38, 0xFF]);
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, StyleError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let well_formed = (digits.len() == 6 || digits.len() == 8)
        && digits.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        return Err(StyleError::InvalidColor(hex.to_string()));
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    let a = if digits.len() == 8 { channel(6) } else { 255 };
    Ok(Rgba([channel(0), channel(2), channel(4), a]))
}

/// Resolves the color for one dark module.
///
/// The precedence is an explicit ordered rule list so the tie-break order
/// stays auditable:
/// 1. finder highlighting on and the module sits in a corner region ->
///    finder override, else the bundle's finder pattern color;
/// 2. theming on and the module sits outside every corner region -> theme
///    override, else the bundle's theme color;
/// 3. otherwise the neutral default.
fn module_color(
    in_corner: bool,
    bundle: &ThemeBundle,
    config: &StyleConfig,
) -> Result<Rgba<u8>, StyleError> {
    if config.highlight_finder_patterns && in_corner {
        let hex = config
            .finder_color_override
            .as_deref()
            .unwrap_or(bundle.finder_pattern_color);
        parse_hex_color(hex)
    } else if config.show_theme && !in_corner {
        let hex = config
            .theme_color_override
            .as_deref()
            .unwrap_or(bundle.theme_color);
        parse_hex_color(hex)
    } else {
        parse_hex_color(DEFAULT_COLOR)
    }
}

/// Renders the module matrix onto a fresh canvas.
///
/// The canvas is (side x pixel size) square with a uniform white
/// background. Dark modules are filled block by block with their resolved
/// color; light modules are never explicitly colored.
///
/// # Errors
///
/// Returns [`StyleError::InvalidColor`] if a configured override color is
/// malformed.
pub fn colorize(
    matrix: &ModuleMatrix,
    bundle: &ThemeBundle,
    config: &StyleConfig,
) -> Result<RgbaImage, StyleError> {
    let px = config.pixel_size();
    let side = matrix.side();
    let mut canvas = RgbaImage::from_pixel(side as u32 * px, side as u32 * px, WHITE);
    let border = config.border() as usize;

    for row in 0..side {
        for col in 0..side {
            if !matrix.is_dark(row, col) {
                continue;
            }
            let in_corner = in_finder_region(row, col, side, border);
            let color = module_color(in_corner, bundle, config)?;
            fill_module(&mut canvas, col as u32 * px, row as u32 * px, px, color);
        }
    }
    Ok(canvas)
}

fn fill_module(canvas: &mut RgbaImage, x0: u32, y0: u32, px: u32, color: Rgba<u8>) {
    for dy in 0..px {
        for dx in 0..px {
            canvas.put_pixel(x0 + dx, y0 + dy, color);
        }
    }
}
