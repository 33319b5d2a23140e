//! Centered logo compositing.
//!
//! Resolves a logo source, shrinks it to a fraction of the canvas, rounds
//! its corners, frames it on a white rounded plate and composites the
//! plate over the canvas center. A clear zone is carved into the canvas
//! first so no module color shows through the plate's transparent corners.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::error::StyleError;
use crate::render::WHITE;
use crate::style::StyleConfig;
use crate::themes::{self, ThemeBundle};

/// Logo edge length as a fraction of the canvas's smaller dimension.
const LOGO_FRACTION: f64 = 0.11;
/// Corner radius as a fraction of the logo's smaller dimension.
const RADIUS_FRACTION: f64 = 0.15;
/// White plate thickness around the logo, in pixels.
const FRAME_THICKNESS: u32 = 8;

/// Picks the logo source for this call.
///
/// Order: the explicit override path if it exists on disk (absolute or
/// relative to the working directory), then the bundle's packaged asset,
/// then none. A missing override is not an error; it falls back to the
/// bundle asset.
fn resolve_logo_path(config: &StyleConfig, bundle: &ThemeBundle) -> Option<PathBuf> {
    if let Some(override_path) = config.logo_path.as_deref() {
        let path = Path::new(override_path);
        if path.exists() {
            return Some(path.to_path_buf());
        }
        log::warn!("logo override {override_path:?} not found, falling back to theme logo");
    }
    let bundled = themes::bundled_logo_path(bundle)?;
    if bundled.exists() {
        Some(bundled)
    } else {
        log::debug!("bundled logo asset {bundled:?} not found");
        None
    }
}

/// Composites the configured logo onto the canvas center.
///
/// Returns the canvas unchanged when `show_logo` is off or when no logo
/// source resolves. Load and decode failures on a resolved source
/// propagate unmodified.
pub fn apply_logo(
    mut canvas: RgbaImage,
    config: &StyleConfig,
    bundle: &ThemeBundle,
) -> Result<RgbaImage, StyleError> {
    if !config.show_logo {
        return Ok(canvas);
    }
    let Some(path) = resolve_logo_path(config, bundle) else {
        log::debug!("no logo source resolved, skipping logo step");
        return Ok(canvas);
    };

    let logo = image::open(&path)?.to_rgba8();
    let logo = shrink_to_fit(logo, canvas.width().min(canvas.height()));
    let radius = (f64::from(logo.width().min(logo.height())) * RADIUS_FRACTION) as u32;
    let logo = round_corners(logo, radius);

    // White plate behind the logo, rounded a little wider than the logo
    // itself and transparent outside the rounding.
    let frame_w = logo.width() + 2 * FRAME_THICKNESS;
    let frame_h = logo.height() + 2 * FRAME_THICKNESS;
    let frame_radius = radius + FRAME_THICKNESS;
    let mut frame = RgbaImage::new(frame_w, frame_h);
    fill_rounded_rect(&mut frame, 0, 0, frame_w, frame_h, frame_radius, WHITE);
    imageops::overlay(
        &mut frame,
        &logo,
        i64::from(FRAME_THICKNESS),
        i64::from(FRAME_THICKNESS),
    );

    // Centered placement, rounded toward zero.
    let paste_x = (i64::from(canvas.width()) - i64::from(frame_w)) / 2;
    let paste_y = (i64::from(canvas.height()) - i64::from(frame_h)) / 2;

    // Carve the clear zone before pasting: an opaque white rounded
    // rectangle of the plate's exact size keeps module color from bleeding
    // through the plate's transparent corners.
    fill_rounded_rect(&mut canvas, paste_x, paste_y, frame_w, frame_h, frame_radius, WHITE);
    imageops::overlay(&mut canvas, &frame, paste_x, paste_y);

    Ok(canvas)
}

/*---- Geometry helpers ----*/

/// Scales the logo down so its larger dimension is about `LOGO_FRACTION`
/// of the given canvas dimension, preserving aspect ratio. Never upscales.
fn shrink_to_fit(logo: RgbaImage, canvas_min_dim: u32) -> RgbaImage {
    let target = f64::from(canvas_min_dim) * LOGO_FRACTION;
    let (w, h) = (f64::from(logo.width()), f64::from(logo.height()));
    let scale = (target / w).min(target / h).min(1.0);
    if scale >= 1.0 {
        return logo;
    }
    let new_w = ((w * scale) as u32).max(1);
    let new_h = ((h * scale) as u32).max(1);
    imageops::resize(&logo, new_w, new_h, FilterType::Lanczos3)
}

/// Zeroes the alpha of every pixel outside the logo's rounded rectangle,
/// leaving the logo's own transparency intact elsewhere.
fn round_corners(mut logo: RgbaImage, radius: u32) -> RgbaImage {
    let (w, h) = logo.dimensions();
    for (x, y, pixel) in logo.enumerate_pixels_mut() {
        if !in_rounded_rect(x, y, w, h, radius) {
            pixel[3] = 0;
        }
    }
    logo
}

/// Pixel-center membership test for an axis-aligned rounded rectangle of
/// size w x h anchored at the origin.
fn in_rounded_rect(x: u32, y: u32, w: u32, h: u32, radius: u32) -> bool {
    let r = f64::from(radius)
        .min(f64::from(w) / 2.0)
        .min(f64::from(h) / 2.0);
    let px = f64::from(x) + 0.5;
    let py = f64::from(y) + 0.5;
    // Distance from the pixel center to the inner rectangle the corner
    // circles are centered on.
    let dx = px - px.clamp(r, f64::from(w) - r);
    let dy = py - py.clamp(r, f64::from(h) - r);
    dx * dx + dy * dy <= r * r
}

/// Fills a rounded rectangle whose top-left corner sits at (x0, y0) on the
/// target image. Pixels falling outside the image bounds are skipped.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: i64,
    y0: i64,
    w: u32,
    h: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    let (img_w, img_h) = (i64::from(img.width()), i64::from(img.height()));
    for dy in 0..h {
        for dx in 0..w {
            if !in_rounded_rect(dx, dy, w, h, radius) {
                continue;
            }
            let x = x0 + i64::from(dx);
            let y = y0 + i64::from(dy);
            if (0..img_w).contains(&x) && (0..img_h).contains(&y) {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
