//! Pipeline orchestration: encode, colorize, composite, save.

use std::path::Path;

use image::RgbaImage;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::error::StyleError;
use crate::logo;
use crate::matrix::ModuleMatrix;
use crate::render;
use crate::style::StyleConfig;
use crate::themes::{self, ThemeBundle};

/// Generates styled QR code images from a [`StyleConfig`].
///
/// The generator resolves its theme bundle once at construction and runs
/// the pipeline in a fixed order per call: encode, color the module
/// matrix, then composite the logo on top. Calls are independent of each
/// other; nothing is cached between them.
///
/// # Example
///
/// ```rust
/// use qrstyler::{QrGenerator, StyleConfig};
///
/// let config = StyleConfig {
///     qr_version: 4,
///     show_theme: true,
///     highlight_finder_patterns: true,
///     theme: "INSTAGRAM".to_string(),
///     ..StyleConfig::default()
/// };
/// let image = QrGenerator::new(config).generate("https://example.com").unwrap();
/// assert_eq!(image.width(), image.height());
/// ```
pub struct QrGenerator {
    config: StyleConfig,
    bundle: &'static ThemeBundle,
}

impl QrGenerator {
    /// Creates a generator, resolving the configured theme identifier.
    ///
    /// Unknown identifiers fall back to the DEFAULT bundle.
    pub fn new(config: StyleConfig) -> Self {
        let bundle = themes::lookup(&config.theme);
        QrGenerator { config, bundle }
    }

    /// The theme bundle this generator resolved.
    pub fn bundle(&self) -> &'static ThemeBundle {
        self.bundle
    }

    /// Encodes `data` and renders the styled image in memory.
    ///
    /// # Errors
    ///
    /// Encoder failures (data too large for the requested version) and
    /// malformed override colors propagate unmodified; so do load errors
    /// for a logo source that resolved but cannot be decoded.
    pub fn generate(&self, data: &str) -> Result<RgbaImage, StyleError> {
        let code = QrCode::with_version(
            data.as_bytes(),
            Version::Normal(i16::from(self.config.qr_version)),
            EcLevel::L,
        )?;
        let width = code.width();
        let modules: Vec<bool> = code.to_colors().iter().map(|c| *c == Color::Dark).collect();
        let matrix = ModuleMatrix::with_quiet_zone(&modules, width, self.config.border() as usize);

        let canvas = render::colorize(&matrix, self.bundle, &self.config)?;
        logo::apply_logo(canvas, &self.config, self.bundle)
    }

    /// Renders the styled image and saves it to `path`, inferring the
    /// format from the extension.
    ///
    /// # Errors
    ///
    /// In addition to everything [`generate`](Self::generate) surfaces,
    /// filesystem write failures propagate unmodified.
    pub fn generate_to_file<P: AsRef<Path>>(&self, data: &str, path: P) -> Result<(), StyleError> {
        let image = self.generate(data)?;
        image.save(path)?;
        Ok(())
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::path::PathBuf;

    const DATA: &str = "https://www.google.com";
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// Writes a solid red square logo into `dir` and returns its path.
    fn write_logo(dir: &Path, size: u32) -> PathBuf {
        let path = dir.join("logo.png");
        RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();
        path
    }

    /// Center pixel of the module at (row, col), for a given pixel size.
    fn module_pixel(image: &RgbaImage, row: u32, col: u32, px: u32) -> Rgba<u8> {
        *image.get_pixel(col * px + px / 2, row * px + px / 2)
    }

    #[test]
    fn test_scenario_a_highlighted_corners_with_logo_override() {
        let dir = tempfile::tempdir().unwrap();
        let logo = write_logo(dir.path(), 32);
        let config = StyleConfig {
            qr_version: 4,
            show_logo: true,
            logo_path: Some(logo.to_string_lossy().into_owned()),
            show_theme: false,
            highlight_finder_patterns: true,
            finder_color_override: Some("#96CC38".to_string()),
            ..StyleConfig::default()
        };
        let image = QrGenerator::new(config).generate(DATA).unwrap();

        // Version 4 is 33 modules; with the 1-module quiet zone the canvas
        // is 35 modules of 10 px.
        assert_eq!(image.dimensions(), (350, 350));
        // Finder ring corner and finder center take the override color.
        assert_eq!(module_pixel(&image, 1, 1, 10), Rgba([0x96, 0xCC, 0x38, 255]));
        assert_eq!(module_pixel(&image, 4, 4, 10), Rgba([0x96, 0xCC, 0x38, 255]));
        // The timing module at symbol (6, 8) is dark body: neutral black.
        assert_eq!(module_pixel(&image, 7, 9, 10), BLACK);
        // The separator at symbol (7, 7) is light: background white.
        assert_eq!(module_pixel(&image, 8, 8, 10), WHITE);
        // The 32 px logo keeps its size (11% target is 38 px); its white
        // plate spans 48 px centered at (151, 151).
        assert_eq!(*image.get_pixel(175, 175), Rgba([255, 0, 0, 255]));
        assert_eq!(*image.get_pixel(155, 175), WHITE);
    }

    #[test]
    fn test_scenario_b_instagram_theme_with_overrides() {
        let config = StyleConfig {
            qr_version: 6,
            show_logo: true,
            show_theme: true,
            highlight_finder_patterns: true,
            theme: "INSTAGRAM".to_string(),
            finder_color_override: Some("#E66030".to_string()),
            theme_color_override: Some("#987FEA".to_string()),
            module_pixel_size: 12,
            border_modules: 4,
            ..StyleConfig::default()
        };
        let generator = QrGenerator::new(config);
        assert_eq!(generator.bundle().identifier, "INSTAGRAM");
        let image = generator.generate(DATA).unwrap();

        // Version 6 is 41 modules; border 4 -> side 49 at 12 px.
        assert_eq!(image.dimensions(), (588, 588));
        // Corners take the finder override, the body the theme override.
        assert_eq!(module_pixel(&image, 4, 4, 12), Rgba([0xE6, 0x60, 0x30, 255]));
        assert_eq!(module_pixel(&image, 10, 12, 12), Rgba([0x98, 0x7F, 0xEA, 255]));
        // No override path was given, so the bundled Instagram asset is
        // composited at the center.
        let center = *image.get_pixel(294, 294);
        assert_eq!(center, Rgba([0xE1, 0x30, 0x6C, 255]));
    }

    #[test]
    fn test_scenario_c_unknown_theme_renders_without_logo() {
        let with_logo = StyleConfig {
            qr_version: 4,
            show_logo: true,
            theme: "NONEXISTENT".to_string(),
            ..StyleConfig::default()
        };
        let without_logo = StyleConfig {
            show_logo: false,
            ..with_logo.clone()
        };
        let generator = QrGenerator::new(with_logo);
        assert_eq!(generator.bundle().identifier, "DEFAULT");

        // DEFAULT has no bundled asset, so enabling the logo changes nothing.
        let a = generator.generate(DATA).unwrap();
        let b = QrGenerator::new(without_logo).generate(DATA).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let logo = write_logo(dir.path(), 48);
        let config = StyleConfig {
            qr_version: 4,
            show_logo: true,
            logo_path: Some(logo.to_string_lossy().into_owned()),
            show_theme: true,
            highlight_finder_patterns: true,
            theme: "LINKEDIN".to_string(),
            ..StyleConfig::default()
        };
        let generator = QrGenerator::new(config);
        let first = generator.generate(DATA).unwrap();
        let second = generator.generate(DATA).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_border_zero_equals_border_one() {
        let base = StyleConfig {
            qr_version: 4,
            show_theme: true,
            highlight_finder_patterns: true,
            theme: "WHATSAPP".to_string(),
            ..StyleConfig::default()
        };
        let zero = StyleConfig { border_modules: 0, ..base.clone() };
        let one = StyleConfig { border_modules: 1, ..base };
        let a = QrGenerator::new(zero).generate(DATA).unwrap();
        let b = QrGenerator::new(one).generate(DATA).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_oversized_data_propagates_encoder_error() {
        let config = StyleConfig::default(); // version 1
        let data = "a".repeat(200);
        let result = QrGenerator::new(config).generate(&data);
        assert!(matches!(result, Err(StyleError::Encode(_))));
    }

    #[test]
    fn test_generate_to_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styled.png");
        let config = StyleConfig {
            qr_version: 4,
            ..StyleConfig::default()
        };
        QrGenerator::new(config).generate_to_file(DATA, &path).unwrap();
        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 350);
        assert_eq!(saved.height(), 350);
    }
}
