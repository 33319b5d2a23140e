//! # qrstyler
//!
//! A Rust library for styling QR codes with color themes and centered logos.
//!
//! `qrstyler` takes care of the theming and compositing pipeline around a QR
//! symbol: it classifies modules into finder-pattern and body regions,
//! resolves per-module colors through an override/theme/default precedence,
//! and optionally embeds a rounded logo on a white plate in the symbol
//! center. Encoding itself is delegated to the `qrcode` crate and all raster
//! work to the `image` crate.
//!
//! ## Features
//!
//! - Built-in theme catalog (YouTube, LinkedIn, Instagram, Facebook, X,
//!   WhatsApp, GitHub, Linktree) with per-call color overrides.
//! - Separate coloring of the three position-detection corner regions.
//! - Centered logo embedding with rounded corners, a white border plate and
//!   a carved clear zone.
//! - Render to an in-memory RGBA buffer or straight to a file.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrstyler = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Generate a themed QR code with highlighted corners:
//!
//! ```rust
//! use qrstyler::{QrGenerator, StyleConfig};
//!
//! let config = StyleConfig {
//!     qr_version: 4,
//!     show_theme: true,
//!     highlight_finder_patterns: true,
//!     theme: "INSTAGRAM".to_string(),
//!     ..StyleConfig::default()
//! };
//! let image = QrGenerator::new(config).generate("https://example.com").unwrap();
//! assert_eq!(image.width(), image.height());
//! ```
//!
//! Save it to a file instead:
//!
//! ```rust,no_run
//! use qrstyler::{QrGenerator, StyleConfig};
//!
//! let generator = QrGenerator::new(StyleConfig {
//!     qr_version: 4,
//!     show_logo: true,
//!     theme: "GITHUB".to_string(),
//!     ..StyleConfig::default()
//! });
//! generator.generate_to_file("https://example.com", "styled_qr.png").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`themes`]: Static theme catalog and lookup.
//! - [`style`]: Per-call style configuration.
//! - [`matrix`]: Module grid and finder-region geometry.
//! - [`render`]: Module classification and coloring.
//! - [`logo`]: Centered logo compositing.
//! - [`generator`]: Pipeline orchestration.

#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod logo;
pub mod matrix;
pub mod render;
pub mod style;
pub mod themes;

pub use error::StyleError;
pub use generator::QrGenerator;
pub use style::StyleConfig;
pub use themes::{lookup, ThemeBundle, DEFAULT_COLOR};
