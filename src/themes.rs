//! Static theme catalog.
//!
//! Each theme is a plain immutable record in a keyed table. Lookup never
//! fails: unknown identifiers fall back to the neutral [`DEFAULT_THEME`].

use std::path::{Path, PathBuf};

/// Neutral color used for unthemed modules and as the fallback for absent
/// bundle colors.
pub const DEFAULT_COLOR: &str = "#000000";

/// A named set of colors and an optional default logo asset.
///
/// Bundles are read-only catalog data; per-call customization happens
/// through the override fields of [`StyleConfig`](crate::style::StyleConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeBundle {
    /// Identifier the bundle is looked up by, e.g. `"YOUTUBE"`.
    pub identifier: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Icon tag associated with the theme.
    pub icon: &'static str,
    /// Color applied to the three position-detection corner regions.
    pub finder_pattern_color: &'static str,
    /// Background color behind the symbol.
    pub background_color: &'static str,
    /// Logo asset path, relative to the crate's `assets` directory.
    pub logo: Option<&'static str>,
    /// Color applied to the symbol body.
    pub theme_color: &'static str,
}

/// The fallback bundle: neutral colors, no logo.
pub const DEFAULT_THEME: ThemeBundle = ThemeBundle {
    identifier: "DEFAULT",
    name: "Default",
    icon: "default",
    finder_pattern_color: DEFAULT_COLOR,
    background_color: "#FFFFFF",
    logo: None,
    theme_color: DEFAULT_COLOR,
};

static CATALOG: [ThemeBundle; 9] = [
    ThemeBundle {
        identifier: "YOUTUBE",
        name: "YouTube",
        icon: "youtube",
        finder_pattern_color: "#FF0000",
        background_color: "#FFFFFF",
        logo: Some("icons/youtube_logo.png"),
        theme_color: "#F43D3D",
    },
    ThemeBundle {
        identifier: "LINKEDIN",
        name: "LinkedIn",
        icon: "linkedin",
        finder_pattern_color: "#0077B5",
        background_color: "#FFFFFF",
        logo: Some("icons/linkedin_logo.png"),
        theme_color: "#0077B5",
    },
    ThemeBundle {
        identifier: "INSTAGRAM",
        name: "Instagram",
        icon: "instagram",
        finder_pattern_color: "#E1306C",
        background_color: "#FFFFFF",
        logo: Some("icons/instagram_logo.png"),
        theme_color: "#E1306C",
    },
    ThemeBundle {
        identifier: "FACEBOOK",
        name: "Facebook",
        icon: "facebook",
        finder_pattern_color: "#1877F2",
        background_color: "#FFFFFF",
        logo: Some("icons/facebook_logo.png"),
        theme_color: "#1877F2",
    },
    ThemeBundle {
        identifier: "TWITTER",
        name: "X",
        icon: "x",
        finder_pattern_color: "#000000",
        background_color: "#FFFFFF",
        logo: Some("icons/x_logo.png"),
        theme_color: "#000000",
    },
    ThemeBundle {
        identifier: "WHATSAPP",
        name: "WhatsApp",
        icon: "whatsapp",
        finder_pattern_color: "#25D366",
        background_color: "#FFFFFF",
        logo: Some("icons/whatsapp_logo.png"),
        theme_color: "#25D366",
    },
    ThemeBundle {
        identifier: "GITHUB",
        name: "GitHub",
        icon: "github",
        finder_pattern_color: "#181717",
        background_color: "#FFFFFF",
        logo: Some("icons/github_logo.png"),
        theme_color: "#181717",
    },
    ThemeBundle {
        identifier: "LINKTREE",
        name: "Linktree",
        icon: "linktree",
        finder_pattern_color: "#39D2B4",
        background_color: "#FFFFFF",
        logo: Some("icons/linktree_logo.png"),
        theme_color: "#39D2B4",
    },
    DEFAULT_THEME,
];

/// Looks up a theme bundle by identifier.
///
/// Unknown identifiers are not an error: the DEFAULT bundle is returned.
///
/// # Example
///
/// ```rust
/// use qrstyler::themes::lookup;
///
/// assert_eq!(lookup("INSTAGRAM").theme_color, "#E1306C");
/// assert_eq!(lookup("NONEXISTENT").identifier, "DEFAULT");
/// ```
pub fn lookup(identifier: &str) -> &'static ThemeBundle {
    if let Some(bundle) = CATALOG.iter().find(|b| b.identifier == identifier) {
        return bundle;
    }
    log::debug!("unknown theme identifier {identifier:?}, using DEFAULT");
    &DEFAULT_THEME
}

/// Absolute path of a bundle's logo asset, if the bundle defines one.
///
/// Asset paths in the catalog are relative to the crate's `assets`
/// directory, mirroring how the icons are packaged with the source tree.
pub fn bundled_logo_path(bundle: &ThemeBundle) -> Option<PathBuf> {
    bundle
        .logo
        .map(|rel| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(rel))
}
