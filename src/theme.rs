//! Theme tokens and the generated theme stylesheet.
//!
//! A theme file follows the block-theme `theme.json` layout; only a few
//! fields are read:
//!
//! ```json
//! {
//!   "settings": {
//!     "color": { "palette": [{ "slug": "primary", "color": "#3c5644" }] },
//!     "typography": { "fontFamilies": [{ "slug": "body-sans", "fontFamily": "Manrope, sans-serif" }] },
//!     "custom": { "heroImage": "images/hero.jpg" }
//!   }
//! }
//! ```
//!
//! Every CSS variable has a literal default, so an empty theme still
//! produces a complete stylesheet.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::{collections::HashMap, fmt::Write, path::Path};

/// Hero background used when the theme names none.
pub const DEFAULT_HERO_IMAGE: &str = "a.jpg";

/// Rules appended after the variable block.
const OVERRIDE_RULES: &str = "\
h1,h2,h3,h4,h5,h6{font-family: var(--font-heading, var(--font-primary));}
.hero{background-size:cover;background-position:center;background-repeat:no-repeat;position:relative;}
.hero.hero--image::after{content:'';position:absolute;inset:0;background:linear-gradient(180deg, rgba(237,234,229,0.25) 0%, rgba(237,234,229,0.75) 100%);}
.hero .hero-content{position:relative;}";

// ============================================================================
// Theme file
// ============================================================================

/// Parsed theme description. Unknown fields are ignored and `null` at any
/// level reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "null_as_default")]
    pub color: ColorSettings,
    #[serde(deserialize_with = "null_as_default")]
    pub typography: TypographySettings,
    #[serde(deserialize_with = "null_as_default")]
    pub custom: CustomSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub palette: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaletteEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographySettings {
    #[serde(deserialize_with = "null_as_default")]
    pub font_families: Vec<FontFamily>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontFamily {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSettings {
    pub hero_image: Option<String>,
}

/// Read `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep only non-empty strings.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Theme {
    /// Parse a theme from JSON text.
    ///
    /// Syntax errors are reported. Well-formed JSON that is not an object
    /// (`null`, an array, a scalar) carries no settings and yields the
    /// default theme.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Palette colors by slug. Later entries win; entries without a color
    /// are skipped.
    fn palette(&self) -> HashMap<&str, &str> {
        self.settings
            .color
            .palette
            .iter()
            .filter_map(|p| Some((p.slug.as_str(), non_empty(p.color.as_ref())?)))
            .collect()
    }

    /// Font stacks by slug. Later entries win; entries without a stack are
    /// skipped.
    fn fonts(&self) -> HashMap<&str, &str> {
        self.settings
            .typography
            .font_families
            .iter()
            .filter_map(|f| Some((f.slug.as_str(), non_empty(f.font_family.as_ref())?)))
            .collect()
    }

    /// Configured hero image path, if any.
    pub fn hero_image(&self) -> Option<&str> {
        non_empty(self.settings.custom.hero_image.as_ref())
    }

    /// File name of the hero background, falling back to [`DEFAULT_HERO_IMAGE`].
    pub fn hero_image_name(&self) -> String {
        self.hero_image()
            .and_then(|path| Path::new(path).file_name())
            .map_or_else(
                || DEFAULT_HERO_IMAGE.to_owned(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}

// ============================================================================
// CSS variables
// ============================================================================

/// The fixed set of CSS custom properties emitted for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVar {
    ColorPrimary,
    ColorSecondary,
    ColorAccent,
    ColorBackground,
    ColorSurface,
    ColorTextPrimary,
    ColorTextSecondary,
    ColorTextLight,
    ColorTextInverse,
    FontPrimary,
    FontSecondary,
    FontHeading,
}

impl ThemeVar {
    pub const COUNT: usize = 12;

    /// All variables in stylesheet order.
    pub const ALL: [ThemeVar; Self::COUNT] = [
        ThemeVar::ColorPrimary,
        ThemeVar::ColorSecondary,
        ThemeVar::ColorAccent,
        ThemeVar::ColorBackground,
        ThemeVar::ColorSurface,
        ThemeVar::ColorTextPrimary,
        ThemeVar::ColorTextSecondary,
        ThemeVar::ColorTextLight,
        ThemeVar::ColorTextInverse,
        ThemeVar::FontPrimary,
        ThemeVar::FontSecondary,
        ThemeVar::FontHeading,
    ];

    /// CSS custom property name.
    pub const fn name(self) -> &'static str {
        match self {
            ThemeVar::ColorPrimary => "--color-primary",
            ThemeVar::ColorSecondary => "--color-secondary",
            ThemeVar::ColorAccent => "--color-accent",
            ThemeVar::ColorBackground => "--color-background",
            ThemeVar::ColorSurface => "--color-surface",
            ThemeVar::ColorTextPrimary => "--color-text-primary",
            ThemeVar::ColorTextSecondary => "--color-text-secondary",
            ThemeVar::ColorTextLight => "--color-text-light",
            ThemeVar::ColorTextInverse => "--color-text-inverse",
            ThemeVar::FontPrimary => "--font-primary",
            ThemeVar::FontSecondary => "--font-secondary",
            ThemeVar::FontHeading => "--font-heading",
        }
    }

    /// Value used when the theme does not provide one.
    pub const fn default_value(self) -> &'static str {
        match self {
            ThemeVar::ColorPrimary => "#3c5644",
            ThemeVar::ColorSecondary => "#d5cabf",
            ThemeVar::ColorAccent => "#2a3d31",
            ThemeVar::ColorBackground | ThemeVar::ColorSurface | ThemeVar::ColorTextInverse => {
                "#ffffff"
            }
            ThemeVar::ColorTextPrimary => "#2c2c2c",
            ThemeVar::ColorTextSecondary => "#666666",
            ThemeVar::ColorTextLight => "#999999",
            ThemeVar::FontPrimary => {
                "Manrope, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
            }
            ThemeVar::FontSecondary => "Georgia, 'Times New Roman', serif",
            ThemeVar::FontHeading => "var(--font-primary)",
        }
    }

    /// Palette slug feeding this variable, if any.
    const fn palette_slug(self) -> Option<&'static str> {
        match self {
            ThemeVar::ColorPrimary => Some("primary"),
            ThemeVar::ColorSecondary => Some("sand"),
            ThemeVar::ColorAccent => Some("accent"),
            ThemeVar::ColorBackground => Some("background"),
            ThemeVar::ColorTextPrimary => Some("text"),
            ThemeVar::ColorTextSecondary | ThemeVar::ColorTextLight => Some("muted"),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Resolved values for every [`ThemeVar`]. No variable can be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeVariables {
    values: [String; ThemeVar::COUNT],
}

impl Default for ThemeVariables {
    fn default() -> Self {
        Self {
            values: ThemeVar::ALL.map(|var| var.default_value().to_owned()),
        }
    }
}

impl ThemeVariables {
    /// Resolve variables from a single theme file.
    pub fn from_theme(theme: &Theme) -> Self {
        Self::from_levels(theme, theme)
    }

    /// Resolve variables from a generic theme and a more specific one.
    ///
    /// Colors and the `brand-sans` font come from `generic`. The specific
    /// level's `body-sans` replaces the primary font and its
    /// `display-serif` sets the heading font.
    pub fn from_levels(generic: &Theme, specific: &Theme) -> Self {
        let mut vars = Self::default();

        let palette = generic.palette();
        for var in ThemeVar::ALL {
            if let Some(color) = var.palette_slug().and_then(|slug| palette.get(slug)) {
                vars.set(var, *color);
            }
        }

        if let Some(font) = generic.fonts().get("brand-sans") {
            vars.set(ThemeVar::FontPrimary, *font);
        }

        let specific_fonts = specific.fonts();
        if let Some(font) = specific_fonts.get("body-sans") {
            vars.set(ThemeVar::FontPrimary, *font);
        }
        if let Some(font) = specific_fonts.get("display-serif") {
            vars.set(ThemeVar::FontHeading, *font);
        }

        vars
    }

    pub fn get(&self, var: ThemeVar) -> &str {
        &self.values[var.index()]
    }

    pub fn set(&mut self, var: ThemeVar, value: impl Into<String>) {
        self.values[var.index()] = value.into();
    }

    /// Iterate `(name, value)` pairs in stylesheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        ThemeVar::ALL
            .into_iter()
            .map(|var| (var.name(), self.get(var)))
    }

    /// Render the `:root` block followed by the fixed override rules.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n/* Theme overrides */\n");
        css.push_str(OVERRIDE_RULES);
        css
    }
}
