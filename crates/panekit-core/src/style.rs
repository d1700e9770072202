//! Flat per-widget-kind style lookup.
//!
//! A [`Theme`] maps each [`WidgetKind`] to one [`Style`]. Themes are
//! immutable once built and shared by reference with every widget during a
//! frame. On disk a theme is a JSON [`ThemeFile`] whose colors are
//! `"#rrggbb"` or `"#rrggbbaa"` strings; every field is optional and falls
//! back to the default theme.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ThemeResult;
use crate::surface::FontSpec;

/// Widget variant, used as the style lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Button,
    Slider,
    Container,
}

impl WidgetKind {
    /// Display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Button => "button",
            WidgetKind::Slider => "slider",
            WidgetKind::Container => "container",
        }
    }
}

/// Visual attributes for one widget kind.
#[derive(Debug, Clone)]
pub struct Style {
    /// Resting fill.
    pub fill: Color,
    /// Fill while the pointer hovers.
    pub hover_fill: Color,
    /// Fill while hovered with the button held.
    pub active_fill: Color,
    /// Label color.
    pub text: Color,
    /// Slider track color.
    pub track: Color,
    /// Slider handle color.
    pub handle: Color,
    /// Label font.
    pub font: FontSpec,
    /// Inner padding.
    pub padding: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba8(59, 130, 246, 255),
            hover_fill: Color::from_rgba8(96, 165, 250, 255),
            active_fill: Color::from_rgba8(37, 99, 235, 255),
            text: Color::WHITE,
            track: Color::from_rgba8(220, 220, 220, 255),
            handle: Color::from_rgba8(60, 60, 60, 255),
            font: FontSpec::default(),
            padding: 10.0,
        }
    }
}

/// Complete theme for the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Surface background, painted at the start of every frame.
    pub background: Color,
    /// Button style.
    pub button: Style,
    /// Slider style.
    pub slider: Style,
    /// Container style (containers draw nothing themselves today).
    pub container: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(250, 250, 250, 255),
            button: Style::default(),
            slider: Style {
                fill: Color::from_rgba8(220, 220, 220, 255),
                hover_fill: Color::from_rgba8(229, 231, 235, 255),
                active_fill: Color::from_rgba8(209, 213, 219, 255),
                text: Color::from_rgba8(60, 60, 60, 255),
                handle: Color::from_rgba8(59, 130, 246, 255),
                ..Style::default()
            },
            container: Style {
                fill: Color::TRANSPARENT,
                hover_fill: Color::TRANSPARENT,
                active_fill: Color::TRANSPARENT,
                text: Color::from_rgba8(60, 60, 60, 255),
                ..Style::default()
            },
        }
    }
}

impl Theme {
    /// Look up the style for a widget kind.
    pub fn style(&self, kind: WidgetKind) -> &Style {
        match kind {
            WidgetKind::Button => &self.button,
            WidgetKind::Slider => &self.slider,
            WidgetKind::Container => &self.container,
        }
    }

    /// Parse a theme from JSON, filling gaps from the default theme.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        let file: ThemeFile = serde_json::from_str(json)?;
        Ok(file.resolve())
    }

    /// Load a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let theme = Self::from_json(&json)?;
        log::info!("Loaded theme from {}", path.display());
        Ok(theme)
    }

    /// Serialize to the on-disk representation.
    pub fn to_file(&self) -> ThemeFile {
        ThemeFile {
            background: Some(format_color(self.background)),
            button: Some(StyleFile::from_style(&self.button)),
            slider: Some(StyleFile::from_style(&self.slider)),
            container: Some(StyleFile::from_style(&self.container)),
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }
}

/// On-disk theme. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    pub background: Option<String>,
    pub button: Option<StyleFile>,
    pub slider: Option<StyleFile>,
    pub container: Option<StyleFile>,
}

impl ThemeFile {
    /// Merge onto the default theme. Malformed colors and fonts are
    /// logged and replaced by the default value.
    pub fn resolve(&self) -> Theme {
        let defaults = Theme::default();
        let merge = |file: &Option<StyleFile>, kind: WidgetKind, base: &Style| match file {
            Some(file) => file.resolve(kind, base),
            None => base.clone(),
        };
        Theme {
            background: color_or(self.background.as_deref(), defaults.background, "background"),
            button: merge(&self.button, WidgetKind::Button, &defaults.button),
            slider: merge(&self.slider, WidgetKind::Slider, &defaults.slider),
            container: merge(&self.container, WidgetKind::Container, &defaults.container),
        }
    }
}

/// On-disk style for one widget kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFile {
    pub fill: Option<String>,
    pub hover_fill: Option<String>,
    pub active_fill: Option<String>,
    pub text: Option<String>,
    pub track: Option<String>,
    pub handle: Option<String>,
    pub font: Option<FontSpec>,
    pub padding: Option<f64>,
}

impl StyleFile {
    fn from_style(style: &Style) -> Self {
        Self {
            fill: Some(format_color(style.fill)),
            hover_fill: Some(format_color(style.hover_fill)),
            active_fill: Some(format_color(style.active_fill)),
            text: Some(format_color(style.text)),
            track: Some(format_color(style.track)),
            handle: Some(format_color(style.handle)),
            font: Some(style.font.clone()),
            padding: Some(style.padding),
        }
    }

    fn resolve(&self, kind: WidgetKind, base: &Style) -> Style {
        let name = kind.name();
        let font = match &self.font {
            Some(font) if font.is_valid() => font.clone(),
            Some(font) => {
                log::warn!("Invalid {} font {:?}, keeping default", name, font);
                base.font.clone()
            }
            None => base.font.clone(),
        };
        let padding = match self.padding {
            Some(p) if p.is_finite() && p >= 0.0 => p,
            Some(p) => {
                log::warn!("Invalid {} padding {}, keeping default", name, p);
                base.padding
            }
            None => base.padding,
        };
        Style {
            fill: color_or(self.fill.as_deref(), base.fill, name),
            hover_fill: color_or(self.hover_fill.as_deref(), base.hover_fill, name),
            active_fill: color_or(self.active_fill.as_deref(), base.active_fill, name),
            text: color_or(self.text.as_deref(), base.text, name),
            track: color_or(self.track.as_deref(), base.track, name),
            handle: color_or(self.handle.as_deref(), base.handle, name),
            font,
            padding,
        }
    }
}

fn color_or(value: Option<&str>, fallback: Color, context: &str) -> Color {
    match value {
        None => fallback,
        Some(s) => parse_color(s).unwrap_or_else(|| {
            log::warn!("Malformed {} color {:?}, using default", context, s);
            fallback
        }),
    }
}

/// Parse a CSS hex color: `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Format a color as `#rrggbbaa`.
pub fn format_color(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rgba;
    use std::io::Write;

    #[test]
    fn test_parse_color() {
        assert_eq!(rgba(parse_color("#ff0000").unwrap()), [255, 0, 0, 255]);
        assert_eq!(rgba(parse_color(" #0080ff40 ").unwrap()), [0, 128, 255, 64]);
        assert!(parse_color("ff0000").is_none());
        assert!(parse_color("#ff00").is_none());
        assert!(parse_color("#gg0000").is_none());
        assert!(parse_color("#ééé").is_none());
    }

    #[test]
    fn test_format_color() {
        assert_eq!(format_color(Color::from_rgba8(59, 130, 246, 255)), "#3b82f6ff");
    }

    #[test]
    fn test_style_lookup() {
        let theme = Theme::default();
        assert_eq!(
            rgba(theme.style(WidgetKind::Button).fill),
            rgba(theme.button.fill)
        );
        assert_eq!(
            rgba(theme.style(WidgetKind::Slider).handle),
            rgba(theme.slider.handle)
        );
    }

    #[test]
    fn test_partial_theme_uses_defaults() {
        let theme = Theme::from_json(r##"{ "button": { "fill": "#112233" } }"##).unwrap();
        let defaults = Theme::default();
        assert_eq!(rgba(theme.button.fill), [0x11, 0x22, 0x33, 255]);
        assert_eq!(rgba(theme.button.hover_fill), rgba(defaults.button.hover_fill));
        assert_eq!(rgba(theme.background), rgba(defaults.background));
        assert_eq!(theme.slider.font, defaults.slider.font);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let theme = Theme::from_json(
            r##"{
                "background": "not-a-color",
                "button": {
                    "text": "#12",
                    "font": { "family": "", "size": 14.0 },
                    "padding": -3.0
                }
            }"##,
        )
        .unwrap();
        let defaults = Theme::default();
        assert_eq!(rgba(theme.background), rgba(defaults.background));
        assert_eq!(rgba(theme.button.text), rgba(defaults.button.text));
        assert_eq!(theme.button.font, defaults.button.font);
        assert!((theme.button.padding - defaults.button.padding).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Theme::from_json("{ not json").is_err());
    }

    #[test]
    fn test_theme_survives_json() {
        let mut theme = Theme::default();
        theme.button.font = FontSpec::new("monospace", 13.0);
        let parsed = Theme::from_json(&theme.to_json().unwrap()).unwrap();
        assert_eq!(parsed.button.font, theme.button.font);
        assert_eq!(rgba(parsed.slider.track), rgba(theme.slider.track));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{ "background": "#000000" }}"##).unwrap();
        let theme = Theme::load(file.path()).unwrap();
        assert_eq!(rgba(theme.background), [0, 0, 0, 255]);

        assert!(Theme::load("/nonexistent/panekit-theme.json").is_err());
    }
}
