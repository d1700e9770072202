//! Drawing surface abstraction.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Font selection for text drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name or CSS-style generic (e.g. "sans-serif").
    pub family: String,
    /// Size in pixels.
    pub size: f32,
}

impl FontSpec {
    /// Create a font spec.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// A font is usable when it names a family and has a positive, finite size.
    pub fn is_valid(&self) -> bool {
        !self.family.trim().is_empty() && self.size.is_finite() && self.size > 0.0
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 16.0)
    }
}

/// A 2D immediate-drawing surface of fixed pixel dimensions.
///
/// Created and owned by the host. Implementations may use a GPU scene,
/// a command list, or anything else; widgets only go through this trait
/// (via [`crate::primitives`]).
pub trait Surface {
    /// Surface dimensions in pixels.
    fn size(&self) -> Size;

    /// Set the color used by subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Set the font used by subsequent text.
    fn set_font(&mut self, font: &FontSpec);

    /// Fill an axis-aligned rectangle with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Draw text with its baseline starting at `baseline`.
    fn fill_text(&mut self, text: &str, baseline: Point);

    /// Clear a region back to transparent.
    fn clear(&mut self, rect: Rect);

    /// Full-surface rectangle.
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_validity() {
        assert!(FontSpec::default().is_valid());
        assert!(!FontSpec::new("  ", 16.0).is_valid());
        assert!(!FontSpec::new("serif", 0.0).is_valid());
        assert!(!FontSpec::new("serif", f32::NAN).is_valid());
    }
}
