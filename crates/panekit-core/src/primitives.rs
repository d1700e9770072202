//! Stateless drawing helpers on top of [`Surface`].
//!
//! Both helpers clip against the surface bounds. Drawing that lands
//! entirely off-surface, or with non-finite coordinates, is a silent no-op.

use kurbo::{Point, Rect};
use peniko::Color;

use crate::surface::{FontSpec, Surface};

/// Fill `rect` with `color`, clipped to the surface.
pub fn fill_rect(surface: &mut dyn Surface, rect: Rect, color: Color) {
    let Some(clipped) = clip_to(surface.bounds(), rect) else {
        return;
    };
    surface.set_fill_color(color);
    surface.fill_rect(clipped);
}

/// Draw `text` with its baseline at `baseline`.
///
/// Text anchored outside the surface is skipped. An invalid font falls
/// back to [`FontSpec::default`].
pub fn draw_text(
    surface: &mut dyn Surface,
    text: &str,
    baseline: Point,
    font: &FontSpec,
    color: Color,
) {
    if text.is_empty() || !baseline.is_finite() {
        return;
    }
    let bounds = surface.bounds();
    if baseline.x < bounds.x0
        || baseline.x >= bounds.x1
        || baseline.y < bounds.y0
        || baseline.y >= bounds.y1
    {
        return;
    }

    surface.set_fill_color(color);
    if font.is_valid() {
        surface.set_font(font);
    } else {
        log::warn!("Invalid font {:?}, using default", font);
        surface.set_font(&FontSpec::default());
    }
    surface.fill_text(text, baseline);
}

/// Intersect `rect` with `bounds`. Returns None when nothing is left to draw.
pub fn clip_to(bounds: Rect, rect: Rect) -> Option<Rect> {
    if !(rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite())
    {
        return None;
    }
    let rect = rect.abs();
    let clipped = Rect::new(
        rect.x0.max(bounds.x0),
        rect.y0.max(bounds.y0),
        rect.x1.min(bounds.x1),
        rect.y1.min(bounds.y1),
    );
    if clipped.x1 > clipped.x0 && clipped.y1 > clipped.y0 {
        Some(clipped)
    } else {
        None
    }
}
