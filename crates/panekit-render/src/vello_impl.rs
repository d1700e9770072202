//! Vello-backed surface.

use kurbo::{Affine, Point, Rect, Size};
use panekit_core::{FontSpec, Surface};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, LayoutContext};
use peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::error::{RenderResult, RendererError};

/// [`Surface`] that encodes draw calls into a Vello [`Scene`].
///
/// The host renders the scene to a texture and presents it; this type
/// never touches the GPU itself.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for text rendering (cached across frames).
    font_cx: FontContext,
    /// Layout context for text rendering.
    layout_cx: LayoutContext<Brush>,
    size: Size,
    fill: Color,
    font: FontSpec,
    /// Color partial clears paint with.
    clear_color: Color,
}

impl VelloSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
            size: Size::new(width, height),
            fill: Color::BLACK,
            font: FontSpec::default(),
            clear_color: Color::TRANSPARENT,
        }
    }

    /// Change the surface size, e.g. after a window resize.
    pub fn resize(&mut self, width: f64, height: f64) -> RenderResult<()> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(RendererError::Surface(format!(
                "invalid surface size {width}x{height}"
            )));
        }
        self.size = Size::new(width, height);
        Ok(())
    }

    /// Set the color used when only part of the surface is cleared.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Get the current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the built scene, leaving an empty one in its place.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Surface for VelloSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, self.fill, None, &rect);
    }

    fn fill_text(&mut self, text: &str, baseline: Point) {
        use parley::StyleProperty;

        let brush = Brush::Solid(self.fill);
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(self.font.size));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::Source(
            self.font.family.as_str().into(),
        )));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());

        // Parley puts y=0 at the top of the first line; shift so its
        // baseline lands on `baseline`.
        let first_baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline as f64)
            .unwrap_or(0.0);
        let transform = Affine::translate((baseline.x, baseline.y - first_baseline));

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        glyph_count += 1;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(transform)
                        .glyph_transform(glyph_xform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 {
            log::warn!(
                "No glyphs rendered for {:?} (font family {:?} not found?)",
                text,
                self.font.family
            );
        }
    }

    fn clear(&mut self, rect: Rect) {
        let bounds = self.bounds();
        let covers = rect.x0 <= bounds.x0
            && rect.y0 <= bounds.y0
            && rect.x1 >= bounds.x1
            && rect.y1 >= bounds.y1;
        if covers {
            self.scene.reset();
        } else {
            self.scene
                .fill(Fill::NonZero, Affine::IDENTITY, self.clear_color, None, &rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_creation() {
        let surface = VelloSurface::new(800.0, 600.0);
        assert!(surface.scene().encoding().is_empty());
        assert_eq!(surface.size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn test_fill_then_full_clear_resets_scene() {
        let mut surface = VelloSurface::new(800.0, 600.0);
        surface.set_fill_color(Color::WHITE);
        surface.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!surface.scene().encoding().is_empty());

        surface.clear(surface.bounds());
        assert!(surface.scene().encoding().is_empty());
    }

    #[test]
    fn test_take_scene_leaves_empty() {
        let mut surface = VelloSurface::new(100.0, 100.0);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let scene = surface.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(surface.scene().encoding().is_empty());
    }

    #[test]
    fn test_resize_rejects_invalid() {
        let mut surface = VelloSurface::new(100.0, 100.0);
        assert!(surface.resize(f64::NAN, 10.0).is_err());
        assert!(surface.resize(-1.0, 10.0).is_err());
        surface.resize(320.0, 240.0).unwrap();
        assert_eq!(surface.size(), Size::new(320.0, 240.0));
    }
}
