//! In-crate surface used by unit tests.

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::surface::{FontSpec, Surface};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Fill([u8; 4]),
    Font(FontSpec),
    Rect(Rect),
    Text(String, Point),
    Clear(Rect),
}

#[derive(Debug)]
pub(crate) struct TestSurface {
    size: Size,
    pub ops: Vec<Op>,
}

impl TestSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn filled_rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, p) => Some((t.clone(), *p)),
                _ => None,
            })
            .collect()
    }

    /// Fill color in effect for each rect, in draw order.
    pub fn rect_colors(&self) -> Vec<[u8; 4]> {
        let mut current = [0, 0, 0, 0];
        let mut colors = Vec::new();
        for op in &self.ops {
            match op {
                Op::Fill(c) => current = *c,
                Op::Rect(_) => colors.push(current),
                _ => {}
            }
        }
        colors
    }
}

pub(crate) fn rgba(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

impl Surface for TestSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::Fill(rgba(color)));
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.ops.push(Op::Font(font.clone()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(Op::Rect(rect));
    }

    fn fill_text(&mut self, text: &str, baseline: Point) {
        self.ops.push(Op::Text(text.to_string(), baseline));
    }

    fn clear(&mut self, rect: Rect) {
        self.ops.push(Op::Clear(rect));
    }
}
