//! Surface that records draw calls instead of rasterizing them.

use kurbo::{Point, Rect, Size};
use panekit_core::{FontSpec, Surface};
use peniko::Color;

/// One recorded draw call, with the fill color and font in effect.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillText {
        text: String,
        baseline: Point,
        font: FontSpec,
        color: Color,
    },
}

/// Headless [`Surface`] that keeps every draw call in order.
///
/// Used for tests and for hosts that replay frames elsewhere.
#[derive(Debug)]
pub struct RecordingSurface {
    size: Size,
    fill: Color,
    font: FontSpec,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            fill: Color::BLACK,
            font: FontSpec::default(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Filled rectangles in draw order.
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Text runs with their baselines, in draw order.
    pub fn texts(&self) -> Vec<(String, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, baseline, .. } => Some((text.clone(), *baseline)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
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
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: self.fill,
        });
    }

    fn fill_text(&mut self, text: &str, baseline: Point) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            baseline,
            font: self.font.clone(),
            color: self.fill,
        });
    }

    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear { rect });
    }
}
