//! Row/column stack layout.
//!
//! Layout is a pure function of the children's declared sizes: the running
//! offset lives on the stack of [`Stack::arrange`] and nothing persists
//! between calls or frames.

use kurbo::{Point, Size};

use crate::error::{WidgetResult, check_spacing};

/// Stacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
}

/// Stack parameters: direction, gap between children, and padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stack {
    direction: Direction,
    spacing: f64,
    padding: f64,
}

impl Stack {
    /// Create a stack. Spacing and padding must be finite and non-negative.
    pub fn new(direction: Direction, spacing: f64, padding: f64) -> WidgetResult<Self> {
        check_spacing("spacing", spacing)?;
        check_spacing("padding", padding)?;
        Ok(Self {
            direction,
            spacing,
            padding,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Compute the origin of each child, in insertion order.
    ///
    /// The primary-axis offset starts at `padding` and advances by each
    /// child's extent plus `spacing`; the cross axis is `padding` for
    /// every child. No wrapping, no reflow.
    pub fn arrange(&self, origin: Point, sizes: &[Size]) -> Vec<Point> {
        let mut offset = self.padding;
        sizes
            .iter()
            .map(|size| match self.direction {
                Direction::Row => {
                    let at = Point::new(origin.x + offset, origin.y + self.padding);
                    offset += size.width + self.spacing;
                    at
                }
                Direction::Column => {
                    let at = Point::new(origin.x + self.padding, origin.y + offset);
                    offset += size.height + self.spacing;
                    at
                }
            })
            .collect()
    }

    /// Natural size of a stack holding children of `sizes`.
    pub fn extent(&self, sizes: &[Size]) -> Size {
        let gaps = self.spacing * sizes.len().saturating_sub(1) as f64;
        let edges = self.padding * 2.0;
        match self.direction {
            Direction::Row => Size::new(
                edges + gaps + sizes.iter().map(|s| s.width).sum::<f64>(),
                edges + sizes.iter().map(|s| s.height).fold(0.0, f64::max),
            ),
            Direction::Column => Size::new(
                edges + sizes.iter().map(|s| s.width).fold(0.0, f64::max),
                edges + gaps + sizes.iter().map(|s| s.height).sum::<f64>(),
            ),
        }
    }
}
