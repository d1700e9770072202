//! Container: owns children and positions them with a [`Stack`].

use kurbo::{Point, Size};

use super::{FrameContext, Widget};
use crate::error::{WidgetResult, check_size};
use crate::layout::{Direction, Stack};

/// Ordered children stacked in a row or column.
///
/// A container draws nothing itself. Its size is the stack extent of its
/// children unless a fixed size is set.
#[derive(Debug)]
pub struct Container {
    children: Vec<Widget>,
    stack: Stack,
    fixed_size: Option<Size>,
}

impl Container {
    /// Create an empty container.
    pub fn new(direction: Direction, spacing: f64, padding: f64) -> WidgetResult<Self> {
        Ok(Self {
            children: Vec::new(),
            stack: Stack::new(direction, spacing, padding)?,
            fixed_size: None,
        })
    }

    /// Create an empty row.
    pub fn row(spacing: f64, padding: f64) -> WidgetResult<Self> {
        Self::new(Direction::Row, spacing, padding)
    }

    /// Create an empty column.
    pub fn column(spacing: f64, padding: f64) -> WidgetResult<Self> {
        Self::new(Direction::Column, spacing, padding)
    }

    /// Append a child (builder form).
    pub fn with_child(mut self, child: impl Into<Widget>) -> Self {
        self.push(child);
        self
    }

    /// Pin the container to a fixed size instead of its children's extent.
    pub fn with_size(mut self, width: f64, height: f64) -> WidgetResult<Self> {
        check_size(width, height)?;
        self.fixed_size = Some(Size::new(width, height));
        Ok(self)
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Into<Widget>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Widget] {
        &mut self.children
    }

    pub fn direction(&self) -> Direction {
        self.stack.direction()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn size(&self) -> Size {
        self.fixed_size
            .unwrap_or_else(|| self.stack.extent(&self.child_sizes()))
    }

    /// Origins the children would receive for a container at `origin`.
    pub fn child_origins(&self, origin: Point) -> Vec<Point> {
        self.stack.arrange(origin, &self.child_sizes())
    }

    fn child_sizes(&self) -> Vec<Size> {
        self.children.iter().map(Widget::size).collect()
    }

    pub(crate) fn render(&mut self, cx: &mut FrameContext<'_>, origin: Point) {
        let origins = self.child_origins(origin);
        for (child, at) in self.children.iter_mut().zip(origins) {
            child.render(cx, at);
        }
    }
}
