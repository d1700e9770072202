//! Widgets: the nodes of the per-frame render/hit-test traversal.
//!
//! Every widget is re-evaluated each frame: it receives its origin from
//! the parent's layout, hit-tests itself against the pointer in the
//! [`FrameContext`], draws through [`crate::primitives`], and fires its
//! callback when the interaction calls for it.

mod button;
mod container;
mod slider;

pub use button::{Button, ClickHandler, ClickPolicy, LABEL_INSET};
pub use container::Container;
pub use slider::{ChangeHandler, HANDLE_WIDTH, Slider, TRACK_HEIGHT};

use kurbo::{Point, Size};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::frame::FrameReport;
use crate::input::PointerState;
use crate::style::{Theme, WidgetKind};
use crate::surface::Surface;

/// Everything a widget may touch while rendering one frame.
pub struct FrameContext<'a> {
    /// Target surface.
    pub surface: &'a mut dyn Surface,
    /// Pointer snapshot for this frame.
    pub pointer: &'a PointerState,
    /// Read-only style lookup.
    pub theme: &'a Theme,
    /// Per-frame counters.
    pub report: &'a mut FrameReport,
}

/// A node of the widget tree.
#[derive(Debug)]
pub enum Widget {
    Button(Button),
    Slider(Slider),
    Container(Container),
}

impl Widget {
    /// Style lookup key for this widget.
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Button(_) => WidgetKind::Button,
            Widget::Slider(_) => WidgetKind::Slider,
            Widget::Container(_) => WidgetKind::Container,
        }
    }

    /// Declared size used by the parent's layout.
    pub fn size(&self) -> Size {
        match self {
            Widget::Button(b) => b.size(),
            Widget::Slider(s) => s.size(),
            Widget::Container(c) => c.size(),
        }
    }

    /// Render this widget with its top-left corner at `origin`.
    pub fn render(&mut self, cx: &mut FrameContext<'_>, origin: Point) {
        match self {
            Widget::Button(b) => b.render(cx, origin),
            Widget::Slider(s) => s.render(cx, origin),
            Widget::Container(c) => c.render(cx, origin),
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            Widget::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Widget::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Widget::Container(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}

impl From<Slider> for Widget {
    fn from(slider: Slider) -> Self {
        Widget::Slider(slider)
    }
}

impl From<Container> for Widget {
    fn from(container: Container) -> Self {
        Widget::Container(container)
    }
}

/// Run a user callback, containing any panic to this widget.
///
/// A failing callback is logged and counted; the pointer snapshot is never
/// handed to callbacks, so it cannot be left half-updated.
pub(crate) fn invoke_isolated(
    report: &mut FrameReport,
    kind: WidgetKind,
    name: &str,
    callback: impl FnOnce(),
) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(()) => true,
        Err(payload) => {
            log::error!(
                "{} '{}' callback panicked: {}",
                kind.name(),
                name,
                panic_message(payload.as_ref())
            );
            report.callback_failures += 1;
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic>"
    }
}
