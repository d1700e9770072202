//! panekit Core Library
//!
//! Platform-agnostic core of the panekit immediate-mode UI: pointer capture,
//! widgets that hit-test and draw themselves every frame, and a row/column
//! stack layout that positions children before they render.

pub mod error;
pub mod frame;
pub mod input;
pub mod layout;
pub mod primitives;
pub mod style;
pub mod surface;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ThemeError, ThemeResult, WidgetError, WidgetResult};
pub use frame::{FrameDriver, FrameReport};
pub use input::{PointerEvent, PointerInbox, PointerSender, PointerState, pointer_channel};
pub use layout::{Direction, Stack};
pub use style::{Style, StyleFile, Theme, ThemeFile, WidgetKind, format_color, parse_color};
pub use surface::{FontSpec, Surface};
pub use widget::{Button, ClickPolicy, Container, FrameContext, Slider, Widget};
