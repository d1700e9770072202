//! Push button with a text label.

use kurbo::{Point, Rect, Size, Vec2};
use std::fmt;

use super::{FrameContext, invoke_isolated};
use crate::error::{WidgetResult, check_size};
use crate::primitives;
use crate::style::WidgetKind;

/// Offset of the label baseline from the button origin.
pub const LABEL_INSET: Vec2 = Vec2::new(10.0, 25.0);

/// Click handler.
pub type ClickHandler = Box<dyn FnMut()>;

/// When a held pointer over the button fires `on_click`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickPolicy {
    /// At most once per press-cycle (pointer-down to pointer-up).
    #[default]
    EdgeTriggered,
    /// Every frame that sees the pointer hovering and held.
    LevelTriggered,
}

/// A fixed-size button.
pub struct Button {
    label: String,
    size: Size,
    on_click: Option<ClickHandler>,
    policy: ClickPolicy,
    /// Press-cycle that last fired, for edge triggering.
    fired_press: Option<u64>,
    hovered: bool,
}

impl Button {
    /// Create a button. Width and height must be finite and non-negative.
    pub fn new(label: impl Into<String>, width: f64, height: f64) -> WidgetResult<Self> {
        check_size(width, height)?;
        let label = label.into();
        log::debug!("Button '{}' {}x{}", label, width, height);
        Ok(Self {
            label,
            size: Size::new(width, height),
            on_click: None,
            policy: ClickPolicy::default(),
            fired_press: None,
            hovered: false,
        })
    }

    /// Set the click handler.
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Set the click policy.
    pub fn with_policy(mut self, policy: ClickPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn policy(&self) -> ClickPolicy {
        self.policy
    }

    /// Whether the pointer was over the button during the last render.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn render(&mut self, cx: &mut FrameContext<'_>, origin: Point) {
        let bounds = Rect::from_origin_size(origin, self.size);
        let pointer = cx.pointer;
        self.hovered = pointer.hit(bounds);
        let held = self.hovered && pointer.is_down();

        let style = cx.theme.style(WidgetKind::Button);
        let fill = if held {
            style.active_fill
        } else if self.hovered {
            style.hover_fill
        } else {
            style.fill
        };
        primitives::fill_rect(cx.surface, bounds, fill);
        primitives::draw_text(
            cx.surface,
            &self.label,
            origin + LABEL_INSET,
            &style.font,
            style.text,
        );

        if !held {
            return;
        }
        let press = pointer.press_id();
        let fire = match self.policy {
            ClickPolicy::EdgeTriggered => self.fired_press != Some(press),
            ClickPolicy::LevelTriggered => true,
        };
        if !fire {
            return;
        }
        self.fired_press = Some(press);
        cx.report.clicks += 1;
        if let Some(handler) = self.on_click.as_mut() {
            log::debug!("Button '{}' clicked (press {})", self.label, press);
            invoke_isolated(cx.report, WidgetKind::Button, &self.label, handler);
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("size", &self.size)
            .field("has_on_click", &self.on_click.is_some())
            .field("policy", &self.policy)
            .field("hovered", &self.hovered)
            .finish()
    }
}
