//! Horizontal value slider.

use kurbo::{Point, Rect, Size};
use std::fmt;

use super::{FrameContext, invoke_isolated};
use crate::error::{WidgetError, WidgetResult, check_size};
use crate::primitives;
use crate::style::WidgetKind;

/// Height of the track bar.
pub const TRACK_HEIGHT: f64 = 10.0;
/// Width of the draggable handle.
pub const HANDLE_WIDTH: f64 = 10.0;

/// Value change handler.
pub type ChangeHandler = Box<dyn FnMut(f64)>;

/// A slider over `[min, max]`.
///
/// The slider owns its value. Its position comes from the parent layout
/// only; it keeps no coordinates of its own.
pub struct Slider {
    min: f64,
    max: f64,
    value: f64,
    size: Size,
    on_change: Option<ChangeHandler>,
}

impl Slider {
    /// Create a slider.
    ///
    /// Fails when `max <= min`, either bound is non-finite, the size is
    /// invalid, or `value` lies outside `[min, max]`.
    pub fn new(min: f64, max: f64, value: f64, width: f64, height: f64) -> WidgetResult<Self> {
        if !(min.is_finite() && max.is_finite()) || max <= min {
            return Err(WidgetError::InvalidRange { min, max });
        }
        check_size(width, height)?;
        if !(min..=max).contains(&value) {
            return Err(WidgetError::ValueOutOfRange { value, min, max });
        }
        log::debug!("Slider [{}, {}] = {} ({}x{})", min, max, value, width, height);
        Ok(Self {
            min,
            max,
            value,
            size: Size::new(width, height),
            on_change: None,
        })
    }

    /// Set the change handler, called after a drag moves the value.
    pub fn on_change(mut self, handler: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value programmatically, clamped to `[min, max]`.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(self.min, self.max);
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Handle center, measured from the slider's left edge.
    pub fn handle_offset(&self) -> f64 {
        (self.value - self.min) / (self.max - self.min) * self.size.width
    }

    /// Value a pointer at `pointer_x` selects for a slider whose left edge
    /// is at `origin_x`. Not clamped: a pointer past the track yields a
    /// value past the range.
    pub fn value_at(&self, pointer_x: f64, origin_x: f64) -> f64 {
        if self.size.width <= 0.0 {
            return self.value;
        }
        self.min + (pointer_x - origin_x) / self.size.width * (self.max - self.min)
    }

    pub(crate) fn render(&mut self, cx: &mut FrameContext<'_>, origin: Point) {
        let bounds = Rect::from_origin_size(origin, self.size);
        let style = cx.theme.style(WidgetKind::Slider);

        let track_top = origin.y + (self.size.height - TRACK_HEIGHT) / 2.0;
        let track = Rect::new(
            origin.x,
            track_top,
            origin.x + self.size.width,
            track_top + TRACK_HEIGHT,
        );
        primitives::fill_rect(cx.surface, track, style.track);

        let center = origin.x + self.handle_offset();
        let handle = Rect::new(
            center - HANDLE_WIDTH / 2.0,
            origin.y,
            center + HANDLE_WIDTH / 2.0,
            origin.y + self.size.height,
        );
        primitives::fill_rect(cx.surface, handle, style.handle);

        // Drag: unconditional overwrite from the pointer, every frame held.
        let pointer = cx.pointer;
        if !(pointer.is_down() && pointer.hit(bounds)) {
            return;
        }
        let value = self.value_at(pointer.position().x, origin.x);
        if value == self.value {
            return;
        }
        self.value = value;
        cx.report.changes += 1;
        log::trace!("Slider value -> {}", value);
        if let Some(handler) = self.on_change.as_mut() {
            invoke_isolated(cx.report, WidgetKind::Slider, "slider", || handler(value));
        }
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("size", &self.size)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameReport;
    use crate::input::PointerState;
    use crate::style::Theme;
    use crate::test_support::TestSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    const ORIGIN: Point = Point::new(50.0, 150.0);

    fn slider() -> Slider {
        Slider::new(0.0, 100.0, 0.0, 200.0, 20.0).unwrap()
    }

    fn render(slider: &mut Slider, pointer: &PointerState) -> (TestSurface, FrameReport) {
        let mut surface = TestSurface::new(800.0, 600.0);
        let mut report = FrameReport::default();
        let theme = Theme::default();
        let mut cx = FrameContext {
            surface: &mut surface,
            pointer,
            theme: &theme,
            report: &mut report,
        };
        slider.render(&mut cx, ORIGIN);
        (surface, report)
    }

    fn held_at(x: f64, y: f64) -> PointerState {
        let mut pointer = PointerState::new();
        pointer.record_move(x, y);
        pointer.record_down();
        pointer
    }

    #[test]
    fn test_rejects_bad_construction() {
        assert_eq!(
            Slider::new(5.0, 5.0, 5.0, 100.0, 20.0).unwrap_err(),
            WidgetError::InvalidRange { min: 5.0, max: 5.0 }
        );
        assert!(Slider::new(10.0, 0.0, 5.0, 100.0, 20.0).is_err());
        assert!(Slider::new(0.0, f64::INFINITY, 5.0, 100.0, 20.0).is_err());
        assert!(Slider::new(0.0, 10.0, 5.0, -100.0, 20.0).is_err());
        assert!(matches!(
            Slider::new(0.0, 10.0, 11.0, 100.0, 20.0),
            Err(WidgetError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_drag_derives_value() {
        let mut s = slider();
        render(&mut s, &held_at(150.0, 160.0));
        assert!((s.value() - 50.0).abs() < 1e-9);

        render(&mut s, &held_at(50.0, 160.0));
        assert!(s.value().abs() < 1e-9);
    }

    #[test]
    fn test_value_at_is_unclamped() {
        let s = slider();
        assert!((s.value_at(250.0, ORIGIN.x) - 100.0).abs() < 1e-9);
        assert!((s.value_at(350.0, ORIGIN.x) - 150.0).abs() < 1e-9);
        assert!((s.value_at(0.0, ORIGIN.x) + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_edge_is_outside_bounds() {
        let mut s = slider();
        s.set_value(30.0);
        render(&mut s, &held_at(250.0, 160.0));
        assert!((s.value() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_is_idempotent() {
        let mut s = slider();
        let pointer = held_at(120.0, 155.0);
        let (_, first) = render(&mut s, &pointer);
        let settled = s.value();
        assert_eq!(first.changes, 1);

        for _ in 0..10 {
            let (_, report) = render(&mut s, &pointer);
            assert_eq!(report.changes, 0);
            assert_eq!(s.value(), settled);
        }
    }

    #[test]
    fn test_no_drag_without_press_or_hit() {
        let mut s = slider();
        let mut pointer = PointerState::new();
        pointer.record_move(150.0, 160.0);
        render(&mut s, &pointer);
        assert_eq!(s.value(), 0.0);

        render(&mut s, &held_at(150.0, 400.0));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_draws_track_and_centered_handle() {
        let mut s = Slider::new(0.0, 100.0, 25.0, 200.0, 20.0).unwrap();
        let (surface, _) = render(&mut s, &PointerState::new());

        let rects = surface.filled_rects();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(50.0, 155.0, 250.0, 165.0));
        // handle centered at 50 + 25% of 200
        assert_eq!(rects[1], Rect::new(95.0, 150.0, 105.0, 170.0));
    }

    #[test]
    fn test_set_value_clamps() {
        let mut s = slider();
        s.set_value(140.0);
        assert_eq!(s.value(), 100.0);
        s.set_value(-3.0);
        assert_eq!(s.value(), 0.0);
        s.set_value(f64::NAN);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_on_change_receives_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut s = slider().on_change(move |v| sink.borrow_mut().push(v));

        render(&mut s, &held_at(150.0, 160.0));
        render(&mut s, &held_at(150.0, 160.0));
        render(&mut s, &held_at(100.0, 160.0));

        assert_eq!(*seen.borrow(), vec![50.0, 25.0]);
    }
}
