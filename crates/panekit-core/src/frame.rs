//! Frame driver: one clear + render traversal per tick.

use kurbo::Point;

use crate::input::{PointerInbox, PointerState};
use crate::primitives;
use crate::style::Theme;
use crate::surface::Surface;
use crate::widget::{FrameContext, Widget};

/// Counters collected while rendering one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Index of the tick that produced this report.
    pub tick: u64,
    /// Button clicks dispatched (with or without a handler).
    pub clicks: usize,
    /// Slider values changed by dragging.
    pub changes: usize,
    /// Callbacks that panicked and were contained.
    pub callback_failures: usize,
}

/// Owns the root widget and theme and renders them once per tick.
///
/// The host calls [`FrameDriver::tick`] at whatever cadence its
/// presentation timer provides; nothing here depends on the tick rate.
#[derive(Debug)]
pub struct FrameDriver {
    root: Widget,
    theme: Theme,
    ticks: u64,
}

impl FrameDriver {
    /// Create a driver for a widget tree.
    pub fn new(root: impl Into<Widget>, theme: Theme) -> Self {
        Self {
            root: root.into(),
            theme,
            ticks: 0,
        }
    }

    pub fn root(&self) -> &Widget {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Widget {
        &mut self.root
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme. Takes effect on the next tick.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Number of ticks rendered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Render one frame.
    ///
    /// Clears the surface, paints the theme background, and renders the
    /// root at `(0, 0)` against `pointer` as it stands now. The pointer is
    /// only read during the traversal; afterwards its per-frame edge flags
    /// are reset so the next tick starts clean.
    pub fn tick(&mut self, surface: &mut dyn Surface, pointer: &mut PointerState) -> FrameReport {
        let mut report = FrameReport {
            tick: self.ticks,
            ..FrameReport::default()
        };

        let bounds = surface.bounds();
        surface.clear(bounds);
        primitives::fill_rect(surface, bounds, self.theme.background);

        {
            let mut cx = FrameContext {
                surface,
                pointer: &*pointer,
                theme: &self.theme,
                report: &mut report,
            };
            self.root.render(&mut cx, Point::ZERO);
        }
        pointer.begin_frame();
        self.ticks += 1;

        if report.callback_failures > 0 {
            log::warn!(
                "Tick {}: {} callback(s) failed",
                report.tick,
                report.callback_failures
            );
        }
        log::trace!("Tick {} done: {:?}", report.tick, report);
        report
    }

    /// Drain queued pointer events into `pointer`, then render one frame.
    ///
    /// Events queued while this tick runs stay in the inbox for the next one.
    pub fn tick_with_inbox(
        &mut self,
        surface: &mut dyn Surface,
        pointer: &mut PointerState,
        inbox: &PointerInbox,
    ) -> FrameReport {
        let applied = inbox.drain_into(pointer);
        if applied > 0 {
            log::trace!("Applied {} pointer event(s) before tick {}", applied, self.ticks);
        }
        self.tick(surface, pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerEvent, pointer_channel};
    use crate::test_support::{Op, TestSurface, rgba};
    use crate::widget::{Button, Container, Slider};
    use kurbo::Rect;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_tick_clears_then_paints_background() {
        let theme = Theme::default();
        let background = rgba(theme.background);
        let mut driver = FrameDriver::new(Button::new("OK", 150.0, 40.0).unwrap(), theme);
        let mut surface = TestSurface::new(320.0, 240.0);

        driver.tick(&mut surface, &mut PointerState::new());

        let full = Rect::new(0.0, 0.0, 320.0, 240.0);
        assert_eq!(surface.ops[0], Op::Clear(full));
        assert_eq!(surface.ops[1], Op::Fill(background));
        assert_eq!(surface.ops[2], Op::Rect(full));
        // Root renders at (0, 0)
        assert_eq!(surface.filled_rects()[1], Rect::new(0.0, 0.0, 150.0, 40.0));
    }

    #[test]
    fn test_tick_counter_and_edge_reset() {
        let mut driver = FrameDriver::new(Container::row(0.0, 0.0).unwrap(), Theme::default());
        let mut surface = TestSurface::new(100.0, 100.0);
        let mut pointer = PointerState::new();
        pointer.record_down();

        let first = driver.tick(&mut surface, &mut pointer);
        let second = driver.tick(&mut surface, &mut pointer);

        assert_eq!((first.tick, second.tick), (0, 1));
        assert_eq!(driver.ticks(), 2);
        assert!(!pointer.is_just_pressed());
        assert!(pointer.is_down());
    }

    #[test]
    fn test_inbox_events_apply_before_tick() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let button = Button::new("Go", 100.0, 40.0)
            .unwrap()
            .on_click(move || c.set(c.get() + 1));
        let mut driver = FrameDriver::new(button, Theme::default());
        let mut surface = TestSurface::new(200.0, 200.0);
        let mut pointer = PointerState::new();
        let (tx, inbox) = pointer_channel();

        tx.send(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
        });
        let report = driver.tick_with_inbox(&mut surface, &mut pointer, &inbox);

        assert_eq!(report.clicks, 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_failing_callback_does_not_stop_traversal() {
        let slider = Slider::new(0.0, 100.0, 0.0, 200.0, 20.0).unwrap();
        let root = Container::column(0.0, 0.0)
            .unwrap()
            .with_child(
                Button::new("Boom", 200.0, 40.0)
                    .unwrap()
                    .on_click(|| panic!("boom")),
            )
            .with_child(slider);
        let mut driver = FrameDriver::new(root, Theme::default());
        let mut surface = TestSurface::new(400.0, 400.0);
        let mut pointer = PointerState::new();
        pointer.record_move(10.0, 10.0);
        pointer.record_down();

        let report = driver.tick(&mut surface, &mut pointer);

        assert_eq!(report.callback_failures, 1);
        // background + button + slider track + slider handle
        assert_eq!(surface.filled_rects().len(), 4);
    }
}
