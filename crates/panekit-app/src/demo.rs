//! Demo widget tree shown by the `panekit` binary.

use std::cell::Cell;
use std::rc::Rc;

use panekit_core::{Button, Container, Slider, WidgetResult};

/// Shared demo state, readable after frames run.
#[derive(Debug, Default, Clone)]
pub struct DemoState {
    pub count: Rc<Cell<u32>>,
    pub level: Rc<Cell<f64>>,
}

/// A column holding a row of two buttons and a volume slider.
///
/// "Increment" bumps the counter, "Reset" zeroes it; the slider mirrors
/// its value into `level`.
pub fn build(state: &DemoState) -> WidgetResult<Container> {
    let count = state.count.clone();
    let increment = Button::new("Increment", 150.0, 40.0)?.on_click(move || {
        count.set(count.get() + 1);
        log::info!("Count: {}", count.get());
    });

    let count = state.count.clone();
    let reset = Button::new("Reset", 150.0, 40.0)?.on_click(move || {
        count.set(0);
        log::info!("Count reset");
    });

    let level = state.level.clone();
    let slider = Slider::new(0.0, 100.0, 0.0, 320.0, 20.0)?.on_change(move |value| {
        level.set(value);
        log::debug!("Level: {:.1}", value);
    });

    Ok(Container::column(10.0, 20.0)?
        .with_child(
            Container::row(20.0, 0.0)?
                .with_child(increment)
                .with_child(reset),
        )
        .with_child(slider))
}
