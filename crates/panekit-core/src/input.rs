//! Pointer state capture for mouse/touch events.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// Pointer event delivered by the host, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { position: Point },
    Down { position: Point },
    Up { position: Point },
}

/// Latest pointer position and button state.
///
/// Widgets read this by reference during a render pass; only the host's
/// event handling writes it. Coordinates are not validated: off-surface or
/// negative positions are valid and simply miss every widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    position: Point,
    down: bool,
    /// Number of up->down transitions seen so far (press-cycle counter).
    press: u64,
    just_pressed: bool,
    just_released: bool,
}

impl PointerState {
    /// Create a pointer at the origin with the button up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the pointer position.
    pub fn record_move(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Mark the button as held. Starts a new press-cycle if it was up.
    pub fn record_down(&mut self) {
        if !self.down {
            self.down = true;
            self.press += 1;
            self.just_pressed = true;
        }
    }

    /// Mark the button as released.
    pub fn record_up(&mut self) {
        if self.down {
            self.down = false;
            self.just_released = true;
        }
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { position } => {
                self.record_move(position.x, position.y);
            }
            PointerEvent::Down { position } => {
                self.record_move(position.x, position.y);
                self.record_down();
            }
            PointerEvent::Up { position } => {
                self.record_move(position.x, position.y);
                self.record_up();
            }
        }
    }

    /// Call after each frame to reset per-frame edge flags.
    pub fn begin_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Current pointer position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the button is currently held.
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Identifier of the current (or most recent) press-cycle.
    ///
    /// Zero until the first press.
    pub fn press_id(&self) -> u64 {
        self.press
    }

    /// Whether the button went down since the last `begin_frame`.
    pub fn is_just_pressed(&self) -> bool {
        self.just_pressed
    }

    /// Whether the button went up since the last `begin_frame`.
    pub fn is_just_released(&self) -> bool {
        self.just_released
    }

    /// Half-open hit-test: `[x0, x1) x [y0, y1)`.
    ///
    /// Points on the right or bottom edge miss; zero-area rects never hit.
    pub fn hit(&self, rect: Rect) -> bool {
        let p = self.position;
        p.x >= rect.x0 && p.x < rect.x1 && p.y >= rect.y0 && p.y < rect.y1
    }
}

/// Sending half of a pointer channel, for hosts that read input on
/// another thread.
#[derive(Debug, Clone)]
pub struct PointerSender {
    tx: Sender<PointerEvent>,
}

impl PointerSender {
    /// Queue an event. Returns false once the inbox has been dropped.
    pub fn send(&self, event: PointerEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Receiving half of a pointer channel, owned by the render side.
///
/// Events are applied only when drained, so anything sent while a tick is
/// running lands in the following tick.
#[derive(Debug)]
pub struct PointerInbox {
    rx: Receiver<PointerEvent>,
}

impl PointerInbox {
    /// Apply every queued event to `state`, in send order.
    ///
    /// Returns the number of events applied.
    pub fn drain_into(&self, state: &mut PointerState) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    state.handle_pointer_event(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Pointer channel disconnected");
                    break;
                }
            }
        }
        applied
    }
}

/// Create a connected sender/inbox pair.
pub fn pointer_channel() -> (PointerSender, PointerInbox) {
    let (tx, rx) = channel();
    (PointerSender { tx }, PointerInbox { rx })
}
