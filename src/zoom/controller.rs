use serde::Serialize;

use super::{DEFAULT_ZOOM_STEP, ZoomLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Control,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("control") || name.eq_ignore_ascii_case("ctrl") {
            Key::Control
        } else {
            Key::Other(name.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomEvent {
    KeyDown(Key),
    KeyUp(Key),
    Wheel { delta_y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingState {
    Idle,
    Tracking,
}

/// Whether an event was consumed by the controller or left for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Intercepted,
    PassThrough,
}

/// Modifier-held scroll zoom.
///
/// Holding Control installs a wheel interceptor; releasing it removes the interceptor. While
/// installed, scrolling down zooms out and scrolling up zooms in by `step` percentage points.
#[derive(Debug, Clone)]
pub struct ZoomController {
    state: TrackingState,
    step: f64,
    body_zoom: String,
}

impl ZoomController {
    pub fn new(step: f64) -> Self {
        Self {
            state: TrackingState::Idle,
            step,
            body_zoom: String::new(),
        }
    }

    /// Starts from an already rendered zoom style, e.g. `"150%"`.
    pub fn with_style(step: f64, body_zoom: impl Into<String>) -> Self {
        Self {
            body_zoom: body_zoom.into(),
            ..Self::new(step)
        }
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn zoom(&self) -> ZoomLevel {
        ZoomLevel::from_style(&self.body_zoom)
    }

    /// The rendered style value; empty until the first adjustment.
    pub fn style(&self) -> &str {
        &self.body_zoom
    }

    pub fn handle(&mut self, event: &ZoomEvent) -> EventDisposition {
        match event {
            ZoomEvent::KeyDown(Key::Control) => {
                if self.state == TrackingState::Idle {
                    log::trace!("zoom tracking started");
                }
                self.state = TrackingState::Tracking;
                EventDisposition::PassThrough
            }
            ZoomEvent::KeyUp(Key::Control) => {
                if self.state == TrackingState::Tracking {
                    log::trace!("zoom tracking stopped at {}", self.zoom());
                }
                self.state = TrackingState::Idle;
                EventDisposition::PassThrough
            }
            ZoomEvent::KeyDown(_) | ZoomEvent::KeyUp(_) => EventDisposition::PassThrough,
            ZoomEvent::Wheel { delta_y } => match self.state {
                TrackingState::Idle => EventDisposition::PassThrough,
                TrackingState::Tracking => {
                    self.on_wheel(*delta_y);
                    EventDisposition::Intercepted
                }
            },
        }
    }

    pub fn increase(&mut self, amount: f64) {
        let next = self.zoom().increase(amount);
        self.body_zoom = next.to_style();
    }

    pub fn decrease(&mut self, amount: f64) {
        let next = self.zoom().decrease(amount);
        self.body_zoom = next.to_style();
    }

    fn on_wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.decrease(self.step);
        } else if delta_y < 0.0 {
            self.increase(self.step);
        }
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP)
    }
}
