pub mod controller;
pub mod level;

pub use controller::{EventDisposition, Key, TrackingState, ZoomController, ZoomEvent};
pub use level::ZoomLevel;

/// Percentage points moved per wheel notch while the modifier is held.
pub const DEFAULT_ZOOM_STEP: f64 = 10.0;
