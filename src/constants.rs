//! Application-wide constants and default values

/// Canvas navigation constants
pub mod canvas {
    /// Zoom limits for the canvas view
    pub const MIN_ZOOM: f32 = 0.25;
    pub const MAX_ZOOM: f32 = 4.0;

    /// Scroll-to-zoom sensitivity
    pub const ZOOM_SPEED: f32 = 0.001;
}

/// Window defaults
pub mod window {
    pub const DEFAULT_SIZE: [f32; 2] = [1200.0, 800.0];
}
