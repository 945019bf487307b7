//! Centralized theme and styling constants for the flowgrid editor
//!
//! Single source of truth for all colors and dimensions used on the canvas.

use egui::Color32;

/// Color palette for the editor
pub struct Colors {
    // Background colors
    pub canvas_background: Color32,

    // Node colors
    pub node_border: Color32,
    pub node_border_selected: Color32,
    pub node_title: Color32,
    pub node_subtitle: Color32,

    // Socket colors
    pub socket_free: Color32,
    pub socket_connected: Color32,

    // Wire colors
    pub wire: Color32,
    pub wire_preview: Color32,

    // Result text
    pub result_text: Color32,
    pub error_text: Color32,
}

impl Colors {
    fn new() -> Self {
        Self {
            canvas_background: Color32::from_rgb(30, 30, 30),

            node_border: Color32::from_rgb(100, 100, 100),
            node_border_selected: Color32::from_rgb(255, 200, 100),
            node_title: Color32::WHITE,
            node_subtitle: Color32::from_gray(180),

            socket_free: Color32::from_rgb(0, 200, 255),
            socket_connected: Color32::from_rgb(0, 255, 255),

            wire: Color32::from_rgb(0, 255, 255),
            wire_preview: Color32::from_rgb(150, 150, 150),

            result_text: Color32::from_rgb(200, 255, 200),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }
}

/// Size and radius constants for the canvas
pub struct Dimensions {
    pub corner_radius: f32,
    pub border_width: f32,
    pub socket_radius: f32,
    pub wire_width: f32,
    /// Radius for grabbing a socket with the pointer.
    pub socket_click_radius: f32,
    /// Larger radius used while completing a connection drag.
    pub socket_connect_radius: f32,
    /// Radius for selecting a wire by clicking near its curve.
    pub wire_click_radius: f32,
}

impl Dimensions {
    fn new() -> Self {
        Self {
            corner_radius: 5.0,
            border_width: 2.0,
            socket_radius: 5.0,
            wire_width: 2.0,
            socket_click_radius: 8.0,
            socket_connect_radius: 15.0,
            wire_click_radius: 6.0,
        }
    }
}

/// Complete theme containing all styling constants
pub struct Theme {
    pub colors: Colors,
    pub dimensions: Dimensions,
}

/// Global theme instance
static GLOBAL_THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(|| Theme {
    colors: Colors::new(),
    dimensions: Dimensions::new(),
});

/// Get the global theme
pub fn theme() -> &'static Theme {
    &GLOBAL_THEME
}

pub fn colors() -> &'static Colors {
    &theme().colors
}

pub fn dimensions() -> &'static Dimensions {
    &theme().dimensions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_radii_cover_drawn_geometry() {
        let dims = dimensions();
        assert!(dims.socket_click_radius >= dims.socket_radius);
        assert!(dims.socket_connect_radius > dims.socket_click_radius);
        assert!(dims.wire_click_radius >= dims.wire_width);
    }
}
