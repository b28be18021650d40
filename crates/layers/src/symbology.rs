use scene::components::Color;
use scene::prefabs::{DEFAULT_GLOBE_RADIUS, DEFAULT_GLOBE_SEGMENTS, DEFAULT_GLOBE_TEXTURE};
use scene::{DEFAULT_ARC_BASE_RADIUS, DEFAULT_ARC_DIVISIONS, DEFAULT_ARC_HEIGHT_FACTOR};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RouteStyle {
    pub color: Color,
    /// Screen-space width in pixels.
    pub width: f32,
}

impl RouteStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraDefaults {
    pub position: [f64; 3],
    pub background: Color,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 2.5],
            background: Color::BLACK,
        }
    }
}

/// Visual parameters of the globe layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeStyle {
    pub globe_radius: f64,
    pub globe_segments: u32,
    pub texture: String,
    /// Radius markers and arc endpoints are projected onto.
    pub lift: f64,
    pub marker_radius: f64,
    pub marker_color: Color,
    pub arc_height_factor: f64,
    pub arc_divisions: usize,
    pub route: RouteStyle,
    pub highlighted_route: RouteStyle,
    /// Per-vertex width multiplier fed to the mesh line.
    pub ribbon_width: f32,
    pub camera: CameraDefaults,
}

impl Default for GlobeStyle {
    fn default() -> Self {
        Self {
            globe_radius: DEFAULT_GLOBE_RADIUS,
            globe_segments: DEFAULT_GLOBE_SEGMENTS,
            texture: DEFAULT_GLOBE_TEXTURE.to_string(),
            lift: DEFAULT_ARC_BASE_RADIUS,
            marker_radius: 0.005,
            marker_color: Color::ORANGE,
            arc_height_factor: DEFAULT_ARC_HEIGHT_FACTOR,
            arc_divisions: DEFAULT_ARC_DIVISIONS,
            route: RouteStyle::new(Color::AQUA, 3.0),
            highlighted_route: RouteStyle::new(Color::GREEN, 13.0),
            ribbon_width: 0.0005,
            camera: CameraDefaults::default(),
        }
    }
}

impl GlobeStyle {
    pub fn route_style(&self, highlighted: bool) -> RouteStyle {
        if highlighted {
            self.highlighted_route
        } else {
            self.route
        }
    }
}
