/// Linear RGBA color, components in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    // CSS named colors.
    pub const AQUA: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const GREEN: Self = Self::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const ORANGE: Self = Self::rgb(1.0, 165.0 / 255.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }
}
