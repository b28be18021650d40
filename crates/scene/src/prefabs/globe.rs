use crate::components::Drawable3D;

pub const DEFAULT_GLOBE_RADIUS: f64 = 1.0;
pub const DEFAULT_GLOBE_SEGMENTS: u32 = 64;
pub const DEFAULT_GLOBE_TEXTURE: &str = "earth_texture.png";

/// Unit sphere carrying the equirectangular earth texture.
///
/// The texture's UV layout must match `foundation::math::project`, so the
/// radius and orientation are the only knobs exposed here.
pub fn globe_drawable(radius: f64, segments: u32, texture: &str) -> Drawable3D {
    Drawable3D::textured_sphere(radius, segments.max(3), texture)
}
