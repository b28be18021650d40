#[derive(Debug, Clone, PartialEq)]
pub enum Shape3D {
    /// UV sphere; `segments` is used for both width and height subdivisions.
    Sphere { radius: f64, segments: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Textured { texture: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable3D {
    pub shape: Shape3D,
    pub material: Material,
}

impl Drawable3D {
    pub fn textured_sphere(radius: f64, segments: u32, texture: impl Into<String>) -> Self {
        Self {
            shape: Shape3D::Sphere { radius, segments },
            material: Material::Textured {
                texture: texture.into(),
            },
        }
    }
}
