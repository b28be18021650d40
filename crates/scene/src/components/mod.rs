pub mod color;
pub mod drawable3d;
pub mod marker;

pub use color::*;
pub use drawable3d::*;
pub use marker::*;
