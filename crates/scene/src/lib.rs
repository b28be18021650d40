pub mod arc;
pub mod components;
pub mod mesh_line;
pub mod picking;
pub mod prefabs;

pub use arc::*;
pub use mesh_line::*;
