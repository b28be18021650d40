pub mod globe;
pub mod layer;
pub mod symbology;

pub use globe::*;
pub use layer::*;
pub use symbology::*;
