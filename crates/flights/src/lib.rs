pub mod airport;
pub mod dataset;
pub mod highlight;
pub mod route;
pub mod trip;

pub use airport::*;
pub use dataset::*;
pub use highlight::*;
pub use route::*;
pub use trip::*;
