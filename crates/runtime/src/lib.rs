pub mod app;
pub mod controller;
pub mod dispatch;
pub mod notices;
pub mod scheduling;
pub mod service;

#[cfg(test)]
mod mock;

pub use app::*;
pub use controller::*;
pub use dispatch::*;
pub use notices::*;
pub use scheduling::*;
pub use service::*;
