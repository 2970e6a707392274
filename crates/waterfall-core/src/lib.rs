pub mod audio;
pub mod buoyancy;
pub mod camera;
pub mod config;
pub mod constants;
pub mod containment;
pub mod context;
pub mod error;
pub mod math;
pub mod physics;
pub mod sim;
pub mod steering;

pub use audio::*;
pub use buoyancy::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use containment::*;
pub use context::*;
pub use error::*;
pub use physics::*;
pub use sim::*;
pub use steering::*;
