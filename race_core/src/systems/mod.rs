pub mod camera;
pub mod input;
pub mod movement;

pub use camera::*;
pub use input::*;
pub use movement::*;
