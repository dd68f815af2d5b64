pub mod camera;
pub mod components;
pub mod config;
pub mod error;
pub mod math;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;
pub mod track;

pub use camera::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use math::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use track::*;

use hecs::World;
use systems::*;

/// Advance the race simulation by one tick of `time.dt`
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    track: &Track,
    config: &Config,
    events: &mut Events,
    input_queue: &mut InputQueue,
    camera: &mut Camera,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to car controls)
    ingest_controls(world, input_queue);

    // 2. Car physics against the track
    drive_cars(world, time, track, config, events);

    // 3. Camera follows the car
    follow_camera(world, camera);

    // Update time
    time.now += time.dt;
}

/// Helper to create the player's car on the start line
pub fn spawn_car(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Car::new(config), Controls::new()))
}
