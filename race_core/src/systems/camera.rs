use crate::{Camera, Car};
use hecs::World;

/// Point the camera at the first car
pub fn follow_camera(world: &World, camera: &mut Camera) {
    if let Some((_entity, car)) = world.query::<&Car>().iter().next() {
        camera.follow(car);
    }
}
