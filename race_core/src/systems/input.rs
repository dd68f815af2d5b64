use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply the latest queued control sample to every car
pub fn ingest_controls(world: &mut World, input_queue: &mut InputQueue) {
    if let Some(latest) = input_queue.latest() {
        for (_entity, controls) in world.query_mut::<&mut Controls>() {
            *controls = latest;
        }
    }

    // Clear processed inputs
    input_queue.clear();
}
