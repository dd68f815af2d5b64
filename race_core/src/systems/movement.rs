use crate::{Car, Config, Controls, Events, Time, Track};
use hecs::World;

/// Run the physics tick for every car
pub fn drive_cars(world: &mut World, time: &Time, track: &Track, config: &Config, events: &mut Events) {
    for (_entity, (car, controls)) in world.query_mut::<(&mut Car, &Controls)>() {
        car.update(time.dt, controls, track, config, events);
    }
}
