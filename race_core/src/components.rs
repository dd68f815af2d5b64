use crate::config::{Config, IntegrationMode};
use crate::math::{rotate_xz, wrap_progress, Vector3};
use crate::params::Params;
use crate::resources::Events;
use crate::track::Track;

/// Control intent for a car, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub throttle: bool,
    pub brake: bool,
    pub boost: bool,
    pub left: bool,
    pub right: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn throttle() -> Self {
        Self {
            throttle: true,
            ..Self::default()
        }
    }
}

/// Car component - a vehicle riding the track centerline
///
/// `progress` is the authoritative horizontal position; `position.x/z`
/// are copied from the track every tick and only `position.y` is
/// integrated.
#[derive(Debug, Clone, Copy)]
pub struct Car {
    pub progress: f32,
    pub position: Vector3,
    pub velocity: f32,
    pub vertical_velocity: f32,
    pub heading: f32, // radians, from the current segment
    pub on_ground: bool,
    pub boost: f32,
    pub lap_time: f32, // seconds
    pub current_lap: u32,
    pub last_checkpoint: Option<usize>,
}

impl Car {
    /// A car parked on the start line, which counts as checkpoint 0
    pub fn new(config: &Config) -> Self {
        Self {
            progress: 0.0,
            position: Vector3::ZERO,
            velocity: 0.0,
            vertical_velocity: 0.0,
            heading: 0.0,
            on_ground: true,
            boost: config.max_boost,
            lap_time: 0.0,
            current_lap: 1,
            last_checkpoint: Some(0),
        }
    }

    /// Advance one tick. Stage order matters: each stage reads the
    /// velocity left by the previous one.
    pub fn update(
        &mut self,
        dt: f32,
        controls: &Controls,
        track: &Track,
        config: &Config,
        events: &mut Events,
    ) {
        let k = config.tick_scale(dt);

        // 1. Throttle and brake
        if controls.throttle {
            self.velocity += config.acceleration * k;
        }
        if controls.brake {
            self.velocity -= config.brake_force * k;
        }

        // 2. Boost drains or recharges, never both in one tick
        if controls.boost && self.boost > 0.0 && self.on_ground {
            self.velocity += config.boost_power * k;
            self.boost = (self.boost - config.boost_cost * k).max(0.0);
        } else {
            self.boost = (self.boost + config.boost_recharge * k).min(config.max_boost);
        }

        // 3. Drag
        let drag = if self.on_ground {
            config.friction
        } else {
            config.air_resistance
        };
        self.velocity *= match config.integration {
            IntegrationMode::PerTick => drag,
            IntegrationMode::DtScaled => drag.powf(k),
        };

        // 4. Speed limits
        self.velocity = config.clamp_velocity(self.velocity);

        // 5. Steering nudges progress, with authority growing with speed
        let speed = self.velocity.abs();
        if speed > config.min_steer_speed {
            let nudge = config.turn_speed * speed / config.max_speed * k;
            if controls.left {
                self.progress -= nudge;
            }
            if controls.right {
                self.progress += nudge;
            }
        }

        // 6. Advance along the loop
        self.progress = wrap_progress(self.progress + self.velocity * config.distance_scale * k);

        // 7. Track pose
        let pose = track.get_position_on_track(self.progress);
        self.heading = pose.heading;

        // 8. One-sided ground contact
        let was_on_ground = self.on_ground;
        if self.position.y > pose.position.y + config.ground_tolerance {
            self.on_ground = false;
            self.vertical_velocity -= config.gravity * dt;
        } else {
            self.on_ground = true;
            self.position.y = pose.position.y;
            self.vertical_velocity = 0.0;
        }
        if was_on_ground && !self.on_ground {
            events.took_off = true;
            log::debug!("Airborne at progress {:.3}", self.progress);
        } else if !was_on_ground && self.on_ground {
            events.landed = true;
            log::debug!("Landed at progress {:.3}", self.progress);
        }

        // 9. Vertical integration; horizontal position rides the centerline
        self.position.y += self.vertical_velocity * k;
        self.position.x = pose.position.x;
        self.position.z = pose.position.z;

        // 10. Checkpoints and laps
        let segment = pose.segment_index;
        if track.is_checkpoint(segment) && self.last_checkpoint != Some(segment) {
            self.last_checkpoint = Some(segment);
            events.checkpoint_reached = Some(segment);
            if segment == 0 && self.current_lap > 0 {
                self.current_lap += 1;
                events.lap_completed = true;
                log::info!(
                    "Lap {} started at {:.2}s",
                    self.current_lap,
                    self.lap_time
                );
            }
        }

        // 11. Race clock
        self.lap_time += dt;
    }

    /// Corners of the wireframe body: bottom face 0..4, top face 4..8
    pub fn body_corners(&self) -> [Vector3; 8] {
        let w = Params::CAR_HALF_WIDTH;
        let l = Params::CAR_HALF_LENGTH;
        let h = Params::CAR_HEIGHT;
        let local = [
            Vector3::new(-w, 0.0, -l),
            Vector3::new(w, 0.0, -l),
            Vector3::new(w, 0.0, l),
            Vector3::new(-w, 0.0, l),
            Vector3::new(-w, h, -l),
            Vector3::new(w, h, -l),
            Vector3::new(w, h, l),
            Vector3::new(-w, h, l),
        ];

        local.map(|corner| {
            let (x, z) = rotate_xz(corner.x, corner.z, self.heading);
            self.position + Vector3::new(x, corner.y, z)
        })
    }

    pub fn speed(&self) -> f32 {
        self.velocity.abs()
    }

    /// Boost as a fraction of `max_boost`
    pub fn boost_fraction(&self, config: &Config) -> f32 {
        (self.boost / config.max_boost).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Car, Track, Config, Events) {
        let config = Config::new();
        let track = Track::stunt(config.track_width).unwrap();
        (Car::new(&config), track, config, Events::new())
    }

    fn flat_track() -> Track {
        let points = [
            Vector3::ZERO,
            Vector3::new(0.0, 0.0, 500.0),
            Vector3::new(500.0, 0.0, 500.0),
            Vector3::new(500.0, 0.0, 0.0),
        ];
        Track::from_points(&points, 8.0).unwrap()
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_throttle_accelerates_with_friction() {
        let (mut car, track, config, mut events) = setup();
        car.update(DT, &Controls::throttle(), &track, &config, &mut events);
        assert!((car.velocity - 0.3 * 0.98).abs() < 1e-6);
        assert!(car.progress > 0.0);
    }

    #[test]
    fn test_brake_reverses_and_clamps() {
        let (mut car, track, config, mut events) = setup();
        let brake = Controls {
            brake: true,
            ..Controls::new()
        };
        for _ in 0..200 {
            car.update(DT, &brake, &track, &config, &mut events);
            assert!(car.velocity >= -config.max_speed / 2.0);
        }
        assert!(car.velocity < 0.0);
        assert!((0.0..1.0).contains(&car.progress));
    }

    #[test]
    fn test_boost_requires_ground() {
        let (mut car, track, config, mut events) = setup();
        car.on_ground = false;
        car.position.y = 50.0;
        car.boost = 50.0;
        let boost = Controls {
            boost: true,
            ..Controls::new()
        };
        car.update(DT, &boost, &track, &config, &mut events);
        assert_eq!(car.velocity, 0.0);
        assert!((car.boost - 50.1).abs() < 1e-4);
    }

    #[test]
    fn test_boost_drains_and_recharges() {
        let (mut car, track, config, mut events) = setup();
        let boost = Controls {
            boost: true,
            ..Controls::new()
        };
        car.update(DT, &boost, &track, &config, &mut events);
        assert_eq!(car.boost, 99.0);
        car.update(DT, &Controls::new(), &track, &config, &mut events);
        assert!((car.boost - 99.1).abs() < 1e-4);
    }

    #[test]
    fn test_boost_never_goes_negative() {
        let (mut car, track, config, mut events) = setup();
        car.boost = 0.3;
        let boost = Controls {
            boost: true,
            ..Controls::new()
        };
        car.update(DT, &boost, &track, &config, &mut events);
        assert_eq!(car.boost, 0.0);
        // Empty: recharges instead of draining
        car.update(DT, &boost, &track, &config, &mut events);
        assert!(car.boost > 0.0);
    }

    #[test]
    fn test_steering_needs_speed() {
        let (mut car, track, config, mut events) = setup();
        car.progress = 0.5;
        let left = Controls {
            left: true,
            ..Controls::new()
        };
        car.update(DT, &left, &track, &config, &mut events);
        assert_eq!(car.progress, 0.5);

        car.velocity = config.max_speed;
        let before = car.progress;
        car.update(DT, &left, &track, &config, &mut events);
        // Left nudge (0.05 * 0.98) outweighs forward travel (14.7 * 0.001)
        assert!(car.progress < before);
    }

    #[test]
    fn test_steering_left_wraps_below_zero() {
        let (mut car, track, config, mut events) = setup();
        car.velocity = -config.max_speed / 2.0;
        let left = Controls {
            left: true,
            ..Controls::new()
        };
        car.update(DT, &left, &track, &config, &mut events);
        assert!(car.progress > 0.9 && car.progress < 1.0);
    }

    #[test]
    fn test_airborne_falls_under_gravity() {
        let (mut car, track, config, mut events) = setup();
        car.position.y = 10.0;
        car.update(DT, &Controls::new(), &track, &config, &mut events);
        assert!(!car.on_ground);
        assert!(events.took_off);
        assert!((car.vertical_velocity + config.gravity * DT).abs() < 1e-6);
        assert!(car.position.y < 10.0);
    }

    #[test]
    fn test_ground_snap() {
        let (mut car, track, config, mut events) = setup();
        car.position.y = 0.3; // within tolerance
        car.vertical_velocity = -1.0;
        car.update(DT, &Controls::new(), &track, &config, &mut events);
        let pose = track.get_position_on_track(car.progress);
        assert!(car.on_ground);
        assert_eq!(car.position.y, pose.position.y);
        assert_eq!(car.vertical_velocity, 0.0);
    }

    #[test]
    fn test_horizontal_position_follows_track() {
        let (mut car, track, config, mut events) = setup();
        car.velocity = 10.0;
        for _ in 0..30 {
            car.update(DT, &Controls::throttle(), &track, &config, &mut events);
            let pose = track.get_position_on_track(car.progress);
            assert_eq!(car.position.x, pose.position.x);
            assert_eq!(car.position.z, pose.position.z);
            assert_eq!(car.heading, pose.heading);
        }
    }

    #[test]
    fn test_lap_increments_on_return_to_start() {
        let (mut car, track, config, mut events) = setup();
        car.last_checkpoint = Some(45);
        car.progress = 0.999;
        car.velocity = 5.0;
        car.update(DT, &Controls::new(), &track, &config, &mut events);
        assert_eq!(car.last_checkpoint, Some(0));
        assert_eq!(car.current_lap, 2);
        assert!(events.lap_completed);
        assert_eq!(events.checkpoint_reached, Some(0));
    }

    #[test]
    fn test_start_line_does_not_count_as_lap() {
        let (mut car, track, config, mut events) = setup();
        car.update(DT, &Controls::new(), &track, &config, &mut events);
        assert_eq!(car.current_lap, 1);
        assert!(!events.lap_completed);
    }

    #[test]
    fn test_lap_time_accumulates_dt() {
        let (mut car, track, config, mut events) = setup();
        for _ in 0..30 {
            car.update(0.02, &Controls::new(), &track, &config, &mut events);
        }
        assert!((car.lap_time - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_dt_scaled_matches_per_tick_at_target_rate() {
        let (mut a, _, per_tick, mut events) = setup();
        let track = flat_track();
        let scaled = Config::dt_scaled();
        let mut b = Car::new(&scaled);
        let controls = Controls {
            throttle: true,
            boost: true,
            ..Controls::new()
        };
        for _ in 0..20 {
            a.update(DT, &controls, &track, &per_tick, &mut events);
            b.update(DT, &controls, &track, &scaled, &mut events);
        }
        assert!((a.velocity - b.velocity).abs() < 1e-3);
        assert!((a.progress - b.progress).abs() < 1e-4);
        assert!((a.boost - b.boost).abs() < 1e-3);
    }

    #[test]
    fn test_dt_scaled_is_frame_rate_independent() {
        let track = flat_track();
        let mut events = Events::new();
        let config = Config::dt_scaled();
        let mut fast = Car::new(&config);
        let mut slow = Car::new(&config);
        for _ in 0..60 {
            fast.update(1.0 / 60.0, &Controls::throttle(), &track, &config, &mut events);
        }
        for _ in 0..30 {
            slow.update(1.0 / 30.0, &Controls::throttle(), &track, &config, &mut events);
        }
        // Discretization differs slightly, the scale does not
        assert!((fast.velocity - slow.velocity).abs() < 0.5);
    }

    #[test]
    fn test_body_corners_follow_position_and_heading() {
        let (mut car, _, _, _) = setup();
        car.position = Vector3::new(10.0, 2.0, 5.0);
        let corners = car.body_corners();
        assert_eq!(corners[0], Vector3::new(8.5, 2.0, 2.0));
        assert_eq!(corners[6], Vector3::new(11.5, 4.0, 8.0));

        car.heading = std::f32::consts::PI;
        let corners = car.body_corners();
        assert!((corners[0].x - 11.5).abs() < 1e-4);
        assert!((corners[0].z - 8.0).abs() < 1e-4);
    }
}
