use race_core::render::DrawList;
use race_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DT: f32 = 1.0 / 60.0;

fn stunt_track(config: &Config) -> Track {
    Track::stunt(config.track_width).unwrap()
}

/// Large flat loop: a car on it never leaves the ground
fn flat_track() -> Track {
    let points = [
        Vector3::ZERO,
        Vector3::new(0.0, 0.0, 1000.0),
        Vector3::new(1000.0, 0.0, 1000.0),
        Vector3::new(1000.0, 0.0, 0.0),
    ];
    Track::from_points(&points, 8.0).unwrap()
}

fn random_controls(rng: &mut StdRng) -> Controls {
    Controls {
        throttle: rng.gen_bool(0.7),
        brake: rng.gen_bool(0.15),
        boost: rng.gen_bool(0.3),
        left: rng.gen_bool(0.1),
        right: rng.gen_bool(0.1),
    }
}

#[test]
fn test_throttle_for_one_second() {
    let config = Config::new();
    let track = stunt_track(&config);
    let mut car = Car::new(&config);
    let mut events = Events::new();

    for _ in 0..60 {
        let before = car.progress;
        car.update(DT, &Controls::throttle(), &track, &config, &mut events);
        assert!(car.progress > before, "progress must advance monotonically");
        assert!(car.velocity <= config.max_speed);
    }

    assert!(car.velocity > 5.0, "velocity should rise toward max, got {}", car.velocity);
}

#[test]
fn test_boost_drains_to_exactly_zero_in_100_ticks() {
    let config = Config::new();
    let track = flat_track();
    let mut car = Car::new(&config);
    let mut events = Events::new();
    let boost = Controls {
        boost: true,
        ..Controls::new()
    };

    let mut expected_velocity = 0.0_f32;
    for _ in 0..100 {
        car.update(DT, &boost, &track, &config, &mut events);
        assert!(car.on_ground);
        expected_velocity = ((expected_velocity + config.boost_power) * config.friction)
            .min(config.max_speed);
    }

    assert_eq!(car.boost, 0.0);
    assert!((car.velocity - expected_velocity).abs() < 1e-4);

    // Empty tank: the next request recharges instead
    car.update(DT, &boost, &track, &config, &mut events);
    assert!(car.boost > 0.0);
}

#[test]
fn test_point_inside_near_plane_is_not_renderable() {
    let config = Config::new();
    let mut camera = Camera::new(&config);
    camera.position = Vector3::ZERO;
    camera.rotation = 0.0;

    assert!(camera.project(Vector3::new(3.0, 1.0, 0.05)).is_none());
    assert!(camera.project(Vector3::new(3.0, 1.0, 0.5)).is_some());
}

#[test]
fn test_zero_length_segment_corners_are_finite() {
    let p = Vector3::new(4.0, 2.0, -1.0);
    let segment = TrackSegment::new(p, p, 8.0);
    let corners = segment.corners();

    for corner in corners {
        assert!(corner.is_finite());
        assert!((corner.x - p.x).abs() == 8.0);
        assert_eq!(corner.z, p.z);
    }
}

#[test]
fn test_stunt_track_is_closed_and_contiguous() {
    let track = stunt_track(&Config::new());
    let segments = track.segments();
    assert_eq!(segments[0].start, segments[segments.len() - 1].end);
    for i in 0..segments.len() - 1 {
        assert_eq!(segments[i].end, segments[i + 1].start);
    }
    assert_eq!(track.checkpoints()[0], 0);
}

#[test]
fn test_random_driving_keeps_invariants() {
    let config = Config::new();
    let track = stunt_track(&config);
    let mut car = Car::new(&config);
    let mut events = Events::new();
    let mut rng = StdRng::seed_from_u64(12345);

    for tick in 0..5000 {
        let controls = random_controls(&mut rng);
        let before = car;
        events.clear();

        car.update(DT, &controls, &track, &config, &mut events);

        // Velocity clamp
        assert!(
            car.velocity >= -config.max_speed / 2.0 && car.velocity <= config.max_speed,
            "tick {tick}: velocity {}",
            car.velocity
        );

        // Progress wraps
        assert!((0.0..1.0).contains(&car.progress), "tick {tick}");

        // Boost drains only when consumed, otherwise recharges up to max
        let consumed = controls.boost && before.boost > 0.0 && before.on_ground;
        if consumed {
            assert!(car.boost < before.boost, "tick {tick}: boost did not drain");
        } else if before.boost < config.max_boost {
            assert!(car.boost > before.boost, "tick {tick}: boost did not recharge");
        } else {
            assert_eq!(car.boost, config.max_boost);
        }
        assert!(car.boost >= 0.0 && car.boost <= config.max_boost);

        // Ground snap
        if car.on_ground {
            let pose = track.get_position_on_track(car.progress);
            assert_eq!(car.position.y, pose.position.y, "tick {tick}");
            assert_eq!(car.vertical_velocity, 0.0);
        }

        // Lap count never decreases and moves in single steps
        assert!(car.current_lap >= before.current_lap);
        assert!(car.current_lap - before.current_lap <= 1);
        assert_eq!(
            car.current_lap > before.current_lap,
            events.lap_completed,
            "tick {tick}"
        );
    }
}

#[test]
fn test_laps_count_full_circuits() {
    let mut session = Session::new(Config::new()).unwrap();
    let mut laps_completed = 0;
    let mut wraps = 0;

    for _ in 0..1200 {
        let before = session.car().progress;
        session.frame(DT, Controls::throttle());
        if session.car().progress < before {
            wraps += 1;
        }
        if session.events.lap_completed {
            laps_completed += 1;
        }
    }

    let car = session.car();
    assert!(wraps >= 2, "throttle for 20s should lap the course, got {wraps}");
    assert_eq!(laps_completed, wraps);
    assert_eq!(car.current_lap, 1 + laps_completed);
}

#[test]
fn test_session_renders_every_frame() {
    let mut session = Session::new(Config::new()).unwrap();
    let mut list = DrawList::new();

    for _ in 0..120 {
        session.frame(DT, Controls::throttle());
        list.clear();
        session.render(&mut list);
        // Background and horizon are always present
        assert!(list.commands.len() >= 2);
    }

    let hud = session.hud();
    assert!(hud.iter().any(|t| t.text.starts_with("Lap: ")));
}
