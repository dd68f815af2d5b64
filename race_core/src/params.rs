/// Game tuning parameters for the stunt racer
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    // Car physics (per-tick impulses unless noted)
    pub const GRAVITY: f32 = 0.3; // scaled by dt
    pub const FRICTION: f32 = 0.98;
    pub const AIR_RESISTANCE: f32 = 0.99;
    pub const MAX_SPEED: f32 = 15.0;
    pub const ACCELERATION: f32 = 0.3;
    pub const BRAKE_FORCE: f32 = 0.5;
    pub const BOOST_POWER: f32 = 1.5;
    pub const TURN_SPEED: f32 = 0.05;
    pub const MIN_STEER_SPEED: f32 = 0.5;
    pub const DISTANCE_SCALE: f32 = 0.001; // speed units -> progress per tick
    pub const GROUND_TOLERANCE: f32 = 0.5;

    // Boost
    pub const MAX_BOOST: f32 = 100.0;
    pub const BOOST_COST: f32 = 1.0;
    pub const BOOST_RECHARGE: f32 = 0.1;

    // Car body (wireframe box)
    pub const CAR_HALF_WIDTH: f32 = 1.5;
    pub const CAR_HALF_LENGTH: f32 = 3.0;
    pub const CAR_HEIGHT: f32 = 2.0;

    // Track
    pub const TRACK_WIDTH: f32 = 8.0;
    pub const CHECKPOINT_DIVISIONS: usize = 5;
    pub const PILLAR_MIN_HEIGHT: f32 = 2.0;

    // Camera
    pub const FOV: f32 = 400.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const CAMERA_HEIGHT_OFFSET: f32 = -5.0;
    pub const CAMERA_TRAIL_DISTANCE: f32 = 20.0;

    // Timing
    pub const TARGET_FPS: f32 = 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
