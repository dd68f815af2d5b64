use crate::error::ConfigError;
use crate::params::Params;

/// How the per-tick impulses relate to the frame time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMode {
    /// Throttle, brake, boost, drag, steering and progress are fixed
    /// impulses per tick; only gravity and the lap timer use `dt`.
    #[default]
    PerTick,
    /// Every impulse is scaled by `dt * TARGET_FPS`, so a 60 Hz frame
    /// behaves exactly like `PerTick`.
    DtScaled,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: u32,
    pub screen_height: u32,
    pub gravity: f32,
    pub friction: f32,
    pub air_resistance: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub brake_force: f32,
    pub boost_power: f32,
    pub boost_cost: f32,
    pub boost_recharge: f32,
    pub max_boost: f32,
    pub turn_speed: f32,
    pub min_steer_speed: f32,
    pub distance_scale: f32,
    pub ground_tolerance: f32,
    pub track_width: f32,
    pub fov: f32,
    pub near_plane: f32,
    pub integration: IntegrationMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            gravity: Params::GRAVITY,
            friction: Params::FRICTION,
            air_resistance: Params::AIR_RESISTANCE,
            max_speed: Params::MAX_SPEED,
            acceleration: Params::ACCELERATION,
            brake_force: Params::BRAKE_FORCE,
            boost_power: Params::BOOST_POWER,
            boost_cost: Params::BOOST_COST,
            boost_recharge: Params::BOOST_RECHARGE,
            max_boost: Params::MAX_BOOST,
            turn_speed: Params::TURN_SPEED,
            min_steer_speed: Params::MIN_STEER_SPEED,
            distance_scale: Params::DISTANCE_SCALE,
            ground_tolerance: Params::GROUND_TOLERANCE,
            track_width: Params::TRACK_WIDTH,
            fov: Params::FOV,
            near_plane: Params::NEAR_PLANE,
            integration: IntegrationMode::PerTick,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning, but every impulse scaled by frame time
    pub fn dt_scaled() -> Self {
        Self {
            integration: IntegrationMode::DtScaled,
            ..Self::default()
        }
    }

    /// Multiplier applied to per-tick impulses for a frame of length `dt`
    pub fn tick_scale(&self, dt: f32) -> f32 {
        match self.integration {
            IntegrationMode::PerTick => 1.0,
            IntegrationMode::DtScaled => dt * Params::TARGET_FPS,
        }
    }

    /// Clamp velocity to the allowed range (reverse capped at half)
    pub fn clamp_velocity(&self, velocity: f32) -> f32 {
        velocity.clamp(-self.max_speed / 2.0, self.max_speed)
    }

    /// Screen row of the horizon line
    pub fn horizon_y(&self) -> f32 {
        (self.screen_height / 2) as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        for (name, value) in [
            ("friction", self.friction),
            ("air_resistance", self.air_resistance),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidDrag { name, value });
            }
        }
        if !(self.max_boost > 0.0) {
            return Err(ConfigError::InvalidMaxBoost(self.max_boost));
        }
        if !(self.fov > 0.0) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::InvalidScreen(
                self.screen_width,
                self.screen_height,
            ));
        }
        Ok(())
    }
}
