//! Single-player race session and the frame loop that drives it

use hecs::{Entity, World};

use crate::error::{ConfigError, TrackError};
use crate::render::{
    draw_boost_bar, draw_car, draw_horizon, draw_track, hud_texts, HudText, Rect, Rgb, Surface,
    TextSink,
};
use crate::{
    spawn_car, step, Camera, Car, Config, Controls, Events, InputQueue, Params, Time, Track,
};

/// Why a session could not be created
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid track: {0}")]
    Track(#[from] TrackError),
}

/// One frame's worth of host input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub controls: Controls,
    pub quit: bool,
}

/// Supplies control state once per frame
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Supplies elapsed seconds since the previous frame
pub trait Clock {
    fn tick(&mut self) -> f32;
}

pub struct Session {
    pub world: World,
    pub car: Entity,
    pub track: Track,
    pub camera: Camera,
    pub config: Config,
    pub time: Time,
    pub events: Events,
    pub input_queue: InputQueue,
}

impl Session {
    /// Session on the built-in stunt course
    pub fn new(config: Config) -> Result<Self, SessionError> {
        let track = Track::stunt(config.track_width)?;
        Self::with_track(config, track)
    }

    pub fn with_track(config: Config, track: Track) -> Result<Self, SessionError> {
        if let Err(e) = config.validate() {
            log::warn!("Rejecting session config: {e}");
            return Err(e.into());
        }

        let mut world = World::new();
        let car = spawn_car(&mut world, &config);
        let mut camera = Camera::new(&config);
        if let Ok(car) = world.get::<&Car>(car) {
            camera.follow(&car);
        }

        Ok(Self {
            world,
            car,
            track,
            camera,
            config,
            time: Time::default(),
            events: Events::new(),
            input_queue: InputQueue::new(),
        })
    }

    /// Snapshot of the player's car
    pub fn car(&self) -> Car {
        self.world
            .get::<&Car>(self.car)
            .map(|car| *car)
            .unwrap_or_else(|_| Car::new(&self.config))
    }

    /// Input, physics, camera follow. `dt` is clamped to `Params::MAX_DT`.
    pub fn frame(&mut self, dt: f32, controls: Controls) {
        self.time.dt = dt.clamp(0.0, Params::MAX_DT);
        self.input_queue.push_input(controls);

        step(
            &mut self.world,
            &mut self.time,
            &self.track,
            &self.config,
            &mut self.events,
            &mut self.input_queue,
            &mut self.camera,
        );
    }

    /// Background, horizon, track, car and boost bar
    pub fn render<S: Surface>(&self, surface: &mut S) {
        let width = self.config.screen_width as i32;
        let height = self.config.screen_height as i32;
        surface.draw_filled_rect(Rect::new(0, 0, width, height), Rgb::BLACK);

        draw_horizon(surface, &self.camera, self.config.screen_width);
        draw_track(surface, &self.track, &self.camera);

        let car = self.car();
        draw_car(surface, &car, &self.camera);
        draw_boost_bar(surface, &car, &self.config);
    }

    pub fn hud(&self) -> Vec<HudText> {
        hud_texts(&self.car(), &self.config)
    }

    /// One iteration of the game loop; returns false once quit is requested.
    ///
    /// Quit is only honoured before the frame starts, so a frame is either
    /// fully simulated and drawn or not started.
    pub fn advance<I, C, S>(&mut self, input: &mut I, clock: &mut C, surface: &mut S) -> bool
    where
        I: InputSource,
        C: Clock,
        S: Surface + TextSink,
    {
        let dt = clock.tick();
        let sample = input.poll();
        if sample.quit {
            return false;
        }

        self.frame(dt, sample.controls);
        self.render(surface);
        for text in self.hud() {
            surface.draw_text(&text);
        }
        true
    }

    /// Run frames until the input source asks to quit; returns frames completed.
    pub fn run<I, C, S>(&mut self, input: &mut I, clock: &mut C, surface: &mut S) -> u64
    where
        I: InputSource,
        C: Clock,
        S: Surface + TextSink,
    {
        let mut frames = 0;
        while self.advance(input, clock, surface) {
            frames += 1;
        }
        log::debug!("Quit after {frames} frames");
        frames
    }
}
