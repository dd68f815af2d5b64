use crate::components::Controls;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub checkpoint_reached: Option<usize>,
    pub lap_completed: bool,
    pub took_off: bool,
    pub landed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Control samples waiting to be applied to the car
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<Controls>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, controls: Controls) {
        self.inputs.push(controls);
    }

    /// Most recent sample; older ones are superseded
    pub fn latest(&self) -> Option<Controls> {
        self.inputs.last().copied()
    }
}
