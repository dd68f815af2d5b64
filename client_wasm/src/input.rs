//! Keyboard input handling

use race_core::{Controls, FrameInput, InputSource};

/// Held-key state, updated from DOM key events and sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    controls: Controls,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event; returns true if the key is one of ours
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.quit = true;
            return true;
        }
        self.set(key, true)
    }

    /// Handle key up event
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Release everything, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        self.controls = Controls::new();
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn set(&mut self, key: &str, down: bool) -> bool {
        let slot = match key {
            "ArrowUp" => &mut self.controls.throttle,
            "ArrowDown" => &mut self.controls.brake,
            "ArrowLeft" => &mut self.controls.left,
            "ArrowRight" => &mut self.controls.right,
            " " | "Spacebar" => &mut self.controls.boost,
            _ => return false,
        };
        *slot = down;
        true
    }
}

impl InputSource for KeyState {
    fn poll(&mut self) -> FrameInput {
        FrameInput {
            controls: self.controls,
            quit: self.quit,
        }
    }
}
