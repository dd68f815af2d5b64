//! WebGPU client for the stunt racer
//!
//! Runs a `race_core::Session` in the browser and draws its wireframe with
//! wgpu 24 ("webgpu" feature). Input mapping, frame timing and tessellation
//! are target-independent and tested natively.

mod clock;
mod input;
mod mesh;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use clock::FrameClock;
pub use input::KeyState;
pub use mesh::{tessellate, Vertex};

#[cfg(target_arch = "wasm32")]
pub use client::*;
