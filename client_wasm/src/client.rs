//! Browser entry points
//!
//! JavaScript owns the `requestAnimationFrame` loop and the DOM listeners;
//! each callback forwards into the single [`Client`] held here.

use std::cell::RefCell;

use race_core::render::DrawList;
use race_core::{Config, Session};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::clock::FrameClock;
use crate::input::KeyState;
use crate::overlay::HudOverlay;
use crate::renderer::Renderer;

pub struct Client {
    session: Session,
    keys: KeyState,
    clock: FrameClock,
    draw_list: DrawList,
    renderer: Renderer,
    overlay: HudOverlay,
    running: bool,
}

impl Client {
    pub async fn new(canvas: HtmlCanvasElement, hud: HtmlCanvasElement) -> Result<Self, JsValue> {
        let config = Config::new();
        let (width, height) = (config.screen_width, config.screen_height);
        let session = Session::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = Renderer::new(canvas, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e))?;
        let overlay = HudOverlay::new(&hud, width, height)?;

        log::info!(
            "Session ready: {} segments, {} checkpoints",
            session.track.segment_count(),
            session.track.checkpoints().len()
        );

        Ok(Self {
            session,
            keys: KeyState::new(),
            clock: FrameClock::new(),
            draw_list: DrawList::new(),
            renderer,
            overlay,
            running: true,
        })
    }

    /// Simulate and draw one frame; returns false once the player has quit
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        if !self.running {
            return Ok(false);
        }

        self.clock.set_now(now_ms);
        self.draw_list.clear();
        if !self
            .session
            .advance(&mut self.keys, &mut self.clock, &mut self.draw_list)
        {
            log::info!("Quit requested on lap {}", self.session.car().current_lap);
            self.running = false;
            return Ok(false);
        }

        self.renderer
            .draw(&self.draw_list)
            .map_err(|e| JsValue::from_str(&e))?;
        self.overlay.draw(&self.draw_list.texts)?;
        Ok(true)
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> Result<R, JsValue>) -> Result<R, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// `canvas` receives the WebGPU wireframe, `hud` is a transparent 2D canvas on top
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, hud: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let client = Client::new(canvas, hud).await?;
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    })
}

/// Returns true if the key was handled and its default action should be prevented
#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<bool, JsValue> {
    with_client(|client| Ok(client.keys.handle_key_down(key)))
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<bool, JsValue> {
    with_client(|client| Ok(client.keys.handle_key_up(key)))
}

/// Window lost focus; no key-up events will arrive for held keys
#[wasm_bindgen]
pub fn release_keys() -> Result<(), JsValue> {
    with_client(|client| {
        client.keys.release_all();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
    with_client(|client| {
        client.renderer.resize(width, height);
        Ok(())
    })
}

/// Call from `requestAnimationFrame`; keep scheduling while it returns true
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) -> Result<bool, JsValue> {
    with_client(|client| client.frame(now_ms))
}
