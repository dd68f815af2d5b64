//! HUD text on a 2D canvas stacked over the WebGPU canvas

use race_core::render::{HudText, Rgb, TextSize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct HudOverlay {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    /// Canvas pixels per logical screen pixel
    scale: (f64, f64),
}

impl HudOverlay {
    pub fn new(
        canvas: &HtmlCanvasElement,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_baseline("top");

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        Ok(Self {
            ctx,
            width,
            height,
            scale: (width / screen_width as f64, height / screen_height as f64),
        })
    }

    pub fn draw(&self, texts: &[HudText]) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        for text in texts {
            let px = match text.size {
                TextSize::Large => 36.0,
                TextSize::Small => 24.0,
            } * self.scale.1;
            self.ctx.set_font(&format!("{px:.0}px monospace"));
            self.ctx.set_fill_style_str(&css_color(text.color));
            self.ctx.fill_text(
                &text.text,
                text.x as f64 * self.scale.0,
                text.y as f64 * self.scale.1,
            )?;
        }
        Ok(())
    }
}

fn css_color(Rgb(r, g, b): Rgb) -> String {
    format!("rgb({r}, {g}, {b})")
}
