//! Wireframe renderer
//!
//! The core never touches pixels: it issues polygon, line and filled-rect
//! commands to a [`Surface`] and hands positioned HUD strings to a
//! [`TextSink`]. The host decides how to rasterize both.

mod draw_list;
mod hud;
mod scene;

pub use draw_list::*;
pub use hud::*;
pub use scene::*;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 100, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const GRAY: Rgb = Rgb(100, 100, 100);

    /// Normalized `[r, g, b]` for GPU upload
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Integer pixel coordinate
pub type Pixel = (i32, i32);

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Corners clockwise from top-left
    pub fn corners(&self) -> [Pixel; 4] {
        [
            (self.x, self.y),
            (self.x + self.w, self.y),
            (self.x + self.w, self.y + self.h),
            (self.x, self.y + self.h),
        ]
    }
}

/// Drawing capabilities the renderer needs from the host
pub trait Surface {
    /// Closed outline through `points`
    fn draw_polygon(&mut self, points: &[Pixel], color: Rgb, width: u32);
    fn draw_line(&mut self, from: Pixel, to: Pixel, color: Rgb, width: u32);
    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb);
}
