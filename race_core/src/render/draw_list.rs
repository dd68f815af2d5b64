use super::{HudText, Pixel, Rect, Rgb, Surface, TextSink};

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon {
        points: Vec<Pixel>,
        color: Rgb,
        width: u32,
    },
    Line {
        from: Pixel,
        to: Pixel,
        color: Rgb,
        width: u32,
    },
    FilledRect {
        rect: Rect,
        color: Rgb,
    },
}

/// Surface that records commands for later playback
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
    pub texts: Vec<HudText>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.texts.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Line { .. }))
    }

    pub fn count_color(&self, color: Rgb) -> usize {
        self.commands
            .iter()
            .filter(|cmd| match cmd {
                DrawCmd::Polygon { color: c, .. }
                | DrawCmd::Line { color: c, .. }
                | DrawCmd::FilledRect { color: c, .. } => *c == color,
            })
            .count()
    }
}

impl Surface for DrawList {
    fn draw_polygon(&mut self, points: &[Pixel], color: Rgb, width: u32) {
        self.commands.push(DrawCmd::Polygon {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn draw_line(&mut self, from: Pixel, to: Pixel, color: Rgb, width: u32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCmd::FilledRect { rect, color });
    }
}

impl TextSink for DrawList {
    fn draw_text(&mut self, text: &HudText) {
        self.texts.push(text.clone());
    }
}
