//! Tessellation of recorded draw commands into GPU triangles
//!
//! Everything is emitted in pixel space; the shader maps pixels to clip
//! space with the screen size uniform.

use race_core::render::{DrawCmd, DrawList, Pixel, Rect, Rgb};

/// Vertex data for the wireframe pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Triangle list for a whole frame
pub fn tessellate(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.commands.len() * 6);

    for cmd in &list.commands {
        match cmd {
            DrawCmd::Polygon {
                points,
                color,
                width,
            } => push_outline(&mut vertices, points, *color, *width),
            DrawCmd::Line {
                from,
                to,
                color,
                width,
            } => push_line(&mut vertices, *from, *to, *color, *width),
            DrawCmd::FilledRect { rect, color } => push_rect(&mut vertices, *rect, *color),
        }
    }

    vertices
}

/// Closed outline, one thick line per edge
fn push_outline(out: &mut Vec<Vertex>, points: &[Pixel], color: Rgb, width: u32) {
    if points.len() < 2 {
        return;
    }
    for (i, from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        push_line(out, *from, to, color, width);
    }
}

/// Line as a quad `width` pixels thick
fn push_line(out: &mut Vec<Vertex>, from: Pixel, to: Pixel, color: Rgb, width: u32) {
    let color = color.to_f32();
    let half = width.max(1) as f32 / 2.0;
    let (x0, y0) = (from.0 as f32, from.1 as f32);
    let (x1, y1) = (to.0 as f32, to.1 as f32);

    let (dx, dy) = (x1 - x0, y1 - y0);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        // Degenerate line still covers its pixel
        push_quad(
            out,
            [
                (x0 - half, y0 - half),
                (x0 + half, y0 - half),
                (x0 + half, y0 + half),
                (x0 - half, y0 + half),
            ],
            color,
        );
        return;
    }

    let (nx, ny) = (-dy / len * half, dx / len * half);
    push_quad(
        out,
        [
            (x0 + nx, y0 + ny),
            (x1 + nx, y1 + ny),
            (x1 - nx, y1 - ny),
            (x0 - nx, y0 - ny),
        ],
        color,
    );
}

fn push_rect(out: &mut Vec<Vertex>, rect: Rect, color: Rgb) {
    let corners = rect.corners().map(|(x, y)| (x as f32, y as f32));
    push_quad(out, corners, color.to_f32());
}

/// Two triangles sharing the 0-2 diagonal
fn push_quad(out: &mut Vec<Vertex>, corners: [(f32, f32); 4], color: [f32; 3]) {
    for i in [0, 1, 2, 2, 3, 0] {
        let (x, y) = corners[i];
        out.push(Vertex::new(x, y, color));
    }
}
