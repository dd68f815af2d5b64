use super::{Rgb, Surface};
use crate::{Camera, Car, Params, Track, Vector3};

/// Wireframe box edges: bottom face, top face, verticals
pub const CAR_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Highlighted edge marking the car's facing side
pub const FACING_EDGE: (usize, usize) = (1, 5);

/// Depth-graded segment color; nearer is brighter
pub fn segment_color(average_depth: f32, checkpoint: bool) -> Rgb {
    let brightness = ((255.0 - average_depth * 2.0) as i32).clamp(50, 255) as u8;
    if checkpoint {
        Rgb(brightness, brightness / 2, brightness / 2)
    } else {
        Rgb(brightness, brightness, brightness)
    }
}

/// Horizon line across the full screen width
pub fn draw_horizon<S: Surface>(surface: &mut S, camera: &Camera, screen_width: u32) {
    let y = camera.horizon_y as i32;
    surface.draw_line((0, y), (screen_width as i32, y), Rgb::BLUE, 1);
}

/// Draw every fully visible segment; returns how many were drawn.
///
/// A segment with any corner at or behind the near plane is skipped whole.
pub fn draw_track<S: Surface>(surface: &mut S, track: &Track, camera: &Camera) -> usize {
    let mut drawn = 0;

    for (i, segment) in track.segments().iter().enumerate() {
        let corners = segment.corners();
        let Some(projected) = camera.project_all(&corners) else {
            continue;
        };

        let average_depth = projected.iter().map(|p| p.depth).sum::<f32>() / 4.0;
        let color = segment_color(average_depth, track.is_checkpoint(i));
        let pixels = projected.map(|p| p.pixel());

        surface.draw_polygon(&pixels, color, 1);
        surface.draw_line(pixels[0], pixels[1], color, 2);
        surface.draw_line(pixels[2], pixels[3], color, 2);

        if segment.start.y > Params::PILLAR_MIN_HEIGHT {
            for corner in &corners[..2] {
                let ground = Vector3::new(corner.x, 0.0, corner.z);
                if let (Some(top), Some(bottom)) = (camera.project(*corner), camera.project(ground)) {
                    surface.draw_line(top.pixel(), bottom.pixel(), Rgb::GRAY, 1);
                }
            }
        }

        drawn += 1;
    }

    drawn
}

/// Draw the car wireframe; returns false if it was not visible
pub fn draw_car<S: Surface>(surface: &mut S, car: &Car, camera: &Camera) -> bool {
    let Some(projected) = camera.project_all(&car.body_corners()) else {
        return false;
    };
    let pixels = projected.map(|p| p.pixel());

    for (a, b) in CAR_EDGES {
        surface.draw_line(pixels[a], pixels[b], Rgb::RED, 2);
    }
    let (a, b) = FACING_EDGE;
    surface.draw_line(pixels[a], pixels[b], Rgb::YELLOW, 3);

    true
}
