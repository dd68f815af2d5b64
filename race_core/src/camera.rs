//! Chase camera with a yaw-only perspective projection

use crate::components::Car;
use crate::config::Config;
use crate::math::{rotate_xz, Vector3};
use crate::params::Params;

/// A point projected onto the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Camera-space depth along the view axis
    pub depth: f32,
}

impl ScreenPoint {
    /// Integer pixel coordinates (truncated toward zero)
    pub fn pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Camera struct
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vector3,
    /// Yaw in radians
    pub rotation: f32,
    pub fov: f32,
    pub horizon_y: f32,
    pub near_plane: f32,
    screen_center_x: f32,
}

impl Camera {
    pub fn new(config: &Config) -> Self {
        Self {
            position: Vector3::new(
                0.0,
                Params::CAMERA_HEIGHT_OFFSET,
                -Params::CAMERA_TRAIL_DISTANCE,
            ),
            rotation: 0.0,
            fov: config.fov,
            horizon_y: config.horizon_y(),
            near_plane: config.near_plane,
            screen_center_x: (config.screen_width / 2) as f32,
        }
    }

    /// Project a world point, or `None` if it is at or behind the near plane
    pub fn project(&self, point: Vector3) -> Option<ScreenPoint> {
        let d = point - self.position;
        let (x, z) = rotate_xz(d.x, d.z, self.rotation);

        if z > self.near_plane {
            let scale = self.fov / z;
            Some(ScreenPoint {
                x: self.screen_center_x + x * scale,
                y: self.horizon_y - d.y * scale,
                depth: z,
            })
        } else {
            None
        }
    }

    /// Project every point, failing if any one of them fails
    pub fn project_all<const N: usize>(&self, points: &[Vector3; N]) -> Option<[ScreenPoint; N]> {
        let mut out = [ScreenPoint {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
        }; N];
        for (slot, point) in out.iter_mut().zip(points) {
            *slot = self.project(*point)?;
        }
        Some(out)
    }

    /// Trail behind and below the car, facing along its heading
    pub fn follow(&mut self, car: &Car) {
        self.position = car.position
            + Vector3::new(
                0.0,
                Params::CAMERA_HEIGHT_OFFSET,
                -Params::CAMERA_TRAIL_DISTANCE,
            );
        self.rotation = car.heading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at_origin() -> Camera {
        let mut camera = Camera::new(&Config::new());
        camera.position = Vector3::ZERO;
        camera
    }

    #[test]
    fn test_point_ahead_projects_to_screen_center() {
        let camera = camera_at_origin();
        let p = camera.project(Vector3::new(0.0, 0.0, 10.0)).unwrap();
        assert_eq!(p.pixel(), (400, 300));
        assert_eq!(p.depth, 10.0);
    }

    #[test]
    fn test_perspective_divide() {
        let camera = camera_at_origin();
        // scale = 400 / 20 = 20
        let p = camera.project(Vector3::new(2.0, 1.0, 20.0)).unwrap();
        assert!((p.x - 440.0).abs() < 1e-4);
        assert!((p.y - 280.0).abs() < 1e-4);
    }

    #[test]
    fn test_point_inside_near_plane_is_not_renderable() {
        let camera = camera_at_origin();
        assert!(camera.project(Vector3::new(0.0, 0.0, 0.05)).is_none());
        assert!(camera.project(Vector3::new(0.0, 0.0, 0.1)).is_none());
        assert!(camera.project(Vector3::new(0.0, 0.0, -5.0)).is_none());
    }

    #[test]
    fn test_rotation_turns_side_point_into_view() {
        let mut camera = camera_at_origin();
        // A point to the +x side is behind the view axis until the camera yaws
        assert!(camera.project(Vector3::new(10.0, 0.0, 0.0)).is_none());
        camera.rotation = std::f32::consts::FRAC_PI_2;
        let p = camera.project(Vector3::new(10.0, 0.0, 0.0)).unwrap();
        assert!((p.depth - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_project_all_fails_if_any_point_fails() {
        let camera = camera_at_origin();
        let points = [Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -5.0)];
        assert!(camera.project_all(&points).is_none());

        let points = [Vector3::new(0.0, 0.0, 5.0), Vector3::new(1.0, 0.0, 6.0)];
        assert!(camera.project_all(&points).is_some());
    }
}
