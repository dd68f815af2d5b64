//! Small math helpers shared by the track, car and camera

/// 3D point/vector value type
pub type Vector3 = glam::Vec3;

/// Wrap a progress value into `[0, 1)`, including negative inputs
pub fn wrap_progress(progress: f32) -> f32 {
    ((progress % 1.0) + 1.0) % 1.0
}

/// Rotate `(x, z)` by `angle` radians in the horizontal plane
pub fn rotate_xz(x: f32, z: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - z * sin, x * sin + z * cos)
}
