use std::f32::consts::PI;

use crate::math::Vector3;

/// Accumulates control points phase by phase.
///
/// Every phase continues from the last point already placed.
#[derive(Debug, Clone, Default)]
pub struct TrackBuilder {
    points: Vec<Vector3>,
}

impl TrackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn last(&self) -> Vector3 {
        self.points.last().copied().unwrap_or(Vector3::ZERO)
    }

    pub fn point(mut self, p: Vector3) -> Self {
        self.points.push(p);
        self
    }

    /// Flat run from the origin
    pub fn flat_start(self, length: f32) -> Self {
        self.point(Vector3::ZERO)
            .point(Vector3::new(0.0, 0.0, length))
    }

    /// Linear rise; the first step repeats the current point
    pub fn ramp(mut self, steps: usize, run: f32, rise: f32) -> Self {
        let base = self.last();
        for i in 0..steps {
            let i = i as f32;
            self.points
                .push(Vector3::new(0.0, base.y + i * rise, base.z + i * run));
        }
        self
    }

    /// Constant-height section swaying sideways along a sine
    pub fn curve(mut self, steps: usize, step_length: f32, sway: f32, frequency: f32) -> Self {
        let height = self.last().y;
        for i in 0..steps {
            let x = (i as f32 * frequency).sin() * sway;
            let z = self.last().z + step_length;
            self.points.push(Vector3::new(x, height, z));
        }
        self
    }

    /// A single long leap forward with a drop
    pub fn jump(self, length: f32, drop: f32) -> Self {
        let from = self.last();
        self.point(Vector3::new(from.x, from.y - drop, from.z + length))
    }

    /// Straight descent, `fall` units per step
    pub fn slope(mut self, steps: usize, step_length: f32, fall: f32) -> Self {
        for _ in 0..steps {
            let prev = self.last();
            self.points
                .push(Vector3::new(prev.x, prev.y - fall, prev.z + step_length));
        }
        self
    }

    /// Half circle around the current point with a sinusoidal bank
    pub fn banked_turn(mut self, steps: usize, radius: f32, bank: f32) -> Self {
        let center = self.last();
        for i in 0..steps {
            let angle = PI * i as f32 / steps as f32;
            self.points.push(Vector3::new(
                center.x + angle.cos() * radius,
                center.y + (i as f32 * 0.3).sin() * bank,
                center.z + angle.sin() * radius,
            ));
        }
        self
    }

    /// Straight with a cumulative sinusoidal rise
    pub fn hill(mut self, steps: usize, step_length: f32, height: f32) -> Self {
        for i in 0..steps {
            let prev = self.last();
            let factor = (i as f32 * PI / steps as f32).sin();
            self.points.push(Vector3::new(
                prev.x,
                prev.y + factor * height,
                prev.z + step_length,
            ));
        }
        self
    }

    /// Elliptic half turn heading back, descending but never below ground
    pub fn return_turn(
        mut self,
        steps: usize,
        radius_x: f32,
        radius_z: f32,
        descent: f32,
    ) -> Self {
        let center = self.last();
        for i in 0..steps {
            let angle = -PI * i as f32 / steps as f32;
            let y = (self.last().y - i as f32 * descent).max(0.0);
            self.points.push(Vector3::new(
                center.x + angle.cos() * radius_x,
                y,
                center.z + angle.sin() * radius_z,
            ));
        }
        self
    }

    /// Close the loop back at the first point
    pub fn close(self) -> Self {
        let first = self.points.first().copied().unwrap_or(Vector3::ZERO);
        self.point(first)
    }

    pub fn build(self) -> Vec<Vector3> {
        self.points
    }
}

/// Control points of the stunt course
pub fn stunt_course() -> Vec<Vector3> {
    TrackBuilder::new()
        .flat_start(20.0)
        .ramp(5, 8.0, 3.0)
        .curve(8, 6.0, 15.0, 0.3)
        .jump(25.0, 3.0)
        .slope(5, 6.0, 2.0)
        .banked_turn(10, 20.0, 3.0)
        .hill(8, 8.0, 4.0)
        .return_turn(10, 25.0, 15.0, 1.5)
        .close()
        .build()
}
