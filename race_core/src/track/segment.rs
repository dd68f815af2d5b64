use crate::math::Vector3;

/// One straight edge of the track centerline, with lateral half-width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    pub start: Vector3,
    pub end: Vector3,
    pub width: f32,
}

impl TrackSegment {
    pub fn new(start: Vector3, end: Vector3, width: f32) -> Self {
        Self { start, end, width }
    }

    /// Lateral offset in the (x, z) plane, `width` units long.
    ///
    /// A zero-length segment has no direction, so it falls back to `(width, 0)`.
    pub fn lateral_offset(&self) -> (f32, f32) {
        let dx = self.end.x - self.start.x;
        let dz = self.end.z - self.start.z;
        let length = (dx * dx + dz * dz).sqrt();

        if length > 0.0 {
            (-dz / length * self.width, dx / length * self.width)
        } else {
            (self.width, 0.0)
        }
    }

    /// Corners in drawing order: start+offset, start-offset, end-offset, end+offset
    pub fn corners(&self) -> [Vector3; 4] {
        let (ox, oz) = self.lateral_offset();
        [
            Vector3::new(self.start.x + ox, self.start.y, self.start.z + oz),
            Vector3::new(self.start.x - ox, self.start.y, self.start.z - oz),
            Vector3::new(self.end.x - ox, self.end.y, self.end.z - oz),
            Vector3::new(self.end.x + ox, self.end.y, self.end.z + oz),
        ]
    }

    /// Heading of the segment, measured from +z toward +x
    pub fn heading(&self) -> f32 {
        (self.end.x - self.start.x).atan2(self.end.z - self.start.z)
    }

    pub fn point_at(&self, t: f32) -> Vector3 {
        self.start.lerp(self.end, t)
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_of_straight_segment() {
        let seg = TrackSegment::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 10.0), 8.0);
        let c = seg.corners();
        assert_eq!(c[0], Vector3::new(-8.0, 0.0, 0.0));
        assert_eq!(c[1], Vector3::new(8.0, 0.0, 0.0));
        assert_eq!(c[2], Vector3::new(8.0, 0.0, 10.0));
        assert_eq!(c[3], Vector3::new(-8.0, 0.0, 10.0));
    }

    #[test]
    fn test_corners_keep_endpoint_heights() {
        let seg = TrackSegment::new(Vector3::new(0.0, 3.0, 0.0), Vector3::new(6.0, 9.0, 0.0), 2.0);
        let c = seg.corners();
        assert_eq!(c[0].y, 3.0);
        assert_eq!(c[1].y, 3.0);
        assert_eq!(c[2].y, 9.0);
        assert_eq!(c[3].y, 9.0);
        // Heading along +x puts the offset on the z axis
        assert!((c[0].z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_length_segment_uses_fallback_offset() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let seg = TrackSegment::new(p, p, 8.0);
        let c = seg.corners();
        for corner in c {
            assert!(corner.is_finite());
        }
        assert_eq!(c[0], Vector3::new(9.0, 2.0, 3.0));
        assert_eq!(c[1], Vector3::new(-7.0, 2.0, 3.0));
        assert_eq!(c[2], Vector3::new(-7.0, 2.0, 3.0));
        assert_eq!(c[3], Vector3::new(9.0, 2.0, 3.0));
        assert_eq!(seg.heading(), 0.0);
    }

    #[test]
    fn test_heading() {
        let seg = TrackSegment::new(Vector3::ZERO, Vector3::new(5.0, 0.0, 0.0), 1.0);
        assert!((seg.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
