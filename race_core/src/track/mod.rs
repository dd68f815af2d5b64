//! Closed-loop track built from straight segments
//!
//! Progress in `[0, 1)` maps onto the loop with each segment taking an
//! equal share, regardless of its length.

mod builder;
mod segment;

pub use builder::*;
pub use segment::*;

use crate::error::TrackError;
use crate::math::Vector3;
use crate::params::Params;

/// Where a progress value lands on the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPose {
    pub position: Vector3,
    /// Heading of the current segment (see [`TrackSegment::heading`])
    pub heading: f32,
    pub segment_index: usize,
}

/// Immutable closed loop of contiguous segments with lap checkpoints
#[derive(Debug, Clone)]
pub struct Track {
    segments: Vec<TrackSegment>,
    checkpoints: Vec<usize>,
}

impl Track {
    /// The built-in stunt course
    pub fn stunt(width: f32) -> Result<Self, TrackError> {
        Self::from_points(&stunt_course(), width)
    }

    /// Build a track through `points`, closing the loop if the last point
    /// does not already return to the first.
    pub fn from_points(points: &[Vector3], width: f32) -> Result<Self, TrackError> {
        if points.len() < 2 {
            return Err(TrackError::TooFewPoints(points.len()));
        }
        if !(width > 0.0) {
            return Err(TrackError::InvalidWidth(width));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(TrackError::NonFinitePoint(i));
        }

        let mut points = points.to_vec();
        if points.first() != points.last() {
            points.push(points[0]);
        }

        let segments: Vec<TrackSegment> = points
            .windows(2)
            .map(|pair| TrackSegment::new(pair[0], pair[1], width))
            .collect();
        let checkpoints = checkpoint_indices(segments.len());

        log::debug!(
            "Built track: {} segments, checkpoints {:?}",
            segments.len(),
            checkpoints
        );

        Ok(Self {
            segments,
            checkpoints,
        })
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn checkpoints(&self) -> &[usize] {
        &self.checkpoints
    }

    pub fn is_checkpoint(&self, segment_index: usize) -> bool {
        self.checkpoints.binary_search(&segment_index).is_ok()
    }

    /// Total centerline length
    pub fn length(&self) -> f32 {
        self.segments.iter().map(TrackSegment::length).sum()
    }

    /// Position, heading and segment for a progress value.
    ///
    /// Any finite progress is accepted; values outside `[0, 1)` wrap.
    pub fn get_position_on_track(&self, progress: f32) -> TrackPose {
        let n = self.segments.len();
        let scaled = progress * n as f32;
        let whole = scaled.floor();
        let local_t = scaled - whole;
        let segment_index = (whole as i64).rem_euclid(n as i64) as usize;

        let segment = &self.segments[segment_index];
        TrackPose {
            position: segment.point_at(local_t),
            heading: segment.heading(),
            segment_index,
        }
    }
}

/// Checkpoints every `n / 5` segments; a short track only gets index 0
fn checkpoint_indices(segment_count: usize) -> Vec<usize> {
    let interval = segment_count / Params::CHECKPOINT_DIVISIONS;
    if interval == 0 {
        return vec![0];
    }
    (0..segment_count).step_by(interval).collect()
}
