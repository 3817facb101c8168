//! Landmark input types for the estimator.
//!
//! Coordinates follow the face mesh convention: x increases rightward,
//! y increases downward, z increases away from the viewer. Values are
//! typically normalized to [0, 1] but the estimator only assumes a
//! consistent unit across all points.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A single tracked 3-D facial keypoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from its coordinates
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// View the landmark as a position vector
    #[must_use]
    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<(f32, f32, f32)> for Landmark {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Landmark> for Vector3<f32> {
    fn from(landmark: Landmark) -> Self {
        landmark.to_vector()
    }
}

/// An ordered, immutable sequence of landmarks for one frame.
///
/// The sequence length is fixed by the upstream face model; the
/// estimator validates that it covers the reference indices it needs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Create a landmark set from an owned vector of points
    #[must_use]
    pub fn from_vec(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Number of landmarks in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the set contains no landmarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmark at `index`, or `None` if out of range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Position vector of the landmark at `index`, or `None` if out of range
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Vector3<f32>> {
        self.landmarks.get(index).map(|l| l.to_vector())
    }

    /// Iterate over the landmarks in order
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(f32, f32, f32)>> for LandmarkSet {
    fn from(points: Vec<(f32, f32, f32)>) -> Self {
        points.into_iter().map(Landmark::from).collect()
    }
}
