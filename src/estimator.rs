//! Head pose estimation from the face mesh Euler plane.
//!
//! Four reference landmarks (temples and jaw points) span a mostly-rigid
//! quadrilateral on the face. Two edge vectors of that quadrilateral give
//! an orthonormal basis, and roll/pitch/yaw follow analytically from the
//! basis components.

use crate::{config::EstimatorConfig, landmarks::LandmarkSet, Error, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

const TWO_PI: f32 = 2.0 * PI;

/// One frame's head pose.
///
/// Rotation components are ordered (x, y, z) = (pitch-like, yaw-like,
/// roll-like) in the screen-space convention of the landmark input:
/// x rightward, y downward, z away from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    /// Rotation with each axis expressed as angle/pi, in (-1, 1]
    pub rotation_normalized: Vector3<f32>,

    /// Rotation in degrees (normalized x 180)
    pub rotation_degrees: Vector3<f32>,

    /// Rotation in radians (normalized x pi)
    pub rotation_radians: Vector3<f32>,

    /// Representative anchor point for the head origin, in landmark units
    pub position: Vector3<f32>,

    /// Apparent width of the reference plane, in landmark units
    pub width: f32,

    /// Apparent height of the reference plane, in landmark units
    pub height: f32,
}

/// Head pose estimator built on the Euler plane construction.
///
/// Stateless across calls; a single instance may be shared freely between
/// threads feeding independent landmark sets.
#[derive(Debug, Clone, Default)]
pub struct HeadPoseEstimator {
    config: EstimatorConfig,
}

impl HeadPoseEstimator {
    /// Create an estimator with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation (duplicate
    /// reference indices or a non-positive degeneracy epsilon).
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Initializing HeadPoseEstimator with reference indices {:?}",
            config.reference
        );

        Ok(Self { config })
    }

    /// The configuration this estimator was built with
    #[must_use]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the head pose for one frame's landmarks
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The landmark set is too short to address the reference indices
    /// - The reference points are coincident or collinear, so no plane
    ///   basis can be normalized
    pub fn estimate(&self, landmarks: &LandmarkSet) -> Result<HeadPose> {
        let reference = &self.config.reference;
        let required = reference.required_len();
        let actual = landmarks.len();
        if actual < required {
            return Err(Error::InsufficientLandmarks { required, actual });
        }

        // Indices are covered by the length check above.
        let missing = || Error::InsufficientLandmarks { required, actual };
        let p1 = landmarks.point(reference.left_temple).ok_or_else(missing)?;
        let p2 = landmarks.point(reference.right_temple).ok_or_else(missing)?;
        let p3 = landmarks.point(reference.right_jaw).ok_or_else(missing)?;
        let p4 = landmarks.point(reference.left_jaw).ok_or_else(missing)?;
        let p3mid = (p3 + p4) / 2.0;

        // Euler plane basis: qb spans the eye line, qc reaches the jaw
        // midpoint, and their cross product is the face normal.
        let qb = p2 - p1;
        let qc = p3mid - p1;
        let n = qb.cross(&qc);

        let epsilon = self.config.degeneracy_epsilon;
        if qb.norm() <= epsilon {
            return Err(Error::DegenerateGeometry(
                "temple reference points are coincident".to_string(),
            ));
        }
        if n.norm() <= epsilon {
            return Err(Error::DegenerateGeometry(
                "reference points are collinear, plane normal vanishes".to_string(),
            ));
        }

        let unit_z = n.normalize();
        let unit_x = qb.normalize();
        let unit_y = unit_z.cross(&unit_x);

        // asin argument clamped against rounding drift in the normalization
        let beta = unit_z.x.clamp(-1.0, 1.0).asin();
        let alpha = (-unit_z.y).atan2(unit_z.z);
        let gamma = (-unit_y.x).atan2(unit_x.x);

        let mut rotation = Vector3::new(
            normalize_angle(alpha),
            normalize_angle(beta),
            normalize_angle(gamma),
        );

        // Downstream screen-space convention flips the x and z axes
        rotation.x = -rotation.x;
        rotation.z = -rotation.z;

        let mid_point = (p1 + p2) / 2.0;
        let width = (p1 - p2).norm();
        let height = (mid_point - p3mid).norm();
        let position = (mid_point + p2) / 2.0;

        log::trace!("head pose rotation (normalized): {:?}", rotation);

        Ok(HeadPose {
            rotation_normalized: rotation,
            rotation_degrees: rotation * 180.0,
            rotation_radians: rotation * PI,
            position,
            width,
            height,
        })
    }
}

/// Wrap an angle in radians to the canonical range (-pi, pi]
#[must_use]
pub fn wrap_angle(radians: f32) -> f32 {
    let angle = radians % TWO_PI;

    if angle > PI {
        angle - TWO_PI
    } else if angle < -PI {
        angle + TWO_PI
    } else {
        angle
    }
}

/// Wrap an angle and express it as a fraction of pi, in (-1, 1]
#[must_use]
pub fn normalize_angle(radians: f32) -> f32 {
    wrap_angle(radians) / PI
}
