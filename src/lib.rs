//! Head pose estimation from face mesh landmarks.
//!
//! Given one frame's landmarks from a face-tracking pipeline, this library
//! derives a 3-D head orientation (roll/pitch/yaw), an anchor position,
//! and a bounding scale. Four fixed reference landmarks (temples and jaw
//! points of the MediaPipe face mesh) span a near-rigid quadrilateral; an
//! orthonormal basis built on that plane yields the Euler-like angles
//! analytically.
//!
//! The estimator is a pure, stateless transform: one landmark set in, one
//! [`HeadPose`] out. Frame acquisition, smoothing across frames, and
//! delivery of the result are the host pipeline's concern.
//!
//! # Examples
//!
//! ```
//! use head_pose_landmarks::{EstimatorConfig, HeadPoseEstimator, Landmark, LandmarkSet};
//!
//! # fn main() -> head_pose_landmarks::Result<()> {
//! let estimator = HeadPoseEstimator::new(EstimatorConfig::default())?;
//!
//! // A face mesh frame; the host normally fills all 468 points.
//! let mut points = vec![Landmark::new(0.0, 0.0, 0.0); 468];
//! points[21] = Landmark::new(0.35, 0.40, 0.0);  // left temple
//! points[251] = Landmark::new(0.65, 0.40, 0.0); // right temple
//! points[397] = Landmark::new(0.60, 0.75, 0.02); // right jaw
//! points[172] = Landmark::new(0.40, 0.75, 0.02); // left jaw
//! let landmarks = LandmarkSet::from_vec(points);
//!
//! let pose = estimator.estimate(&landmarks)?;
//! println!(
//!     "pitch: {:.1} deg, yaw: {:.1} deg, roll: {:.1} deg",
//!     pose.rotation_degrees.x, pose.rotation_degrees.y, pose.rotation_degrees.z
//! );
//! assert!(pose.width > 0.0 && pose.height > 0.0);
//! # Ok(())
//! # }
//! ```

/// Head pose estimation from the Euler plane basis
pub mod estimator;

/// Landmark input types
pub mod landmarks;

/// Configuration management
pub mod config;

/// Constants used throughout the library
pub mod constants;

/// Error types and result handling
pub mod error;

pub use config::{EstimatorConfig, ReferenceIndices};
pub use error::{Error, Result};
pub use estimator::{HeadPose, HeadPoseEstimator};
pub use landmarks::{Landmark, LandmarkSet};
