//! Configuration management for the estimator

use crate::{
    constants::{
        DEGENERACY_EPSILON, LEFT_JAW_INDEX, LEFT_TEMPLE_INDEX, RIGHT_JAW_INDEX, RIGHT_TEMPLE_INDEX,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Reference landmark indices
    pub reference: ReferenceIndices,

    /// Degenerate geometry threshold for edge and normal vector norms
    pub degeneracy_epsilon: f32,
}

/// Face mesh indices of the four reference points spanning the Euler plane.
///
/// The defaults are the temple and jaw points of the MediaPipe face mesh,
/// chosen because that quadrilateral stays close to rigid under expression
/// changes. Alternative mesh topologies can remap them here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceIndices {
    /// Left temple point (p1)
    pub left_temple: usize,

    /// Right temple point (p2)
    pub right_temple: usize,

    /// Right jaw point (p3)
    pub right_jaw: usize,

    /// Left jaw point (p4)
    pub left_jaw: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceIndices::default(),
            degeneracy_epsilon: DEGENERACY_EPSILON,
        }
    }
}

impl Default for ReferenceIndices {
    fn default() -> Self {
        Self {
            left_temple: LEFT_TEMPLE_INDEX,
            right_temple: RIGHT_TEMPLE_INDEX,
            right_jaw: RIGHT_JAW_INDEX,
            left_jaw: LEFT_JAW_INDEX,
        }
    }
}

impl ReferenceIndices {
    /// Minimum landmark set length required to address all four indices
    #[must_use]
    pub fn required_len(&self) -> usize {
        self.left_temple
            .max(self.right_temple)
            .max(self.right_jaw)
            .max(self.left_jaw)
            + 1
    }
}

impl EstimatorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let r = &self.reference;
        let indices = [r.left_temple, r.right_temple, r.right_jaw, r.left_jaw];
        for (i, a) in indices.iter().enumerate() {
            for b in indices.iter().skip(i + 1) {
                if a == b {
                    return Err(Error::Config(format!(
                        "Reference indices must be distinct, {} appears twice",
                        a
                    )));
                }
            }
        }

        if !self.degeneracy_epsilon.is_finite() || self.degeneracy_epsilon <= 0.0 {
            return Err(Error::Config(
                "Degeneracy epsilon must be a positive finite value".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head pose estimator configuration

# Face mesh indices of the Euler plane reference points
reference:
  left_temple: 21
  right_temple: 251
  right_jaw: 397
  left_jaw: 172

# Threshold below which edge/normal vectors are treated as degenerate
degeneracy_epsilon: 1.0e-6
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EstimatorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.reference.required_len(), 398);
    }

    #[test]
    fn test_duplicate_indices_rejected() {
        let mut config = EstimatorConfig::default();
        config.reference.left_jaw = config.reference.right_jaw;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_epsilon_rejected() {
        let mut config = EstimatorConfig::default();
        config.degeneracy_epsilon = 0.0;
        assert!(config.validate().is_err());

        config.degeneracy_epsilon = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config: EstimatorConfig = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        config.validate().unwrap();
        assert_eq!(config.reference.left_temple, 21);
        assert_eq!(config.reference.right_temple, 251);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EstimatorConfig = serde_yaml::from_str("degeneracy_epsilon: 1.0e-5").unwrap();
        assert_eq!(config.reference.right_jaw, 397);
        assert!((config.degeneracy_epsilon - 1.0e-5).abs() < f32::EPSILON);
    }
}
