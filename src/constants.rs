//! Constants used throughout the library

/// Face mesh index of the left temple reference point
pub const LEFT_TEMPLE_INDEX: usize = 21;

/// Face mesh index of the right temple reference point
pub const RIGHT_TEMPLE_INDEX: usize = 251;

/// Face mesh index of the right jaw reference point
pub const RIGHT_JAW_INDEX: usize = 397;

/// Face mesh index of the left jaw reference point
pub const LEFT_JAW_INDEX: usize = 172;

/// Minimum landmark count implied by the default reference indices
pub const MIN_LANDMARK_COUNT: usize = RIGHT_JAW_INDEX + 1;

/// Number of landmarks in the upstream face mesh model
pub const FACE_MESH_LANDMARK_COUNT: usize = 468;

/// Edge or normal vectors with a norm at or below this are rejected as degenerate
pub const DEGENERACY_EPSILON: f32 = 1e-6;
