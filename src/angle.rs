// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint-angle calculation.
//!
//! The angle at a joint is computed from the triple (endpoint, vertex,
//! endpoint): the absolute difference between the headings of the two
//! vertex-to-endpoint vectors.

use crate::frame::PoseFrame;
use crate::joint::{Joint, JointName};

/// Minimum confidence a joint needs before its position is trusted.
pub const MIN_CONFIDENCE: f32 = 0.1;

/// Compute the unsigned angle at `vertex` formed by `a` and `c`, in degrees.
///
/// Forms v1 = a - vertex and v2 = c - vertex and returns
/// `|atan2(v2.y, v2.x) - atan2(v1.y, v1.x)|` in degrees. The result lies in
/// [0°, 360°) and is NOT folded onto [0°, 180°]: a reflex configuration
/// reports its raw turn, and the per-exercise thresholds are tuned against
/// that exact range.
///
/// # Arguments
///
/// * `a` - First endpoint joint.
/// * `vertex` - Joint at which the angle is measured.
/// * `c` - Second endpoint joint.
///
/// # Returns
///
/// * The angle in degrees, or `None` if any joint's confidence is at or
///   below [`MIN_CONFIDENCE`].
#[must_use]
pub fn compute_angle(a: &Joint, vertex: &Joint, c: &Joint) -> Option<f32> {
    if a.confidence <= MIN_CONFIDENCE
        || vertex.confidence <= MIN_CONFIDENCE
        || c.confidence <= MIN_CONFIDENCE
    {
        return None;
    }

    let v1 = (a.x - vertex.x, a.y - vertex.y);
    let v2 = (c.x - vertex.x, c.y - vertex.y);

    let angle = v2.1.atan2(v2.0) - v1.1.atan2(v1.0);
    Some(angle.abs().to_degrees())
}

/// Compute the angle for a joint triple looked up in a frame.
///
/// # Arguments
///
/// * `frame` - The pose frame to read joints from.
/// * `a` - First endpoint joint name.
/// * `vertex` - Vertex joint name.
/// * `c` - Second endpoint joint name.
///
/// # Returns
///
/// * The angle in degrees, or `None` if any joint is missing from the frame
///   or fails the confidence floor.
#[must_use]
pub fn frame_angle(
    frame: &PoseFrame,
    a: JointName,
    vertex: JointName,
    c: JointName,
) -> Option<f32> {
    compute_angle(frame.joint(a)?, frame.joint(vertex)?, frame.joint(c)?)
}
