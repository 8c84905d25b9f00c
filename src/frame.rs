// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose frame container.
//!
//! A [`PoseFrame`] holds the joints detected in one sampled video frame. It
//! is transient: the analyzer consumes one frame per classification and
//! nothing is persisted across frames.

use std::collections::HashMap;

use ndarray::ArrayView2;

use crate::joint::{Joint, JointName};

/// The set of joints detected in one sampled video frame.
///
/// An empty frame means no person was detected.
#[derive(Debug, Clone, Default)]
pub struct PoseFrame {
    joints: HashMap<JointName, Joint>,
}

impl PoseFrame {
    /// Create an empty frame (no person detected).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from a list of detected joints.
    ///
    /// Later entries with the same name overwrite earlier ones.
    #[must_use]
    pub fn from_joints(joints: impl IntoIterator<Item = Joint>) -> Self {
        let mut frame = Self::new();
        for joint in joints {
            frame.insert(joint);
        }
        frame
    }

    /// Build a frame from a keypoint array in COCO order.
    ///
    /// Accepts the (K, 2) or (K, 3) per-pose layout of YOLO pose output,
    /// where column 2 (when present) is the keypoint confidence. Rows beyond
    /// the 17 named joints are ignored; with no confidence column every
    /// joint is taken at confidence 1.0. Coordinates are expected already
    /// normalized to [0, 1] with a bottom-left origin.
    ///
    /// # Arguments
    ///
    /// * `keypoints` - Keypoint array of shape (K, 2) or (K, 3).
    ///
    /// # Returns
    ///
    /// * A frame with one joint per keypoint row.
    #[must_use]
    pub fn from_keypoints(keypoints: &ArrayView2<'_, f32>) -> Self {
        let has_conf = keypoints.shape()[1] > 2;
        let mut frame = Self::new();
        for (i, row) in keypoints.outer_iter().enumerate() {
            let Some(name) = JointName::from_index(i) else {
                break;
            };
            let confidence = if has_conf { row[2] } else { 1.0 };
            frame.insert(Joint::new(name, row[0], row[1], confidence));
        }
        frame
    }

    /// Insert a joint, replacing any previous joint with the same name.
    pub fn insert(&mut self, joint: Joint) {
        self.joints.insert(joint.name, joint);
    }

    /// Look up a joint by name.
    #[must_use]
    pub fn joint(&self, name: JointName) -> Option<&Joint> {
        self.joints.get(&name)
    }

    /// Get the number of joints in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Check whether the frame contains no joints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Iterate over the joints in the frame (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Joint> {
        self.joints.values()
    }
}

impl FromIterator<Joint> for PoseFrame {
    fn from_iter<T: IntoIterator<Item = Joint>>(iter: T) -> Self {
        Self::from_joints(iter)
    }
}
