// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body joint types.
//!
//! This module defines the [`JointName`] keypoint vocabulary (the 17 COCO
//! pose keypoints) and the [`Joint`] value type carrying one detected
//! keypoint's position and confidence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of COCO pose keypoints.
pub const NUM_JOINTS: usize = 17;

/// Named body joints, in COCO-Pose keypoint order.
///
/// The discriminant order matches the keypoint rows produced by YOLO pose
/// models, so `JointName::from_index(i)` maps row `i` of a (17, 2|3)
/// keypoint array to its anatomical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointName {
    /// Nose.
    Nose,
    /// Left eye.
    LeftEye,
    /// Right eye.
    RightEye,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left elbow.
    LeftElbow,
    /// Right elbow.
    RightElbow,
    /// Left wrist.
    LeftWrist,
    /// Right wrist.
    RightWrist,
    /// Left hip.
    LeftHip,
    /// Right hip.
    RightHip,
    /// Left knee.
    LeftKnee,
    /// Right knee.
    RightKnee,
    /// Left ankle.
    LeftAnkle,
    /// Right ankle.
    RightAnkle,
}

/// All joint names in COCO keypoint order.
pub const ALL_JOINTS: [JointName; NUM_JOINTS] = [
    JointName::Nose,
    JointName::LeftEye,
    JointName::RightEye,
    JointName::LeftEar,
    JointName::RightEar,
    JointName::LeftShoulder,
    JointName::RightShoulder,
    JointName::LeftElbow,
    JointName::RightElbow,
    JointName::LeftWrist,
    JointName::RightWrist,
    JointName::LeftHip,
    JointName::RightHip,
    JointName::LeftKnee,
    JointName::RightKnee,
    JointName::LeftAnkle,
    JointName::RightAnkle,
];

impl JointName {
    /// Returns the snake_case string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// Returns the COCO keypoint index of this joint.
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the joint at the given COCO keypoint index.
    ///
    /// # Arguments
    ///
    /// * `index` - Keypoint row index (0..17).
    ///
    /// # Returns
    ///
    /// * `Some` joint name, or `None` if `index` is out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_JOINTS.get(index).copied()
    }
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JointName {
    type Err = JointParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace(['-', ' '], "_");
        ALL_JOINTS
            .iter()
            .find(|j| j.as_str() == normalized)
            .copied()
            .ok_or_else(|| JointParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid joint name.
#[derive(Debug, Clone)]
pub struct JointParseError(String);

impl fmt::Display for JointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid joint name '{}'", self.0)
    }
}

impl std::error::Error for JointParseError {}

/// One detected body joint.
///
/// Positions are in normalized frame coordinates with x, y in [0, 1] and the
/// origin at the bottom-left of the frame, the convention the pose estimator
/// reports. Confidence is in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Anatomical name of the joint.
    pub name: JointName,
    /// Normalized horizontal position.
    pub x: f32,
    /// Normalized vertical position (origin at the bottom of the frame).
    pub y: f32,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
}

impl Joint {
    /// Create a new joint.
    ///
    /// # Arguments
    ///
    /// * `name` - Anatomical joint name.
    /// * `x` - Normalized horizontal position.
    /// * `y` - Normalized vertical position.
    /// * `confidence` - Detection confidence in [0, 1].
    ///
    /// # Returns
    ///
    /// * A new `Joint` instance.
    #[must_use]
    pub const fn new(name: JointName, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            name,
            x,
            y,
            confidence,
        }
    }
}
