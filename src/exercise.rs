// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Exercise definitions.
//!
//! This module defines the closed set of exercises the classifier supports.
//! Selecting an exercise determines which threshold rule applies to
//! subsequent pose frames.

use std::fmt;
use std::str::FromStr;

/// Supported exercise types.
///
/// The set is closed: classifier dispatch is an exhaustive `match`, so a new
/// variant that lacks a rule is a compile error rather than a runtime
/// "not recognized" fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// Bodyweight squat.
    Squat,
    /// Push-up.
    PushUp,
    /// Forward lunge.
    Lunge,
    /// Plank hold.
    Plank,
    /// Glute bridge.
    GluteBridge,
    /// Standing calf raise.
    CalfRaise,
    /// Wall sit hold.
    WallSit,
    /// Overhead shoulder press.
    ShoulderPress,
    /// Tricep dip.
    TricepDip,
    /// Bicycle crunch.
    BicycleCrunch,
    /// Superman back extension.
    Superman,
    /// Mountain climber.
    MountainClimber,
    /// Jumping jack.
    JumpingJack,
    /// Burpee.
    Burpee,
    /// High knee run.
    HighKnee,
    /// Box jump.
    BoxJump,
    /// Kettlebell swing.
    KettlebellSwing,
}

/// All supported exercises, in menu order.
pub const ALL_EXERCISES: [Exercise; 17] = [
    Exercise::Squat,
    Exercise::PushUp,
    Exercise::Lunge,
    Exercise::Plank,
    Exercise::GluteBridge,
    Exercise::CalfRaise,
    Exercise::WallSit,
    Exercise::ShoulderPress,
    Exercise::TricepDip,
    Exercise::BicycleCrunch,
    Exercise::Superman,
    Exercise::MountainClimber,
    Exercise::JumpingJack,
    Exercise::Burpee,
    Exercise::HighKnee,
    Exercise::BoxJump,
    Exercise::KettlebellSwing,
];

impl Exercise {
    /// Returns the display name of the exercise.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::PushUp => "Push-up",
            Self::Lunge => "Lunge",
            Self::Plank => "Plank",
            Self::GluteBridge => "Glute Bridge",
            Self::CalfRaise => "Calf Raise",
            Self::WallSit => "Wall Sit",
            Self::ShoulderPress => "Shoulder Press",
            Self::TricepDip => "Tricep Dip",
            Self::BicycleCrunch => "Bicycle Crunch",
            Self::Superman => "Superman",
            Self::MountainClimber => "Mountain Climber",
            Self::JumpingJack => "Jumping Jack",
            Self::Burpee => "Burpee",
            Self::HighKnee => "High Knee",
            Self::BoxJump => "Box Jump",
            Self::KettlebellSwing => "Kettlebell Swing",
        }
    }

    /// Returns the lowercase name used inside feedback messages.
    #[must_use]
    pub fn lower_name(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Returns whether the rule for this exercise evaluates two angles.
    ///
    /// Only Jumping Jack combines an arm angle and a leg angle; every other
    /// exercise evaluates a single angle or displacement.
    #[must_use]
    pub const fn uses_two_angles(&self) -> bool {
        matches!(self, Self::JumpingJack)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = ExerciseParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accept "Push-up", "push up", "push_up", "pushup", ...
        let normalized = s.to_lowercase().replace(['-', '_', ' '], "");
        ALL_EXERCISES
            .iter()
            .find(|e| e.as_str().to_lowercase().replace(['-', ' '], "") == normalized)
            .copied()
            .ok_or_else(|| ExerciseParseError(s.to_string()))
    }
}

impl Default for Exercise {
    fn default() -> Self {
        Self::Squat
    }
}

/// Error returned when parsing an invalid exercise name.
#[derive(Debug, Clone)]
pub struct ExerciseParseError(String);

impl fmt::Display for ExerciseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = ALL_EXERCISES.iter().map(Exercise::as_str).collect();
        write!(
            f,
            "invalid exercise '{}', expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for ExerciseParseError {}
