// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-exercise form classification.
//!
//! [`classify`] maps one pose frame to a [`Feedback`] using the selected
//! exercise's threshold rule. Each rule reads one or two joint angles (or,
//! for Calf Raise, a vertical displacement ratio) from the right-side limb
//! joints and applies a three-tier ladder: Good, Improve, Poor.
//!
//! Classification is a pure function of `(Exercise, PoseFrame)`: no state is
//! carried across frames, no rep counting, no temporal smoothing.

use crate::angle::{frame_angle, MIN_CONFIDENCE};
use crate::exercise::Exercise;
use crate::feedback::Feedback;
use crate::frame::PoseFrame;
use crate::joint::JointName;

/// Message returned when a frame contains no joints at all.
pub const NO_PERSON_DETECTED: &str = "No person detected";

/// Classify one pose frame for the selected exercise.
///
/// # Arguments
///
/// * `exercise` - The exercise whose rule to apply.
/// * `frame` - The pose frame to evaluate.
///
/// # Returns
///
/// * Exactly one [`Feedback`]: a tiered message, or an undetected sentinel
///   when the frame is empty or the required joints fall below the
///   confidence floor.
#[must_use]
pub fn classify(exercise: Exercise, frame: &PoseFrame) -> Feedback {
    if frame.is_empty() {
        return Feedback::undetected(NO_PERSON_DETECTED);
    }

    match exercise {
        Exercise::Squat => analyze_squat(frame),
        Exercise::PushUp => analyze_push_up(frame),
        Exercise::Lunge => analyze_lunge(frame),
        Exercise::Plank => analyze_plank(frame),
        Exercise::GluteBridge => analyze_glute_bridge(frame),
        Exercise::CalfRaise => analyze_calf_raise(frame),
        Exercise::WallSit => analyze_wall_sit(frame),
        Exercise::ShoulderPress => analyze_shoulder_press(frame),
        Exercise::TricepDip => analyze_tricep_dip(frame),
        Exercise::BicycleCrunch => analyze_bicycle_crunch(frame),
        Exercise::Superman => analyze_superman(frame),
        Exercise::MountainClimber => analyze_mountain_climber(frame),
        Exercise::JumpingJack => analyze_jumping_jack(frame),
        Exercise::Burpee => analyze_burpee(frame),
        Exercise::HighKnee => analyze_high_knee(frame),
        Exercise::BoxJump => analyze_box_jump(frame),
        Exercise::KettlebellSwing => analyze_kettlebell_swing(frame),
    }
}

fn cannot_detect(exercise: Exercise) -> Feedback {
    Feedback::undetected(format!("Cannot detect {} pose", exercise.lower_name()))
}

/// Right-leg knee angle: hip, knee, ankle.
fn knee_angle(frame: &PoseFrame) -> Option<f32> {
    frame_angle(
        frame,
        JointName::RightHip,
        JointName::RightKnee,
        JointName::RightAnkle,
    )
}

/// Right-arm elbow angle: shoulder, elbow, wrist.
fn elbow_angle(frame: &PoseFrame) -> Option<f32> {
    frame_angle(
        frame,
        JointName::RightShoulder,
        JointName::RightElbow,
        JointName::RightWrist,
    )
}

/// Full-body line angle at the hip: shoulder, hip, ankle.
fn body_angle(frame: &PoseFrame) -> Option<f32> {
    frame_angle(
        frame,
        JointName::RightShoulder,
        JointName::RightHip,
        JointName::RightAnkle,
    )
}

/// Upper-body hip angle: shoulder, hip, knee.
fn hip_angle(frame: &PoseFrame) -> Option<f32> {
    frame_angle(
        frame,
        JointName::RightShoulder,
        JointName::RightHip,
        JointName::RightKnee,
    )
}

fn analyze_squat(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::Squat);
    };

    if angle < 90.0 {
        Feedback::good("Good squat form: Knees bent sufficiently")
    } else if angle < 120.0 {
        Feedback::improve("Improve squat form: Lower your hips more")
    } else {
        Feedback::poor("Poor squat form: Bend your knees more")
    }
}

fn analyze_push_up(frame: &PoseFrame) -> Feedback {
    let Some(angle) = elbow_angle(frame) else {
        return cannot_detect(Exercise::PushUp);
    };

    if angle < 90.0 {
        Feedback::good("Good push-up form: Arms bent sufficiently")
    } else if angle < 120.0 {
        Feedback::improve("Improve push-up form: Lower your chest more")
    } else {
        Feedback::poor("Poor push-up form: Bend your elbows more")
    }
}

fn analyze_lunge(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::Lunge);
    };

    if 80.0 < angle && angle < 100.0 {
        Feedback::good("Good lunge form: Front knee bent properly")
    } else if (100.0..120.0).contains(&angle) {
        Feedback::improve("Improve lunge form: Bend your front knee more")
    } else {
        Feedback::poor("Poor lunge form: Adjust your stance and knee bend")
    }
}

fn analyze_plank(frame: &PoseFrame) -> Feedback {
    let Some(angle) = body_angle(frame) else {
        return cannot_detect(Exercise::Plank);
    };

    if 160.0 < angle && angle < 180.0 {
        Feedback::good("Good plank form: Body well-aligned")
    } else if 150.0 < angle && angle <= 160.0 {
        Feedback::improve("Improve plank form: Straighten your body more")
    } else {
        Feedback::poor("Poor plank form: Align your body, keep it straight")
    }
}

fn analyze_glute_bridge(frame: &PoseFrame) -> Feedback {
    let Some(angle) = hip_angle(frame) else {
        return cannot_detect(Exercise::GluteBridge);
    };

    if angle > 160.0 {
        Feedback::good("Good glute bridge form: Hips raised high")
    } else if angle > 140.0 {
        Feedback::improve("Improve glute bridge form: Raise your hips higher")
    } else {
        Feedback::poor("Poor glute bridge form: Lift your hips much higher")
    }
}

fn analyze_calf_raise(frame: &PoseFrame) -> Feedback {
    let (Some(ankle), Some(knee)) = (
        frame.joint(JointName::RightAnkle),
        frame.joint(JointName::RightKnee),
    ) else {
        return cannot_detect(Exercise::CalfRaise);
    };
    if ankle.confidence <= MIN_CONFIDENCE || knee.confidence <= MIN_CONFIDENCE {
        return cannot_detect(Exercise::CalfRaise);
    }

    // Normalized against the knee's height above mid-frame; degenerate when
    // the knee sits near y = 0.5.
    let vertical_distance = knee.y - ankle.y;
    let normalized_distance = vertical_distance / (knee.y - 0.5);

    if normalized_distance < 0.1 {
        Feedback::good("Good calf raise form: Heels raised high")
    } else if normalized_distance < 0.15 {
        Feedback::improve("Improve calf raise form: Raise your heels higher")
    } else {
        Feedback::poor("Poor calf raise form: Lift your heels much higher")
    }
}

fn analyze_wall_sit(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::WallSit);
    };

    if 85.0 < angle && angle < 95.0 {
        Feedback::good("Good wall sit form: Knees at 90 degrees")
    } else if (80.0 < angle && angle <= 85.0) || (95.0..100.0).contains(&angle) {
        Feedback::improve("Improve wall sit form: Adjust to 90 degree knee bend")
    } else {
        Feedback::poor("Poor wall sit form: Significantly off from 90 degree knee bend")
    }
}

fn analyze_shoulder_press(frame: &PoseFrame) -> Feedback {
    let Some(angle) = elbow_angle(frame) else {
        return cannot_detect(Exercise::ShoulderPress);
    };

    if angle > 160.0 {
        Feedback::good("Good shoulder press form: Arms extended")
    } else if angle > 140.0 {
        Feedback::improve("Improve shoulder press form: Extend arms more")
    } else {
        Feedback::poor("Poor shoulder press form: Push the weights higher")
    }
}

fn analyze_tricep_dip(frame: &PoseFrame) -> Feedback {
    let Some(angle) = elbow_angle(frame) else {
        return cannot_detect(Exercise::TricepDip);
    };

    if angle < 90.0 {
        Feedback::good("Good tricep dip form: Arms bent sufficiently")
    } else if angle < 120.0 {
        Feedback::improve("Improve tricep dip form: Lower your body more")
    } else {
        Feedback::poor("Poor tricep dip form: Bend your elbows more")
    }
}

fn analyze_bicycle_crunch(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::BicycleCrunch);
    };

    if angle < 45.0 {
        Feedback::good("Good bicycle crunch form: Knee close to chest")
    } else if angle < 60.0 {
        Feedback::improve("Improve bicycle crunch form: Bring knee closer to chest")
    } else {
        Feedback::poor("Poor bicycle crunch form: Bring your knee much closer to your chest")
    }
}

fn analyze_superman(frame: &PoseFrame) -> Feedback {
    let Some(angle) = body_angle(frame) else {
        return cannot_detect(Exercise::Superman);
    };

    if angle > 160.0 {
        Feedback::good("Good superman form: Body well-extended")
    } else if angle > 140.0 {
        Feedback::improve("Improve superman form: Lift limbs higher")
    } else {
        Feedback::poor("Poor superman form: Lift your arms and legs much higher")
    }
}

fn analyze_mountain_climber(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::MountainClimber);
    };

    if angle < 90.0 {
        Feedback::good("Good mountain climber form: Knee close to chest")
    } else if angle < 120.0 {
        Feedback::improve("Improve mountain climber form: Bring knee closer to chest")
    } else {
        Feedback::poor("Poor mountain climber form: Bring your knee much closer to your chest")
    }
}

fn analyze_jumping_jack(frame: &PoseFrame) -> Feedback {
    let (Some(arm_angle), Some(leg_angle)) = (elbow_angle(frame), knee_angle(frame)) else {
        return cannot_detect(Exercise::JumpingJack);
    };

    if arm_angle > 150.0 && leg_angle > 30.0 {
        Feedback::good("Good jumping jack form: Arms and legs extended")
    } else if arm_angle > 120.0 && leg_angle > 20.0 {
        Feedback::improve("Improve jumping jack form: Extend arms and legs more")
    } else {
        Feedback::poor("Poor jumping jack form: Jump higher and extend arms fully")
    }
}

fn analyze_burpee(frame: &PoseFrame) -> Feedback {
    let Some(angle) = hip_angle(frame) else {
        return cannot_detect(Exercise::Burpee);
    };

    if angle < 60.0 {
        Feedback::good("Good burpee form: Low squat position")
    } else if angle < 90.0 {
        Feedback::improve("Improve burpee form: Lower your squat")
    } else {
        Feedback::poor("Poor burpee form: Squat lower and jump higher")
    }
}

fn analyze_high_knee(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::HighKnee);
    };

    if angle < 90.0 {
        Feedback::good("Good high knee form: Knee raised high")
    } else if angle < 120.0 {
        Feedback::improve("Improve high knee form: Raise your knee higher")
    } else {
        Feedback::poor("Poor high knee form: Lift your knee much higher")
    }
}

fn analyze_box_jump(frame: &PoseFrame) -> Feedback {
    let Some(angle) = knee_angle(frame) else {
        return cannot_detect(Exercise::BoxJump);
    };

    if angle < 90.0 {
        Feedback::good("Good box jump form: Deep squat before jump")
    } else if angle < 120.0 {
        Feedback::improve("Improve box jump form: Lower your squat before jumping")
    } else {
        Feedback::poor("Poor box jump form: Squat lower for more explosive jump")
    }
}

fn analyze_kettlebell_swing(frame: &PoseFrame) -> Feedback {
    let Some(angle) = hip_angle(frame) else {
        return cannot_detect(Exercise::KettlebellSwing);
    };

    if 160.0 < angle && angle < 180.0 {
        Feedback::good("Good kettlebell swing form: Hips fully extended at the top")
    } else if 140.0 < angle && angle <= 160.0 {
        Feedback::improve("Improve kettlebell swing form: Extend your hips more at the top")
    } else {
        Feedback::poor("Poor kettlebell swing form: Focus on hip hinge and full extension")
    }
}
