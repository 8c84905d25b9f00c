// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the workouts library

use std::time::{Duration, Instant};

use ultralytics_workouts::{
    classify, compute_angle, Exercise, FormAnalyzer, FrameReader, Joint, JointName, PoseFrame,
    Tier, ALL_EXERCISES, MIN_CONFIDENCE,
};

fn joint(name: JointName, x: f32, y: f32, confidence: f32) -> Joint {
    Joint::new(name, x, y, confidence)
}

#[test]
fn test_squat_at_ninety_degrees_is_improve() {
    // hip=(0,0), knee=(0,-1), ankle=(1,-1): the knee angle is exactly 90
    // degrees, which is outside the good zone.
    let frame = PoseFrame::from_joints([
        joint(JointName::RightHip, 0.0, 0.0, 1.0),
        joint(JointName::RightKnee, 0.0, -1.0, 1.0),
        joint(JointName::RightAnkle, 1.0, -1.0, 1.0),
    ]);
    let feedback = classify(Exercise::Squat, &frame);
    assert_eq!(feedback.tier, Tier::Improve);
    assert_eq!(feedback.message, "Improve squat form: Lower your hips more");
}

#[test]
fn test_calf_raise_normalization() {
    // vertical distance 0.2 over a 0.1 reference: normalized 2.0, poor.
    let frame = PoseFrame::from_joints([
        joint(JointName::RightAnkle, 0.5, 0.4, 1.0),
        joint(JointName::RightKnee, 0.5, 0.6, 1.0),
    ]);
    let feedback = classify(Exercise::CalfRaise, &frame);
    assert_eq!(feedback.tier, Tier::Poor);
    assert_eq!(
        feedback.message,
        "Poor calf raise form: Lift your heels much higher"
    );
}

#[test]
fn test_low_confidence_yields_cannot_detect_for_every_exercise() {
    // All joints present but one used joint far below the confidence floor.
    let mut frame = PoseFrame::new();
    for name in ultralytics_workouts::ALL_JOINTS {
        frame.insert(joint(name, 0.5, 0.5, 0.05));
    }
    for exercise in ALL_EXERCISES {
        let feedback = classify(exercise, &frame);
        assert_eq!(feedback.tier, Tier::Undetected, "{exercise}");
        assert_eq!(
            feedback.message,
            format!("Cannot detect {} pose", exercise.to_string().to_lowercase())
        );
    }
}

#[test]
fn test_empty_frame_yields_no_person_detected() {
    for exercise in ALL_EXERCISES {
        let feedback = classify(exercise, &PoseFrame::new());
        assert_eq!(feedback.message, "No person detected");
        assert_eq!(feedback.tier, Tier::Undetected);
    }
}

#[test]
fn test_jumping_jack_good_scenario() {
    // Arm angle 160, leg angle 35: both above the good thresholds.
    let arm = (160.0f32).to_radians();
    let leg = (35.0f32).to_radians();
    let frame = PoseFrame::from_joints([
        joint(JointName::RightShoulder, 0.0, 1.0, 1.0),
        joint(JointName::RightElbow, 0.0, 0.0, 1.0),
        joint(JointName::RightWrist, arm.sin(), arm.cos(), 1.0),
        joint(JointName::RightHip, 2.0, 1.0, 1.0),
        joint(JointName::RightKnee, 2.0, 0.0, 1.0),
        joint(JointName::RightAnkle, 2.0 + leg.sin(), leg.cos(), 1.0),
    ]);
    let feedback = classify(Exercise::JumpingJack, &frame);
    assert_eq!(feedback.tier, Tier::Good);
    assert_eq!(
        feedback.message,
        "Good jumping jack form: Arms and legs extended"
    );
}

#[test]
fn test_angle_confidence_floor() {
    let a = joint(JointName::RightHip, 0.0, 1.0, MIN_CONFIDENCE + 0.01);
    let vertex = joint(JointName::RightKnee, 0.0, 0.0, 0.9);
    let c = joint(JointName::RightAnkle, 1.0, 0.0, 0.9);
    assert!(compute_angle(&a, &vertex, &c).is_some());

    let weak = joint(JointName::RightHip, 0.0, 1.0, 0.05);
    assert!(compute_angle(&weak, &vertex, &c).is_none());
}

#[test]
fn test_classifier_is_deterministic_across_exercises() {
    let mut frame = PoseFrame::new();
    for (i, name) in ultralytics_workouts::ALL_JOINTS.iter().enumerate() {
        let t = i as f32 / 16.0;
        frame.insert(joint(*name, 0.2 + t * 0.5, 0.1 + t * 0.7, 0.8));
    }
    for exercise in ALL_EXERCISES {
        let first = classify(exercise, &frame);
        let second = classify(exercise, &frame);
        assert_eq!(first, second);
    }
}

#[test]
fn test_analyzer_throttles_and_switches() {
    let frame = PoseFrame::from_joints([
        joint(JointName::RightHip, 0.0, 1.0, 1.0),
        joint(JointName::RightKnee, 0.0, 0.0, 1.0),
        joint(JointName::RightAnkle, 1.0, 0.0, 1.0),
    ]);

    let mut analyzer =
        FormAnalyzer::new(Exercise::Squat).with_interval(Duration::from_millis(500));
    let start = Instant::now();

    let first = analyzer.process_at(&frame, start).unwrap();
    assert_eq!(first.message, "Improve squat form: Lower your hips more");

    // Too soon: dropped, not queued.
    assert!(analyzer
        .process_at(&frame, start + Duration::from_millis(250))
        .is_none());

    analyzer.set_exercise(Exercise::WallSit);
    let second = analyzer
        .process_at(&frame, start + Duration::from_millis(500))
        .unwrap();
    assert_eq!(second.message, "Good wall sit form: Knees at 90 degrees");
}

#[test]
fn test_jsonl_stream_end_to_end() {
    let data = concat!(
        r#"{"joints": [{"name": "right_hip", "x": 0.0, "y": 1.0, "confidence": 0.9}, {"name": "right_knee", "x": 0.0, "y": 0.0, "confidence": 0.9}, {"name": "right_ankle", "x": 1.0, "y": 0.0, "confidence": 0.9}]}"#,
        "\n",
        r#"{"joints": []}"#,
        "\n",
    );
    let reader = FrameReader::new(data.as_bytes());
    let feedback: Vec<_> = reader
        .map(|frame| classify(Exercise::Squat, &frame.unwrap()))
        .collect();

    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0].tier, Tier::Improve);
    assert_eq!(feedback[1].message, "No person detected");
}
