// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Ultralytics Workouts Library
//!
//! Exercise form feedback from human body pose keypoints, written in Rust.
//! Given a selected exercise and a stream of detected joints (2D normalized
//! positions plus confidence scores), the library computes joint angles and
//! classifies each frame's form into qualitative tiers with a human-readable
//! feedback message.
//!
//! Pose detection itself is an external collaborator: run any pose model
//! (e.g. a YOLO pose model) and push its keypoints in, one frame at a time.
//!
//! ## Features
//!
//! - **17 Exercises** - Squat, Push-up, Lunge, Plank, Glute Bridge, Calf
//!   Raise, Wall Sit, Shoulder Press, Tricep Dip, Bicycle Crunch, Superman,
//!   Mountain Climber, Jumping Jack, Burpee, High Knee, Box Jump, Kettlebell
//!   Swing
//! - **Closed Dispatch** - Exercises are a closed enum with exhaustive
//!   matching; there is no "unrecognized exercise" runtime path
//! - **Tiered Feedback** - Every analyzed frame yields a
//!   Good/Improve/Poor/Undetected tier plus a display message
//! - **Stateless Core** - Classification is a pure function of
//!   (exercise, frame); sessions add only throttling on top
//! - **COCO Keypoints** - Accepts named joints or (K, 2|3) keypoint arrays
//!   in COCO order
//!
//! ## Quick Start (Library)
//!
//! ```
//! use ultralytics_workouts::{classify, Exercise, Joint, JointName, PoseFrame, Tier};
//!
//! let frame = PoseFrame::from_joints([
//!     Joint::new(JointName::RightHip, 0.42, 0.58, 0.98),
//!     Joint::new(JointName::RightKnee, 0.45, 0.40, 0.97),
//!     Joint::new(JointName::RightAnkle, 0.47, 0.20, 0.95),
//! ]);
//!
//! let feedback = classify(Exercise::Squat, &frame);
//! assert_ne!(feedback.tier, Tier::Undetected);
//! println!("{}", feedback.message);
//! ```
//!
//! ## Live Sessions
//!
//! For a live camera feed, wrap the classifier in a [`FormAnalyzer`]: it
//! throttles analysis to once per interval (0.5 s by default, dropping
//! faster frames) and lets the selected exercise change mid-session:
//!
//! ```
//! use ultralytics_workouts::{Exercise, FormAnalyzer, PoseFrame};
//!
//! let mut analyzer = FormAnalyzer::new(Exercise::Plank);
//! // push frames as the estimator produces them
//! if let Some(feedback) = analyzer.process(&PoseFrame::new()) {
//!     println!("{feedback}");
//! }
//! ```
//!
//! ## CLI Usage
//!
//! The `ultralytics-workouts` CLI analyzes recorded pose streams (JSONL, one
//! frame per line):
//!
//! ```bash
//! # Analyze a recording
//! ultralytics-workouts analyze --exercise squat --source frames.jsonl
//!
//! # Pipe frames on stdin
//! cat frames.jsonl | ultralytics-workouts analyze --exercise "wall sit"
//!
//! # List supported exercises
//! ultralytics-workouts list
//! ```
//!
//! **CLI Options:**
//!
//! | Option | Short | Description | Default |
//! |--------|-------|-------------|---------|
//! | `--exercise` | `-e` | Exercise to evaluate | `Squat` |
//! | `--source` | `-s` | JSONL pose frame file, `-` for stdin | `-` |
//! | `--verbose` | | Show per-frame feedback | `true` |
//!
//! ## Frame Format
//!
//! Each JSONL line is one frame. Joint positions are normalized to [0, 1]
//! with the origin at the bottom-left of the image:
//!
//! ```json
//! {"joints": [{"name": "right_hip", "x": 0.42, "y": 0.58, "confidence": 0.98}]}
//! ```
//!
//! An empty joint list is a frame in which no person was detected.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`joint`] | [`JointName`] keypoint vocabulary and [`Joint`] values |
//! | [`frame`] | [`PoseFrame`] per-frame joint container |
//! | [`angle`] | [`compute_angle`] joint-triple angle calculator |
//! | [`exercise`] | [`Exercise`] closed enum of supported exercises |
//! | [`classifier`] | [`classify`] per-exercise threshold rules |
//! | [`feedback`] | [`Feedback`] and [`Tier`] result types |
//! | [`analyzer`] | [`FormAnalyzer`] session throttling |
//! | [`source`] | JSONL frame sources ([`Source`], [`FrameReader`]) |
//! | [`error`] | Error types ([`AnalysisError`], [`Result`]) |
//!
//! ## License
//!
//! This project is dual-licensed under AGPL-3.0 for open-source use or an
//! [Ultralytics Enterprise License](https://ultralytics.com/license) for
//! commercial applications.

// Modules
pub mod analyzer;
pub mod angle;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod exercise;
pub mod feedback;
pub mod frame;
pub mod joint;
pub mod source;

// Re-export main types for convenience
pub use analyzer::{FormAnalyzer, DEFAULT_ANALYSIS_INTERVAL};
pub use angle::{compute_angle, frame_angle, MIN_CONFIDENCE};
pub use classifier::{classify, NO_PERSON_DETECTED};
pub use error::{AnalysisError, Result};
pub use exercise::{Exercise, ALL_EXERCISES};
pub use feedback::{Feedback, Tier};
pub use frame::PoseFrame;
pub use joint::{Joint, JointName, ALL_JOINTS, NUM_JOINTS};
pub use source::{FrameReader, Source};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
