// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-session form analysis.
//!
//! [`FormAnalyzer`] wraps the stateless [`classify`](crate::classify)
//! function with the session policy of a live camera feed: a selected
//! exercise that can change mid-session, and frame throttling so analysis
//! runs at most once per interval. Frames arriving faster than the interval
//! are dropped, not queued.

use std::time::{Duration, Instant};

use crate::classifier::classify;
use crate::exercise::Exercise;
use crate::feedback::Feedback;
use crate::frame::PoseFrame;

/// Default minimum interval between analyzed frames.
pub const DEFAULT_ANALYSIS_INTERVAL: Duration = Duration::from_millis(500);

/// Analyzes a stream of pose frames for one exercise session.
///
/// Classification itself stays stateless; the analyzer only tracks the
/// selected exercise and the time of the last analyzed frame. There is no
/// rep counting and no temporal smoothing: every analyzed frame is evaluated
/// independently, and a failed detection simply yields an undetected result
/// until the next analyzed frame.
///
/// # Example
///
/// ```
/// use ultralytics_workouts::{Exercise, FormAnalyzer, PoseFrame};
///
/// let mut analyzer = FormAnalyzer::new(Exercise::Squat);
/// let feedback = analyzer.process(&PoseFrame::new());
/// assert_eq!(feedback.unwrap().message, "No person detected");
/// ```
#[derive(Debug)]
pub struct FormAnalyzer {
    exercise: Exercise,
    interval: Duration,
    last_analysis: Option<Instant>,
}

impl FormAnalyzer {
    /// Create an analyzer for the given exercise with the default interval.
    #[must_use]
    pub const fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            interval: DEFAULT_ANALYSIS_INTERVAL,
            last_analysis: None,
        }
    }

    /// Set the minimum interval between analyzed frames.
    ///
    /// # Arguments
    ///
    /// * `interval` - Frames arriving sooner than this after the previous
    ///   analysis are dropped.
    ///
    /// # Returns
    ///
    /// * The modified `FormAnalyzer`.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Get the currently selected exercise.
    #[must_use]
    pub const fn exercise(&self) -> Exercise {
        self.exercise
    }

    /// Switch the selected exercise mid-session.
    ///
    /// Takes effect from the next analyzed frame; the throttle clock is not
    /// reset.
    pub fn set_exercise(&mut self, exercise: Exercise) {
        self.exercise = exercise;
    }

    /// Get the configured analysis interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Process one incoming frame, stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `frame` - The pose frame pushed by the estimator.
    ///
    /// # Returns
    ///
    /// * `Some(Feedback)` if the frame was analyzed, or `None` if it arrived
    ///   inside the throttle interval and was dropped.
    pub fn process(&mut self, frame: &PoseFrame) -> Option<Feedback> {
        self.process_at(frame, Instant::now())
    }

    /// Process one incoming frame with an explicit arrival time.
    ///
    /// # Arguments
    ///
    /// * `frame` - The pose frame pushed by the estimator.
    /// * `now` - The frame's arrival time.
    ///
    /// # Returns
    ///
    /// * `Some(Feedback)` if the frame was analyzed, or `None` if dropped.
    pub fn process_at(&mut self, frame: &PoseFrame, now: Instant) -> Option<Feedback> {
        if let Some(last) = self.last_analysis {
            if now.duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_analysis = Some(now);
        Some(classify(self.exercise, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Tier;
    use crate::joint::{Joint, JointName};

    fn squat_frame() -> PoseFrame {
        PoseFrame::from_joints([
            Joint::new(JointName::RightHip, 0.0, 1.0, 1.0),
            Joint::new(JointName::RightKnee, 0.0, 0.0, 1.0),
            Joint::new(JointName::RightAnkle, 1.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn test_first_frame_is_analyzed() {
        let mut analyzer = FormAnalyzer::new(Exercise::Squat);
        let feedback = analyzer.process_at(&squat_frame(), Instant::now());
        assert!(feedback.is_some());
    }

    #[test]
    fn test_frames_inside_interval_are_dropped() {
        let mut analyzer = FormAnalyzer::new(Exercise::Squat);
        let start = Instant::now();
        assert!(analyzer.process_at(&squat_frame(), start).is_some());
        assert!(analyzer
            .process_at(&squat_frame(), start + Duration::from_millis(100))
            .is_none());
        assert!(analyzer
            .process_at(&squat_frame(), start + Duration::from_millis(499))
            .is_none());
        assert!(analyzer
            .process_at(&squat_frame(), start + Duration::from_millis(500))
            .is_some());
    }

    #[test]
    fn test_dropped_frames_do_not_reset_the_clock() {
        let mut analyzer =
            FormAnalyzer::new(Exercise::Squat).with_interval(Duration::from_secs(1));
        let start = Instant::now();
        assert!(analyzer.process_at(&squat_frame(), start).is_some());
        // A burst of early frames is dropped without pushing back the next
        // eligible analysis time.
        for ms in [200, 400, 600, 800, 999] {
            assert!(analyzer
                .process_at(&squat_frame(), start + Duration::from_millis(ms))
                .is_none());
        }
        assert!(analyzer
            .process_at(&squat_frame(), start + Duration::from_secs(1))
            .is_some());
    }

    #[test]
    fn test_exercise_switch_mid_session() {
        let mut analyzer =
            FormAnalyzer::new(Exercise::Squat).with_interval(Duration::ZERO);
        let start = Instant::now();
        let first = analyzer.process_at(&squat_frame(), start).unwrap();
        assert!(first.message.contains("squat"));

        analyzer.set_exercise(Exercise::WallSit);
        assert_eq!(analyzer.exercise(), Exercise::WallSit);
        let second = analyzer
            .process_at(&squat_frame(), start + Duration::from_millis(1))
            .unwrap();
        assert!(second.message.contains("wall sit"));
    }

    #[test]
    fn test_empty_frame_reports_no_person() {
        let mut analyzer = FormAnalyzer::new(Exercise::Plank);
        let feedback = analyzer.process(&PoseFrame::new()).unwrap();
        assert_eq!(feedback.tier, Tier::Undetected);
        assert_eq!(feedback.message, "No person detected");
    }
}
