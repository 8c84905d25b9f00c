// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Input source handling for pose frame streams.
//!
//! The analyzer core reacts to frames pushed to it; this module supplies the
//! CLI's frame stream from recorded JSONL files, one pose frame per line:
//!
//! ```text
//! {"joints": [{"name": "right_hip", "x": 0.5, "y": 0.62, "confidence": 0.97}, ...]}
//! ```
//!
//! A line with an empty joint list is a valid frame in which no person was
//! detected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AnalysisError, Result};
use crate::frame::PoseFrame;
use crate::joint::Joint;

/// Represents different pose frame sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read JSONL frames from standard input.
    Stdin,
    /// Read JSONL frames from a file.
    File(PathBuf),
}

impl Source {
    /// Get the path if this source has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(p) => Some(p),
            Self::Stdin => None,
        }
    }

    /// Open the source as a frame reader.
    ///
    /// # Returns
    ///
    /// * A [`FrameReader`] over the source's lines.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::SourceError`] if a file source cannot be
    /// opened.
    pub fn open(&self) -> Result<FrameReader<Box<dyn BufRead>>> {
        let reader: Box<dyn BufRead> = match self {
            Self::Stdin => Box::new(BufReader::new(io::stdin())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| {
                    AnalysisError::SourceError(format!("cannot open '{}': {e}", path.display()))
                })?;
                Box::new(BufReader::new(file))
            }
        };
        Ok(FrameReader::new(reader))
    }
}

impl From<&str> for Source {
    /// Create a source from a string: `-` means stdin, anything else a path.
    fn from(s: &str) -> Self {
        if s == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

/// One JSONL frame record.
#[derive(Debug, Deserialize)]
struct FrameRecord {
    joints: Vec<Joint>,
}

/// Iterator over pose frames parsed from a line-delimited JSON reader.
///
/// Blank lines are skipped; malformed lines surface as
/// [`AnalysisError::ParseError`] without ending the stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> FrameReader<R> {
    /// Create a frame reader over any buffered reader.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// The number of the most recently read line (1-based).
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<PoseFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let trimmed = buf.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let parsed = serde_json::from_str::<FrameRecord>(trimmed)
                        .map(|record| PoseFrame::from_joints(record.joints))
                        .map_err(|e| {
                            AnalysisError::ParseError(format!("line {}: {e}", self.line))
                        });
                    return Some(parsed);
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
