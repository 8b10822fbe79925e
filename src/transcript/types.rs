use crate::errors::BlockError;
use serde::{Deserialize, Serialize};

/// Token separating the start and end timestamps on a timing line
pub const TIMING_SEPARATOR: &str = "-->";

/// Speaker assigned to blocks without a voice tag
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// One cue as found in the source: identifier line, timing line and text lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub identifier: String,
    pub timing: String,
    pub text_lines: Vec<String>,
}

/// A speaker-attributed utterance with opaque start/end timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: String,
    pub start: String,
    pub end: String,
    pub text: String,
}

/// Ordered entries where no two neighbours share a speaker.
///
/// Entries can only be added through [`Transcript::push`], which merges an
/// entry into the previous one when the speakers match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    pub(super) entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<TranscriptEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A block that failed extraction, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 1-based position among the segmented blocks
    pub ordinal: usize,
    pub identifier: String,
    pub error: BlockError,
}

/// Result of running the whole engine over one file's content
#[derive(Debug, Clone, Default)]
pub struct ParsedTranscript {
    pub transcript: Transcript,
    /// Entries successfully structured before merging
    pub structured_count: usize,
    pub skipped: Vec<SkippedBlock>,
}
