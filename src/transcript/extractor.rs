use super::types::{RawBlock, SkippedBlock, TranscriptEntry, TIMING_SEPARATOR, UNKNOWN_SPEAKER};
use crate::errors::BlockError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// Only the first `<v NAME>...</v>` span at the start of the text counts
static VOICE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^<v\s+(.+?)>(.+?)</v>").expect("Invalid regex"));

/// Entries that survived extraction plus the blocks that did not
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub entries: Vec<TranscriptEntry>,
    pub skipped: Vec<SkippedBlock>,
}

/// Split a timing line into trimmed start and end timestamps
fn split_timing(timing: &str) -> Result<(String, String), BlockError> {
    let (start, end) =
        timing
            .split_once(TIMING_SEPARATOR)
            .ok_or_else(|| BlockError::MissingSeparator {
                timing: timing.to_string(),
            })?;

    Ok((start.trim().to_string(), end.trim().to_string()))
}

/// Pull speaker and text out of the joined text of a block
fn split_voice(text: &str) -> (String, String) {
    match VOICE_TAG_RE.captures(text) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (UNKNOWN_SPEAKER.to_string(), text.to_string()),
    }
}

/// Turn one block into a transcript entry
pub fn extract_entry(block: &RawBlock) -> Result<TranscriptEntry, BlockError> {
    let (start, end) = split_timing(&block.timing)?;

    let joined = block.text_lines.join(" ");
    let (speaker, text) = split_voice(joined.trim());

    Ok(TranscriptEntry {
        speaker,
        start,
        end,
        text,
    })
}

/// Extract every block, collecting failures instead of stopping at them
pub fn extract_entries(blocks: &[RawBlock]) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    for (idx, block) in blocks.iter().enumerate() {
        match extract_entry(block) {
            Ok(entry) => report.entries.push(entry),
            Err(error) => {
                debug!("Block #{} failed extraction: {}", idx + 1, error);
                report.skipped.push(SkippedBlock {
                    ordinal: idx + 1,
                    identifier: block.identifier.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        "Structured {} entries, skipped {} blocks",
        report.entries.len(),
        report.skipped.len()
    );
    report
}
