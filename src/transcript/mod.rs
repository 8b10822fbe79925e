mod extractor;
mod merger;
mod normalizer;
mod segmenter;
mod types;

pub use extractor::{extract_entries, extract_entry, ExtractionReport};
pub use merger::merge_entries;
pub use normalizer::{normalize_lines, WEBVTT_MARKER};
pub use segmenter::segment_blocks;
pub use types::{
    ParsedTranscript, RawBlock, SkippedBlock, Transcript, TranscriptEntry, TIMING_SEPARATOR,
    UNKNOWN_SPEAKER,
};

use log::info;

/// Run normalization, segmentation, extraction and merging over file content
pub fn parse_transcript(content: &str) -> ParsedTranscript {
    let lines = normalize_lines(content);
    let blocks = segment_blocks(&lines);
    info!("Found {} blocks in {} lines", blocks.len(), lines.len());

    let ExtractionReport { entries, skipped } = extract_entries(&blocks);
    let structured_count = entries.len();
    let transcript = merge_entries(entries);
    info!(
        "Merged {} entries into {} speaker turns",
        structured_count,
        transcript.len()
    );

    ParsedTranscript {
        transcript,
        structured_count,
        skipped,
    }
}
