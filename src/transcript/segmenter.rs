use super::types::{RawBlock, TIMING_SEPARATOR};
use log::{debug, trace};

fn is_timing_line(line: &str) -> bool {
    line.contains(TIMING_SEPARATOR)
}

/// Group normalized lines into identifier/timing/text blocks.
///
/// A block starts wherever the line after the cursor is a timing line. Text
/// collection stops at the next timing line or at the identifier right
/// before it. Lines that never pair with a timing line are skipped.
pub fn segment_blocks(lines: &[String]) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i + 1 < lines.len() {
        if !is_timing_line(&lines[i + 1]) {
            trace!("Skipping unpaired line {}: {:?}", i + 1, lines[i]);
            i += 1;
            continue;
        }

        let identifier = lines[i].clone();
        let timing = lines[i + 1].clone();
        i += 2;

        let mut text_lines = Vec::new();
        while i < lines.len() && !is_timing_line(&lines[i]) {
            // The line in front of a timing line belongs to the next block
            if i + 1 < lines.len() && is_timing_line(&lines[i + 1]) {
                break;
            }
            text_lines.push(lines[i].clone());
            i += 1;
        }

        blocks.push(RawBlock {
            identifier,
            timing,
            text_lines,
        });
    }

    debug!("Segmented {} blocks from {} lines", blocks.len(), lines.len());
    blocks
}
