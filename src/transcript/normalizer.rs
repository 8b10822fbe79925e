use log::debug;

/// Format marker that may open a WebVTT file
pub const WEBVTT_MARKER: &str = "WEBVTT";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split raw file content into trimmed, non-empty lines.
///
/// A byte-order mark is stripped from the start of each line, and a first
/// line equal to `WEBVTT` (any case) is dropped. Empty input yields no lines.
pub fn normalize_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content
        .split(|c: char| c == '\n' || c == '\r')
        .map(|line| line.trim().trim_start_matches(BYTE_ORDER_MARK).trim_start())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case(WEBVTT_MARKER))
    {
        debug!("Dropping leading {} marker", WEBVTT_MARKER);
        lines.remove(0);
    }

    lines
}
