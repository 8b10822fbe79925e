use super::format::OutputFormat;
use chrono::NaiveDateTime;
use std::path::Path;

/// Characters that are not allowed in generated file names
const RESERVED_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Name used when sanitization leaves nothing behind
pub const FALLBACK_NAME: &str = "transcript";

/// Timestamp suffix layout, e.g. `20240131_154500`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Replace reserved characters with `_`, then trim whitespace and dots
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let cleaned = replaced.trim().trim_matches('.');
    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Build `<sanitized stem>_parsed_<YYYYMMDD_HHMMSS>.<ext>` for an input path
pub fn output_file_name(input: &Path, format: OutputFormat, timestamp: NaiveDateTime) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    format!(
        "{}_parsed_{}.{}",
        sanitize_filename(&stem),
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}
