use super::format::OutputFormat;
use crate::errors::{OutputError, TranscriptParserResult};
use crate::transcript::Transcript;
use log::info;
use std::fs;
use std::path::Path;

/// Serialize the transcript as an indented JSON array
pub fn render_json(transcript: &Transcript) -> TranscriptParserResult<String> {
    let json = serde_json::to_string_pretty(transcript).map_err(OutputError::from)?;
    Ok(json)
}

/// Render each entry as Speaker/Time/Text lines followed by two blank lines
pub fn render_txt(transcript: &Transcript) -> String {
    let mut out = String::new();
    for entry in transcript {
        out.push_str(&format!("Speaker: {}\n", entry.speaker));
        out.push_str(&format!("Time: {} --> {}\n", entry.start, entry.end));
        out.push_str(&format!("Text: {}\n", entry.text));
        out.push_str("\n\n");
    }
    out
}

pub fn render_transcript(
    transcript: &Transcript,
    format: OutputFormat,
) -> TranscriptParserResult<String> {
    match format {
        OutputFormat::Json => render_json(transcript),
        OutputFormat::Txt => Ok(render_txt(transcript)),
    }
}

/// Render and write the transcript to `path` in one go
pub fn write_transcript<P: AsRef<Path>>(
    path: P,
    transcript: &Transcript,
    format: OutputFormat,
) -> TranscriptParserResult<()> {
    let path = path.as_ref();
    let rendered = render_transcript(transcript, format)?;

    fs::write(path, rendered)
        .map_err(|e| OutputError::new(format!("{}: {}", path.display(), e)))?;

    info!(
        "Wrote {} entries as {} to {}",
        transcript.len(),
        format,
        path.display()
    );
    Ok(())
}
