use super::sink::DiagnosticSink;
use super::source::read_transcript_file;
use crate::errors::TranscriptParserResult;
use crate::output::{output_file_name, write_transcript, OutputFormat};
use crate::transcript::parse_transcript;
use chrono::NaiveDateTime;
use log::info;
use std::path::PathBuf;

/// Where to read from and how to write the parsed transcript
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub input: PathBuf,
    pub format: OutputFormat,
    /// Directory for the output file; the bare file name is used when unset
    pub output_dir: Option<PathBuf>,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Entries structured before same-speaker merging
    pub structured_count: usize,
    pub merged_count: usize,
    pub skipped_count: usize,
    pub output_path: PathBuf,
}

/// Read, parse and write one transcript file.
///
/// Skipped blocks go to `sink` before anything is written. `now` provides the
/// output file name suffix.
pub fn process_file<D: DiagnosticSink + ?Sized>(
    options: &ProcessOptions,
    now: NaiveDateTime,
    sink: &mut D,
) -> TranscriptParserResult<ProcessSummary> {
    let content = read_transcript_file(&options.input)?;
    let parsed = parse_transcript(&content);

    for skipped in &parsed.skipped {
        sink.block_skipped(skipped);
    }

    let file_name = output_file_name(&options.input, options.format, now);
    let output_path = match &options.output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    };

    write_transcript(&output_path, &parsed.transcript, options.format)?;
    info!(
        "Processed {} into {}",
        options.input.display(),
        output_path.display()
    );

    Ok(ProcessSummary {
        structured_count: parsed.structured_count,
        merged_count: parsed.transcript.len(),
        skipped_count: parsed.skipped.len(),
        output_path,
    })
}
