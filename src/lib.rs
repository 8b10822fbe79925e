pub mod transcript;
pub use transcript::{
    parse_transcript, ParsedTranscript, RawBlock, SkippedBlock, Transcript, TranscriptEntry,
};

pub mod output;
pub use output::{output_file_name, sanitize_filename, write_transcript, OutputFormat};

pub mod pipeline;
pub use pipeline::{
    process_file, prompt_for_path, read_transcript_file, DiagnosticSink, LogSink, ProcessOptions,
    ProcessSummary, WriterSink,
};

pub mod errors;
pub use errors::{
    BlockError, InputError, OutputError, TranscriptParserError, TranscriptParserResult,
};

/// Read a transcript file and run the full parse/merge engine over it
pub fn parse_transcript_file<P: AsRef<std::path::Path>>(
    path: P,
) -> TranscriptParserResult<ParsedTranscript> {
    let content = read_transcript_file(path)?;
    Ok(parse_transcript(&content))
}
