mod processor;
mod sink;
mod source;

pub use processor::{process_file, ProcessOptions, ProcessSummary};
pub use sink::{DiagnosticSink, LogSink, WriterSink};
pub use source::{prompt_for_path, read_transcript_file, PATH_PROMPT};
