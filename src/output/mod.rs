mod format;
mod naming;
mod writer;

pub use format::OutputFormat;
pub use naming::{output_file_name, sanitize_filename, FALLBACK_NAME, TIMESTAMP_FORMAT};
pub use writer::{render_json, render_transcript, render_txt, write_transcript};
