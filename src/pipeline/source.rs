use crate::errors::{InputError, TranscriptParserResult};
use log::info;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const PATH_PROMPT: &str = "Please enter the name of the transcript file to parse: ";

/// Read the whole transcript file as UTF-8 text
pub fn read_transcript_file<P: AsRef<Path>>(path: P) -> TranscriptParserResult<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Ask for the input path on `output` and read one line from `input`
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> TranscriptParserResult<PathBuf> {
    output.write_all(PATH_PROMPT.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(PathBuf::from(answer.trim_end_matches(&['\r', '\n'][..])))
}
