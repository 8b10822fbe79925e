use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Enumeration of all possible errors that can occur in the transcript parser
#[derive(Debug)]
pub enum TranscriptParserError {
    Input(InputError),
    Output(OutputError),
    Block(BlockError),
    Other(io::Error),
}

/// Failures while loading the transcript file
#[derive(Debug)]
pub enum InputError {
    /// The input path does not exist
    NotFound { path: PathBuf },
    /// The file exists but could not be read as UTF-8 text
    Unreadable { path: PathBuf, source: io::Error },
}

/// Serialization or write failures for the parsed transcript
#[derive(Debug)]
pub struct OutputError {
    pub message: String,
}

impl OutputError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a single block could not be turned into a transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// The timing line has no `-->` separator
    MissingSeparator { timing: String },
}

impl fmt::Display for TranscriptParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptParserError::Other(err) => write!(f, "I/O error: {}", err),
            TranscriptParserError::Input(err) => write!(f, "Input error: {}", err),
            TranscriptParserError::Output(err) => write!(f, "Output error: {}", err),
            TranscriptParserError::Block(err) => write!(f, "Block error: {}", err),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFound { path } => write!(f, "File '{}' not found.", path.display()),
            InputError::Unreadable { source, .. } => write!(f, "{}", source),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::MissingSeparator { timing } => {
                write!(f, "Invalid timestamp format -> '{}'", timing)
            }
        }
    }
}

impl Error for TranscriptParserError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranscriptParserError::Input(err) => Some(err),
            TranscriptParserError::Output(err) => Some(err),
            TranscriptParserError::Block(err) => Some(err),
            TranscriptParserError::Other(err) => Some(err),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::NotFound { .. } => None,
            InputError::Unreadable { source, .. } => Some(source),
        }
    }
}

impl Error for OutputError {}
impl Error for BlockError {}

// Conversion implementations
impl From<io::Error> for TranscriptParserError {
    fn from(err: io::Error) -> Self {
        TranscriptParserError::Other(err)
    }
}

impl From<InputError> for TranscriptParserError {
    fn from(err: InputError) -> Self {
        TranscriptParserError::Input(err)
    }
}

impl From<OutputError> for TranscriptParserError {
    fn from(err: OutputError) -> Self {
        TranscriptParserError::Output(err)
    }
}

impl From<BlockError> for TranscriptParserError {
    fn from(err: BlockError) -> Self {
        TranscriptParserError::Block(err)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        OutputError::new(format!("JSON serialization failed: {}", err))
    }
}

// Type alias for Result with TranscriptParserError
pub type TranscriptParserResult<T> = Result<T, TranscriptParserError>;
