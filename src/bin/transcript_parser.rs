use chrono::Local;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use transcript_parser::{
    process_file, prompt_for_path, InputError, OutputFormat, ProcessOptions,
    TranscriptParserError, WriterSink,
};

#[derive(Parser)]
#[command(
    name = "transcript-parser",
    version,
    about = "Parse VTT-style transcripts into clean TXT/JSON"
)]
struct Cli {
    /// Input transcript file (prompted for when omitted)
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Txt)]
    format: OutputFormat,

    /// Directory to write the parsed transcript into (defaults to the current directory)
    #[arg(short, long, env = "TRANSCRIPT_PARSER_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

fn report_failure(err: &TranscriptParserError) {
    match err {
        TranscriptParserError::Input(e @ InputError::NotFound { .. }) => println!("Error: {}", e),
        TranscriptParserError::Input(e) => println!("Error reading file: {}", e),
        TranscriptParserError::Output(e) => println!("Error saving output file: {}", e),
        TranscriptParserError::Other(e) => println!("Error reading file name: {}", e),
        other => println!("Error: {}", other),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let input = match cli.file {
        Some(path) => path,
        None => {
            println!("Transcript Parser Tool");
            println!("=====================\n");
            match prompt_for_path(&mut io::stdin().lock(), &mut io::stdout()) {
                Ok(path) => path,
                Err(e) => {
                    report_failure(&e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let options = ProcessOptions {
        input,
        format: cli.format,
        output_dir: cli.output_dir,
    };

    let mut sink = WriterSink::new(io::stdout());
    match process_file(&options, Local::now().naive_local(), &mut sink) {
        Ok(summary) => {
            println!("\nProcessing complete!");
            println!("Processed {} transcript entries.", summary.structured_count);
            println!("Output saved to: {}", summary.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
