use chrono::NaiveDate;
use transcript_parser::{
    parse_transcript_file, process_file, OutputFormat, ProcessOptions, SkippedBlock,
    TranscriptEntry,
};

fn testdata(name: &str) -> String {
    format!("{}/tests/testdata/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn entry(speaker: &str, start: &str, end: &str, text: &str) -> TranscriptEntry {
    TranscriptEntry {
        speaker: speaker.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        text: text.to_string(),
    }
}

fn run_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 5)
        .and_then(|date| date.and_hms_opt(23, 59, 1))
        .unwrap()
}

#[test]
fn test_parse_local_transcript_with_bom_and_crlf() {
    let parsed = parse_transcript_file(testdata("team_sync.vtt"));
    assert!(parsed.is_ok(), "Failed to parse transcript: {:?}", parsed.err());
    let parsed = parsed.unwrap();

    assert_eq!(parsed.structured_count, 5);
    assert!(parsed.skipped.is_empty());
    assert_eq!(
        parsed.transcript.entries(),
        &[
            entry(
                "Alice",
                "00:00:00.000",
                "00:00:04.000",
                "Hi there How are you"
            ),
            entry("Bob", "00:00:04.000", "00:00:06.000", "I'm good"),
            entry("Chloé", "00:00:06.000", "00:00:09.500", "Ça va bien, merci"),
            entry("Unknown", "00:00:09.500", "00:00:11.000", "Applause"),
        ]
    );
}

#[test]
fn test_parse_local_transcript_with_malformed_blocks() {
    let parsed = parse_transcript_file(testdata("malformed.vtt")).unwrap();

    // Block 2 has no timing line so its lines fall into block 1's text; the open-ended cue stays
    assert_eq!(parsed.structured_count, 3);
    assert!(parsed.skipped.is_empty());

    assert_eq!(
        parsed.transcript.entries(),
        &[
            entry("Dana", "00:00:01.000", "00:00:03.000", "Let's get started"),
            entry("Eli", "00:00:05.000", "", "Missing end time"),
            entry("Dana", "00:00:07.000", "00:00:08.000", "Sounds good"),
        ]
    );
    assert!(parsed
        .transcript
        .entries()
        .iter()
        .all(|e| !e.text.contains("broken timing")));
}

#[test]
fn test_json_output_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let options = ProcessOptions {
        input: testdata("team_sync.vtt").into(),
        format: OutputFormat::Json,
        output_dir: Some(dir.path().to_path_buf()),
    };

    let mut skipped: Vec<SkippedBlock> = Vec::new();
    let summary = process_file(&options, run_at(), &mut skipped).unwrap();
    assert!(skipped.is_empty());
    assert_eq!(
        summary.output_path,
        dir.path().join("team_sync_parsed_20241105_235901.json")
    );

    let written = std::fs::read_to_string(&summary.output_path).unwrap();
    assert!(written.contains("\"Chloé\""), "non-ASCII must stay literal");
    assert!(written.starts_with("[\n  {\n    \"speaker\""));

    let round_trip: Vec<TranscriptEntry> = serde_json::from_str(&written).unwrap();
    let expected = parse_transcript_file(testdata("team_sync.vtt"))
        .unwrap()
        .transcript
        .into_entries();
    assert_eq!(round_trip, expected);
    assert_eq!(round_trip.len(), summary.merged_count);
}

#[test]
fn test_txt_output_for_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let options = ProcessOptions {
        input: testdata("malformed.vtt").into(),
        format: OutputFormat::Txt,
        output_dir: Some(dir.path().to_path_buf()),
    };

    let mut skipped: Vec<SkippedBlock> = Vec::new();
    let summary = process_file(&options, run_at(), &mut skipped).unwrap();
    assert_eq!(summary.structured_count, 3);
    assert_eq!(summary.skipped_count, 0);
    assert!(skipped.is_empty());

    let written = std::fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        written,
        "Speaker: Dana\n\
         Time: 00:00:01.000 --> 00:00:03.000\n\
         Text: Let's get started\n\n\n\
         Speaker: Eli\n\
         Time: 00:00:05.000 --> \n\
         Text: Missing end time\n\n\n\
         Speaker: Dana\n\
         Time: 00:00:07.000 --> 00:00:08.000\n\
         Text: Sounds good\n\n\n"
    );
}
