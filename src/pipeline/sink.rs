use crate::transcript::SkippedBlock;
use log::warn;
use std::io::Write;

/// Receives blocks that were dropped during extraction
pub trait DiagnosticSink {
    fn block_skipped(&mut self, skipped: &SkippedBlock);
}

/// Collects skipped blocks for later inspection
impl DiagnosticSink for Vec<SkippedBlock> {
    fn block_skipped(&mut self, skipped: &SkippedBlock) {
        self.push(skipped.clone());
    }
}

/// Reports skipped blocks through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn block_skipped(&mut self, skipped: &SkippedBlock) {
        warn!(
            "Skipping block #{} ({}): {}",
            skipped.ordinal, skipped.identifier, skipped.error
        );
    }
}

/// Writes one `⚠️ Skipping block #n: cause` line per skipped block
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn block_skipped(&mut self, skipped: &SkippedBlock) {
        // Write failures are logged, never propagated
        if let Err(e) = writeln!(
            self.out,
            "⚠️ Skipping block #{}: {}",
            skipped.ordinal, skipped.error
        ) {
            warn!("Could not report skipped block #{}: {}", skipped.ordinal, e);
        }
    }
}
