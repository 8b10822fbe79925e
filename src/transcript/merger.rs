use super::types::{Transcript, TranscriptEntry};

impl TranscriptEntry {
    /// Extend this entry with a later utterance by the same speaker
    fn absorb(&mut self, next: TranscriptEntry) {
        self.end = next.end;
        self.text.push(' ');
        self.text.push_str(&next.text);
    }
}

impl Transcript {
    /// Append an entry, folding it into the last one when the speaker repeats
    pub fn push(&mut self, entry: TranscriptEntry) {
        match self.entries.last_mut() {
            Some(last) if last.speaker == entry.speaker => last.absorb(entry),
            _ => self.entries.push(entry),
        }
    }
}

impl Extend<TranscriptEntry> for Transcript {
    fn extend<I: IntoIterator<Item = TranscriptEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl FromIterator<TranscriptEntry> for Transcript {
    fn from_iter<I: IntoIterator<Item = TranscriptEntry>>(iter: I) -> Self {
        let mut transcript = Transcript::new();
        transcript.extend(iter);
        transcript
    }
}

/// Coalesce consecutive same-speaker entries in a single left-to-right pass
pub fn merge_entries<I>(entries: I) -> Transcript
where
    I: IntoIterator<Item = TranscriptEntry>,
{
    entries.into_iter().collect()
}
