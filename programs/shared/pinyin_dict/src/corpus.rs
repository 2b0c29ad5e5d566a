use crate::normalize::Normalizer;
use crate::record::{LineOutcome, Record};
use crate::transcribe::Transcriber;

/// Only the main CJK Unified Ideographs block counts.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9EFF}').contains(&c)
}

/// Maximal runs of [`is_hanzi`] characters; everything else just separates them.
pub fn hanzi_runs(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !is_hanzi(c)).filter(|run| !run.is_empty())
}

/// Pairs every hanzi run in a line of free text with its toneless pinyin.
pub fn annotate_line(line: &str, transcriber: &dyn Transcriber, normalizer: &dyn Normalizer) -> LineOutcome {
    let records = hanzi_runs(line)
        .filter_map(|run| Record::new(normalizer.normalize(&transcriber.transcribe(run, "")), run))
        .collect();
    LineOutcome::from_records(records)
}
