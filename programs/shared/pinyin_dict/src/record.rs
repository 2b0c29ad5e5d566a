use std::fmt;
use std::num::ParseIntError;
use std::str::Utf8Error;
use thiserror::Error;

/// One output line: `pinyin<TAB>text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub pinyin: String,
    pub text: String,
}

impl Record {
    /// `None` unless both sides have something in them.
    pub fn new(pinyin: impl Into<String>, text: impl Into<String>) -> Option<Self> {
        let (pinyin, text) = (pinyin.into(), text.into());
        if pinyin.is_empty() || text.is_empty() {
            None
        } else {
            Some(Record { pinyin, text })
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.pinyin, self.text)
    }
}

#[derive(Debug, Error)]
pub enum LineError {
    #[error("missing ':' delimiter")]
    MissingDelimiter,
    #[error("invalid codepoint {0:?}: {1}")]
    InvalidCodepoint(String, #[source] ParseIntError),
    #[error("U+{0:X} is not a unicode scalar value")]
    NotAScalar(u32),
    #[error("invalid utf-8")]
    InvalidUtf8(#[from] Utf8Error),
}

/// What a single input line turned into.
#[derive(Debug)]
pub enum LineOutcome {
    Records(Vec<Record>),
    /// Blank, comment-only, or nothing left after normalization.
    Skipped,
    Failed(LineError),
}

impl LineOutcome {
    pub fn from_records(records: Vec<Record>) -> Self {
        if records.is_empty() {
            LineOutcome::Skipped
        } else {
            LineOutcome::Records(records)
        }
    }

    pub fn records(&self) -> &[Record] {
        match self {
            LineOutcome::Records(records) => records,
            _ => &[],
        }
    }
}

impl From<Option<Record>> for LineOutcome {
    fn from(record: Option<Record>) -> Self {
        LineOutcome::from_records(record.into_iter().collect())
    }
}

impl From<LineError> for LineOutcome {
    fn from(e: LineError) -> Self {
        LineOutcome::Failed(e)
    }
}

/// Drops everything from the first `#` on, then trims.
pub fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim()
}

#[test]
fn test_record() {
    assert_eq!(Record::new("zhong", "中").unwrap().to_string(), "zhong\t中");
    assert!(Record::new("", "中").is_none());
    assert!(Record::new("zhong", "").is_none());
    assert!(matches!(LineOutcome::from_records(vec![]), LineOutcome::Skipped));
    assert_eq!(strip_comment("  中:zhōng # middle # more"), "中:zhōng");
    assert_eq!(strip_comment("# only a comment"), "");
}
