//! Turns pinyin dictionary sources into `pinyin<TAB>text` lines for an input-method engine.
//!
//! Each filter is a function from one input line to a [`LineOutcome`]; [`process_line`]
//! writes the records and logs the failures.

pub mod corpus;
pub mod dict;
pub mod filter;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod transcribe;

pub use corpus::{annotate_line, hanzi_runs, is_hanzi};
pub use dict::DictionaryCheck;
pub use filter::{process_line, Handled, Tally};
pub use normalize::{normalizer, AsciiFold, Normalizer, ToneTable};
pub use parse::{codepoint, parse_codepoint_line, parse_phrase_line};
pub use record::{LineError, LineOutcome, Record};
pub use transcribe::{PhraseTranscriber, PinyinTranscriber, Transcriber};
