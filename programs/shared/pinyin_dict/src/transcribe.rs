use crate::record::strip_comment;
use pinyin::ToPinyin;
use std::collections::HashMap;
use std::io::{self, BufRead};

/// Turns Chinese text into tone-marked pinyin.
pub trait Transcriber {
    /// Syllables are joined with `separator`.
    fn transcribe(&self, hanzi: &str, separator: &str) -> String;
}

/// Backed by the `pinyin` crate's tables, using each character's most common reading.
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinTranscriber;

impl Transcriber for PinyinTranscriber {
    fn transcribe(&self, hanzi: &str, separator: &str) -> String {
        let syllables: Vec<String> = hanzi.chars().map(char_reading).collect();
        syllables.join(separator)
    }
}

fn char_reading(c: char) -> String {
    match c.to_pinyin() {
        Some(pinyin) => pinyin.with_tone().to_string(),
        None => {
            log::debug!("no reading for {:?}, keeping it as is", c);
            c.to_string()
        }
    }
}

static BUILTIN_PHRASES: &str = include_str!("../data/phrases.txt");

/// Longest-match over a word table, one character at a time where no word fits.
///
/// Gets polyphonic characters right inside the words it knows (`银行` is `yín háng`, not `yín xíng`).
#[derive(Debug, Default, Clone)]
pub struct PhraseTranscriber {
    phrases: HashMap<String, Vec<String>>,
    longest: usize,
}

impl PhraseTranscriber {
    pub fn new() -> Self {
        PhraseTranscriber::default()
    }

    /// Preloaded with the common words bundled with the crate.
    pub fn builtin() -> Self {
        let mut transcriber = PhraseTranscriber::new();
        for line in BUILTIN_PHRASES.lines() {
            transcriber.insert_line(line);
        }
        transcriber
    }

    /// Adds `word[_tag]:syllable syllable` lines; later entries replace earlier ones.
    /// Returns how many words were taken.
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut added = 0;
        for line in reader.lines() {
            if self.insert_line(&line?) {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn insert(&mut self, word: &str, syllables: Vec<String>) {
        self.longest = self.longest.max(word.chars().count());
        self.phrases.insert(word.to_string(), syllables);
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    fn insert_line(&mut self, line: &str) -> bool {
        let Some((word, pinyin)) = strip_comment(line).split_once(':') else {
            return false;
        };
        let word = word.split('_').next().unwrap_or_default().trim();
        let syllables: Vec<String> = pinyin.split_whitespace().map(str::to_string).collect();
        if word.is_empty() || syllables.is_empty() {
            return false;
        }
        self.insert(word, syllables);
        true
    }
}

impl Transcriber for PhraseTranscriber {
    fn transcribe(&self, hanzi: &str, separator: &str) -> String {
        let chars: Vec<char> = hanzi.chars().collect();
        let mut syllables = Vec::with_capacity(chars.len());
        let mut i = 0;
        'outer: while i < chars.len() {
            for len in (1..=self.longest.min(chars.len() - i)).rev() {
                let word: String = chars[i..i + len].iter().collect();
                if let Some(found) = self.phrases.get(&word) {
                    syllables.extend(found.iter().cloned());
                    i += len;
                    continue 'outer;
                }
            }
            syllables.push(char_reading(chars[i]));
            i += 1;
        }
        syllables.join(separator)
    }
}
