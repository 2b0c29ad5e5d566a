use crate::record::{LineOutcome, Record};
use std::collections::HashSet;

/// Checks `code text` lines the way the input-method engine loads its dictionary:
/// the first two whitespace-separated tokens, kept only when both exist.
///
/// The length limits and dedup go further than the engine's loader, which declares
/// limits but never applies them. Lengths here are counted in characters, not bytes.
#[derive(Debug)]
pub struct DictionaryCheck {
    code_len_limit: usize,
    text_len_limit: usize,
    seen: Option<HashSet<Record>>,
    loaded: usize,
    max_code_len: usize,
    max_text_len: usize,
}

impl Default for DictionaryCheck {
    fn default() -> Self {
        DictionaryCheck::new(usize::MAX, usize::MAX, false)
    }
}

impl DictionaryCheck {
    pub fn new(code_len_limit: usize, text_len_limit: usize, dedup: bool) -> Self {
        DictionaryCheck {
            code_len_limit,
            text_len_limit,
            seen: dedup.then(HashSet::new),
            loaded: 0,
            max_code_len: 0,
            max_text_len: 0,
        }
    }

    pub fn check(&mut self, line: &str) -> LineOutcome {
        let mut tokens = line.split_whitespace();
        let (Some(code), Some(text)) = (tokens.next(), tokens.next()) else {
            return LineOutcome::Skipped;
        };
        let (code_len, text_len) = (code.chars().count(), text.chars().count());
        if code_len > self.code_len_limit || text_len > self.text_len_limit {
            return LineOutcome::Skipped;
        }
        let Some(record) = Record::new(code, text) else {
            return LineOutcome::Skipped;
        };
        if let Some(seen) = &mut self.seen {
            if !seen.insert(record.clone()) {
                return LineOutcome::Skipped;
            }
        }
        self.loaded += 1;
        self.max_code_len = self.max_code_len.max(code_len);
        self.max_text_len = self.max_text_len.max(text_len);
        LineOutcome::Records(vec![record])
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Longest code and text kept so far, in characters.
    pub fn max_lens(&self) -> (usize, usize) {
        (self.max_code_len, self.max_text_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kept(check: &mut DictionaryCheck, line: &str) -> Option<String> {
        check.check(line).records().first().map(ToString::to_string)
    }

    #[test]
    fn takes_first_two_tokens() {
        let mut check = DictionaryCheck::default();
        assert_eq!(kept(&mut check, "zhong\t中"), Some("zhong\t中".to_string()));
        assert_eq!(kept(&mut check, "  nihao   你好  extra "), Some("nihao\t你好".to_string()));
        assert_eq!(kept(&mut check, "zhong"), None);
        assert_eq!(kept(&mut check, ""), None);
        assert_eq!(check.loaded(), 2);
        assert_eq!(check.max_lens(), (5, 2));
    }

    #[test]
    fn length_limits() {
        let mut check = DictionaryCheck::new(5, 1, false);
        assert!(kept(&mut check, "zhong\t中").is_some());
        assert!(kept(&mut check, "zhongguo\t中国").is_none());
        assert!(kept(&mut check, "nihao\t你好").is_none());
        assert_eq!(check.loaded(), 1);
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let mut check = DictionaryCheck::new(8, 2, false);
        // 中国 is six bytes of UTF-8 but two characters
        assert!(kept(&mut check, "zhongguo\t中国").is_some());
        assert!(kept(&mut check, "zhongguoren\t中国").is_none());
        assert!(kept(&mut check, "zgr\t中国人").is_none());
        assert_eq!(check.max_lens(), (8, 2));
    }

    #[test]
    fn dedup_only_when_asked() {
        let mut check = DictionaryCheck::new(usize::MAX, usize::MAX, true);
        assert!(kept(&mut check, "zhong\t中").is_some());
        assert!(kept(&mut check, "zhong 中").is_none());
        assert!(kept(&mut check, "zhong\t钟").is_some());

        let mut check = DictionaryCheck::default();
        assert!(kept(&mut check, "zhong\t中").is_some());
        assert!(kept(&mut check, "zhong\t中").is_some());
        assert_eq!(check.loaded(), 2);
    }
}
