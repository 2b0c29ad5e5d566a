//! Parsers for the two dictionary line shapes.
//!
//! Word phrases look like `word[_tag]:pin yin[ #comment]`, single characters
//! like `U+HEX:syllable,syllable[ #comment]`.

use crate::normalize::Normalizer;
use crate::record::{strip_comment, LineError, LineOutcome, Record};

/// Length of the `U+` in front of a codepoint.
const CODEPOINT_PREFIX: usize = 2;

/// `中_noun:zhōng # middle` becomes `zhong<TAB>中`.
///
/// Lines without a `:` are not dictionary entries and are skipped, not reported.
pub fn parse_phrase_line(line: &str, normalizer: &dyn Normalizer) -> LineOutcome {
    let line = strip_comment(line);
    let Some((word, pinyin)) = line.split_once(':') else {
        return LineOutcome::Skipped;
    };
    let word = word.split('_').next().unwrap_or_default().trim();
    let pinyin: String = normalizer.normalize(pinyin).chars().filter(|&c| c != ' ').collect();
    Record::new(pinyin, word).into()
}

/// `U+4E2D:zhōng,zhong4` becomes one record per reading, all for `中`.
pub fn parse_codepoint_line(line: &str, normalizer: &dyn Normalizer) -> LineOutcome {
    let line = strip_comment(line);
    if line.is_empty() {
        return LineOutcome::Skipped;
    }
    let Some((code, readings)) = line.split_once(':') else {
        return LineError::MissingDelimiter.into();
    };
    let c = match codepoint(code) {
        Ok(c) => c,
        Err(e) => return e.into(),
    };
    let records = readings
        .split(',')
        .map(str::trim)
        .filter(|syllable| !syllable.is_empty())
        .filter_map(|syllable| Record::new(normalizer.normalize(syllable), c))
        .collect();
    LineOutcome::from_records(records)
}

/// Decodes the hex after the `U+` prefix into the character it names.
pub fn codepoint(code: &str) -> Result<char, LineError> {
    let hex = code
        .char_indices()
        .nth(CODEPOINT_PREFIX)
        .map(|(i, _)| &code[i..])
        .unwrap_or_default()
        .trim();
    let value = u32::from_str_radix(hex, 16).map_err(|e| LineError::InvalidCodepoint(hex.to_string(), e))?;
    char::from_u32(value).ok_or(LineError::NotAScalar(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::AsciiFold;

    fn phrase(line: &str) -> Vec<String> {
        parse_phrase_line(line, &AsciiFold).records().iter().map(ToString::to_string).collect()
    }

    fn chars(line: &str) -> LineOutcome {
        parse_codepoint_line(line, &AsciiFold)
    }

    #[test]
    fn phrase_drops_tag_and_comment() {
        assert_eq!(phrase("中_noun:zhōng # middle"), vec!["zhong\t中"]);
    }

    #[test]
    fn phrase_joins_syllables() {
        assert_eq!(phrase("中国:zhōng guó"), vec!["zhongguo\t中国"]);
        assert_eq!(phrase("女儿: nǚ ér "), vec!["nver\t女儿"]);
    }

    #[test]
    fn phrase_skips_what_it_cannot_use() {
        for line in ["", "   ", "# 中:zhōng", "中 zhōng", "中:", ":zhōng", "_tag:zhōng", "中: # nothing"] {
            assert!(matches!(parse_phrase_line(line, &AsciiFold), LineOutcome::Skipped), "{:?}", line);
        }
    }

    #[test]
    fn codepoint_fans_out_readings() {
        let out: Vec<String> = chars("U+4E2D:zhōng,zhong4").records().iter().map(ToString::to_string).collect();
        assert_eq!(out, vec!["zhong\t中", "zhong4\t中"]);
    }

    #[test]
    fn codepoint_ignores_blank_readings() {
        let out: Vec<String> = chars("U+5973: nǚ, ,rǔ, # woman").records().iter().map(ToString::to_string).collect();
        assert_eq!(out, vec!["nv\t女", "ru\t女"]);
    }

    #[test]
    fn codepoint_comment_and_blank_lines_are_skipped() {
        assert!(matches!(chars("# U+4E2D:zhōng"), LineOutcome::Skipped));
        assert!(matches!(chars("   "), LineOutcome::Skipped));
        assert!(matches!(chars("U+4E2D:"), LineOutcome::Skipped));
    }

    #[test]
    fn codepoint_failures() {
        assert!(matches!(chars("U+4E2D zhōng"), LineOutcome::Failed(LineError::MissingDelimiter)));
        assert!(matches!(chars("U+XYZ:zhōng"), LineOutcome::Failed(LineError::InvalidCodepoint(..))));
        assert!(matches!(chars("U+:zhōng"), LineOutcome::Failed(LineError::InvalidCodepoint(..))));
        assert!(matches!(chars("U+D800:zhōng"), LineOutcome::Failed(LineError::NotAScalar(0xD800))));
        assert!(matches!(chars("U+FFFFFFFFF:zhōng"), LineOutcome::Failed(LineError::InvalidCodepoint(..))));
    }

    #[test]
    fn codepoint_errors_say_why() {
        let LineOutcome::Failed(e) = chars("U+XYZ:zhōng") else {
            panic!("U+XYZ should not parse");
        };
        assert_eq!(e.to_string(), "invalid codepoint \"XYZ\": invalid digit found in string");
        let LineOutcome::Failed(e) = chars("U+:zhōng") else {
            panic!("U+ should not parse");
        };
        assert_eq!(e.to_string(), "invalid codepoint \"\": cannot parse integer from empty string");
    }

    #[test]
    fn codepoint_prefix_is_not_checked() {
        assert_eq!(codepoint("U+4E2D").unwrap(), '中');
        assert_eq!(codepoint("u+4e2d").unwrap(), '中');
        assert_eq!(codepoint("中中4E2D").unwrap(), '中');
        assert_eq!(codepoint("U+20000").unwrap(), '\u{20000}');
    }
}
