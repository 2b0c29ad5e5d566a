use any_ascii::any_ascii_char;
use phf::phf_map;

/// Toned pinyin vowels and the bare letter each one folds to.
/// Every form of ü, toned or not, becomes `v`.
pub static TONE_MARKS: phf::Map<char, char> = phf_map! {
    'ā' => 'a', 'á' => 'a', 'ǎ' => 'a', 'à' => 'a',
    'ō' => 'o', 'ó' => 'o', 'ǒ' => 'o', 'ò' => 'o',
    'ē' => 'e', 'é' => 'e', 'ě' => 'e', 'è' => 'e',
    'ī' => 'i', 'í' => 'i', 'ǐ' => 'i', 'ì' => 'i',
    'ū' => 'u', 'ú' => 'u', 'ǔ' => 'u', 'ù' => 'u',
    'ü' => 'v', 'ǖ' => 'v', 'ǘ' => 'v', 'ǚ' => 'v', 'ǜ' => 'v',
    'Ā' => 'A', 'Á' => 'A', 'Ǎ' => 'A', 'À' => 'A',
    'Ō' => 'O', 'Ó' => 'O', 'Ǒ' => 'O', 'Ò' => 'O',
    'Ē' => 'E', 'É' => 'E', 'Ě' => 'E', 'È' => 'E',
    'Ī' => 'I', 'Í' => 'I', 'Ǐ' => 'I', 'Ì' => 'I',
    'Ū' => 'U', 'Ú' => 'U', 'Ǔ' => 'U', 'Ù' => 'U',
    'Ü' => 'V', 'Ǖ' => 'V', 'Ǘ' => 'V', 'Ǚ' => 'V', 'Ǜ' => 'V',
};

/// Folds tone-marked text down to plain letters.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> String;
}

/// Only touches characters in [`TONE_MARKS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ToneTable;

impl Normalizer for ToneTable {
    fn normalize(&self, text: &str) -> String {
        text.chars().map(|c| TONE_MARKS.get(&c).copied().unwrap_or(c)).collect()
    }
}

/// [`ToneTable`] first, then the nearest ASCII spelling for whatever non-ASCII is left.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiFold;

impl Normalizer for AsciiFold {
    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if let Some(bare) = TONE_MARKS.get(&c) {
                out.push(*bare);
            } else {
                out.push_str(any_ascii_char(c));
            }
        }
        out
    }
}

/// Picks the normalizer a filter was asked for on the command line.
pub fn normalizer(table_only: bool) -> Box<dyn Normalizer> {
    if table_only {
        Box::new(ToneTable)
    } else {
        Box::new(AsciiFold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_folds_to_one_bare_vowel() {
        for (toned, bare) in [("āáǎà", 'a'), ("ōóǒò", 'o'), ("ēéěè", 'e'), ("īíǐì", 'i'), ("ūúǔù", 'u')] {
            for c in toned.chars() {
                let folded = AsciiFold.normalize(&c.to_string());
                assert_eq!(folded, bare.to_string(), "{}", c);
                assert_eq!(ToneTable.normalize(&c.to_string()), folded);
            }
        }
    }

    #[test]
    fn umlaut_u_becomes_v() {
        assert_eq!(AsciiFold.normalize("üǖǘǚǜ"), "vvvvv");
        assert_eq!(AsciiFold.normalize("lǚ"), "lv");
        assert_eq!(AsciiFold.normalize("NǙ"), "NV");
    }

    #[test]
    fn ascii_is_left_alone() {
        for s in ["zhong4", "lv", "", "a b-c"] {
            assert_eq!(AsciiFold.normalize(s), s);
            assert_eq!(ToneTable.normalize(s), s);
        }
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = AsciiFold.normalize("zhōng guó nǚ ńg");
        assert_eq!(AsciiFold.normalize(&once), once);
    }

    #[test]
    fn fallback_covers_letters_outside_the_table() {
        assert_eq!(AsciiFold.normalize("ńňǹḿ"), "nnnm");
        assert_eq!(AsciiFold.normalize("ê"), "e");
        // the table alone leaves them be
        assert_eq!(ToneTable.normalize("ńê"), "ńê");
    }

    #[test]
    fn output_is_plain_letters() {
        let out = AsciiFold.normalize("āōēīūǖÁÓÉÍÚǗ");
        assert!(out.chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(out, "aoeiuvAOEIUV");
    }
}
