//!
//! ```cargo
//! [dependencies]
//! term_macros = { path = "../../shared/term_macros"  }
//! pinyin_dict = { path = "../../shared/pinyin_dict"  }
//! ```
//!
//! Pulls every run of hanzi out of free text and writes it next to its toneless pinyin.
//! `--phrases` takes extra `word:pīn yīn` lines on top of the built-in word list.

use pinyin_dict::{annotate_line, normalizer, process_line, PhraseTranscriber, Tally};
use std::fs::File;
use std::io::BufReader;
use term_macros::*;

fn main() {
    tool! {
        args:
            - table_only;
            - phrases: String = "".to_string();
        ;

        body: || {
            let fold = normalizer(table_only);
            let mut transcriber = PhraseTranscriber::builtin();
            if !phrases.is_empty() {
                match File::open(&phrases).and_then(|f| transcriber.load(BufReader::new(f))) {
                    Ok(n) => log::debug!("{} phrases loaded from {}", n, phrases),
                    Err(e) => {
                        log::error!("Unable to read {}: {}", phrases, e);
                        std::process::exit(1);
                    }
                }
            }
            let mut tally = Tally::default();
            readin!(wtr, |line: &[u8]| {
                let r = process_line(&mut wtr, line, |text| annotate_line(text, &transcriber, fold.as_ref()));
                match r {
                    Ok(handled) => tally.add(handled),
                    Err(e) => {
                        log::error!("Unable to write: {}", e);
                        std::process::exit(1);
                    }
                }
            });
            tally.log();
        }
    }
}
