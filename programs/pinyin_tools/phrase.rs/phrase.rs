//!
//! ```cargo
//! [dependencies]
//! term_macros = { path = "../../shared/term_macros"  }
//! pinyin_dict = { path = "../../shared/pinyin_dict"  }
//! ```
//!
//! `word[_tag]:pīn yīn[ #comment]` in, `pinyin<TAB>word` out.

use pinyin_dict::{normalizer, parse_phrase_line, process_line, Tally};
use term_macros::*;

fn main() {
    tool! {
        args:
            - table_only;
        ;

        body: || {
            let fold = normalizer(table_only);
            let mut tally = Tally::default();
            readin!(wtr, |line: &[u8]| {
                let r = process_line(&mut wtr, line, |text| parse_phrase_line(text, fold.as_ref()));
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
