//!
//! ```cargo
//! [dependencies]
//! term_macros = { path = "../../shared/term_macros"  }
//! pinyin_dict = { path = "../../shared/pinyin_dict"  }
//! ```
//!
//! Passes through only the `code<TAB>text` lines the engine's dictionary loader would accept.

use pinyin_dict::{process_line, DictionaryCheck, Tally};
use term_macros::*;

fn main() {
    tool! {
        args:
            - code_len_limit: usize = usize::MAX;
            - text_len_limit: usize = usize::MAX;
            - dedup;
        ;

        body: || {
            let mut check = DictionaryCheck::new(code_len_limit, text_len_limit, dedup);
            let mut tally = Tally::default();
            readin!(wtr, |line: &[u8]| {
                match process_line(&mut wtr, line, |text| check.check(text)) {
                    Ok(handled) => tally.add(handled),
                    Err(e) => {
                        log::error!("Unable to write: {}", e);
                        std::process::exit(1);
                    }
                }
            });
            tally.log();
            let (max_code, max_text) = check.max_lens();
            log::info!("{} words loaded (longest code {}, longest text {})", check.loaded(), max_code, max_text);
        }
    }
}
