//!
//! ```cargo
//! [dependencies]
//! term_macros = { path = "../../shared/term_macros"  }
//! pinyin_dict = { path = "../../shared/pinyin_dict"  }
//! ```
//!
//! `U+4E2D:zhōng,zhòng` in, one `pinyin<TAB>中` line per reading out.
//! Lines that don't parse are logged to stderr and skipped.

use pinyin_dict::{normalizer, parse_codepoint_line, process_line, Tally};
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
                let r = process_line(&mut wtr, line, |text| parse_codepoint_line(text, fold.as_ref()));
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
