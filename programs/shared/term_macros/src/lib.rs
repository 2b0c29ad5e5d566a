//! Plumbing shared by the line filters: stdin/stdout streaming, flag parsing and logging.
//!
//! ```rust,ignore
//! use term_macros::*;
//!
//! fn main() {
//!     tool! {
//!         args:
//!             - shout;
//!             - repeat: usize = 1;
//!         ;
//!         body: || {
//!             readin!(wtr, |line: &[u8]| {
//!                 for _ in 0..repeat {
//!                     let _ = wtr.write_all(line);
//!                 }
//!             });
//!         }
//!     }
//! }
//! ```

pub mod args;
mod logger;

pub use args::{ArgError, Args};
pub use logger::setup_logger;

// Macros expand inside the calling crate, so these have to be reachable from there.
pub use linereader;
pub use log;

use linereader::LineReader;
use std::io::Read;

/// Feeds every line of `reader` to `f`, trailing newline included.
/// The slice borrows the reader's buffer, so it only lives for the call.
pub fn for_each_line<R: Read>(reader: R, mut f: impl FnMut(&[u8])) -> std::io::Result<()> {
    let mut reader = LineReader::new(reader);
    while let Some(line) = reader.next_line() {
        f(line?);
    }
    Ok(())
}

/// Runs `$body` once per stdin line with `$wtr` bound to a buffered stdout.
#[macro_export]
macro_rules! readin {
    ($wtr:ident, $body:expr) => {{
        #[allow(unused_imports)]
        use std::io::Write;
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut $wtr = std::io::BufWriter::new(stdout.lock());
        {
            let mut body = $body;
            if let Err(e) = $crate::for_each_line(stdin.lock(), |line: &[u8]| body(line)) {
                $crate::log::error!("Unable to read stdin: {}", e);
            }
        }
        if let Err(e) = $wtr.flush() {
            $crate::log::error!("Unable to write: {}", e);
            std::process::exit(1);
        }
    }};
}

/// Declares a tool's flags, sets up logging and runs the body.
///
/// `- name;` declares a boolean flag, `- name: Type = default;` a valued one.
/// `--verbose`, `--quiet` and `--help` are always available.
#[macro_export]
macro_rules! tool {
    (@arg $args:ident, $name:ident) => {
        $args.flag(stringify!($name))
    };
    (@arg $args:ident, $name:ident, $ty:ty, $default:expr) => {
        $args
            .value::<$ty>(stringify!($name), stringify!($ty), stringify!($default))
            .unwrap_or_else(|e| $crate::args::bail(e))
            .unwrap_or_else(|| $default)
    };
    (
        args:
            $(- $name:ident $(: $ty:ty = $default:expr)? ;)*
        ;

        body: || $body:block
    ) => {{
        let mut tool_args = $crate::Args::from_env(env!("CARGO_PKG_NAME"));
        let tool_level = tool_args.verbosity();
        $(
            #[allow(unused_variables)]
            let $name = $crate::tool!(@arg tool_args, $name $(, $ty, $default)?);
        )*
        tool_args.finish().unwrap_or_else(|e| $crate::args::bail(e));
        $crate::setup_logger(tool_level);
        (|| $body)()
    }};
}
