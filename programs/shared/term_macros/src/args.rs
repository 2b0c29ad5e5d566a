use log::LevelFilter;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArgError {
    #[error("--{0} needs a value")]
    MissingValue(String),
    #[error("couldn't read --{name} from {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
    #[error("unrecognised argument {0:?}")]
    Unknown(String),
}

/// Command-line flags, consumed one declaration at a time.
///
/// Whatever is left over once every declared flag has been taken is an error.
#[derive(Debug)]
pub struct Args {
    tool: String,
    tokens: Vec<String>,
    usage: Vec<(String, String, String)>,
}

impl Args {
    pub fn new(tool: &str, tokens: impl IntoIterator<Item = String>) -> Self {
        Args {
            tool: tool.to_string(),
            tokens: tokens.into_iter().collect(),
            usage: Vec::new(),
        }
    }

    pub fn from_env(tool: &str) -> Self {
        Args::new(tool, std::env::args().skip(1))
    }

    /// Level picked by the built-in `--verbose` / `--quiet` flags.
    pub fn verbosity(&mut self) -> LevelFilter {
        let verbose = self.take_flag("verbose", Some('v'));
        let quiet = self.take_flag("quiet", Some('q'));
        if quiet {
            LevelFilter::Off
        } else if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn flag(&mut self, name: &str) -> bool {
        self.usage.push((name.to_string(), "bool".to_string(), "false".to_string()));
        self.take_flag(name, None)
    }

    /// `Ok(None)` when the flag was not given, so the caller can fall back to its default.
    pub fn value<T>(&mut self, name: &str, type_name: &str, default: &str) -> Result<Option<T>, ArgError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.usage.push((name.to_string(), type_name.to_string(), default.to_string()));
        let Some(pos) = self.tokens.iter().position(|t| matches_name(t, name)) else {
            return Ok(None);
        };
        let token = self.tokens.remove(pos);
        let raw = match token.split_once('=') {
            Some((_, inline)) => inline.to_string(),
            None if pos < self.tokens.len() => self.tokens.remove(pos),
            None => return Err(ArgError::MissingValue(name.to_string())),
        };
        raw.parse::<T>().map(Some).map_err(|e| ArgError::Invalid {
            name: name.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })
    }

    /// Prints usage and exits on `--help`, otherwise rejects leftovers.
    pub fn finish(mut self) -> Result<(), ArgError> {
        if self.take_flag("help", Some('h')) {
            println!("{}", self.usage());
            std::process::exit(0);
        }
        match self.tokens.into_iter().next() {
            Some(token) => Err(ArgError::Unknown(token)),
            None => Ok(()),
        }
    }

    pub fn usage(&self) -> String {
        let mut out = format!("{} {}\n", "usage:".if_supports_color(Stream::Stdout, |s| s.bold()), self.tool);
        out.push_str("  reads lines from stdin, writes tab-separated records to stdout\n\n");
        for (name, ty, default) in &self.usage {
            out.push_str(&format!(
                "  {:<24} {} (default: {})\n",
                format!("--{}", name.replace('_', "-")).if_supports_color(Stream::Stdout, |s| s.green()),
                ty.if_supports_color(Stream::Stdout, |s| s.cyan()),
                default
            ));
        }
        for builtin in ["-v, --verbose", "-q, --quiet", "-h, --help"] {
            out.push_str(&format!("  {}\n", builtin.if_supports_color(Stream::Stdout, |s| s.green())));
        }
        out
    }

    fn take_flag(&mut self, name: &str, short: Option<char>) -> bool {
        let short = short.map(|c| format!("-{}", c));
        let found = self
            .tokens
            .iter()
            .position(|t| t.replace('-', "_") == format!("__{}", name) || Some(t) == short.as_ref());
        match found {
            Some(pos) => {
                self.tokens.remove(pos);
                true
            }
            None => false,
        }
    }
}

fn matches_name(token: &str, name: &str) -> bool {
    let Some(rest) = token.strip_prefix("--") else {
        return false;
    };
    let key = rest.split('=').next().unwrap_or(rest);
    key.replace('-', "_") == name
}

/// Reports a bad command line and exits with status 2.
pub fn bail<T>(e: ArgError) -> T {
    eprintln!("{} {}", "error:".if_supports_color(Stream::Stderr, |s| s.red()), e);
    std::process::exit(2)
}
