use fern::Dispatch;
use log::{Level, LevelFilter};
use owo_colors::{OwoColorize, Stream};

/// Sends log records to stderr so they never mix with the tool's output.
pub fn setup_logger(level: LevelFilter) {
    let logger = Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{}: {}", level_label(record.level()), message)))
        .level(level)
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}

/// Coloured only when stderr is a terminal that takes colour.
fn level_label(level: Level) -> String {
    match level {
        Level::Error => level.if_supports_color(Stream::Stderr, |l| l.red()).to_string(),
        Level::Warn => level.if_supports_color(Stream::Stderr, |l| l.yellow()).to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_plain_without_a_colour_terminal() {
        owo_colors::set_override(false);
        assert_eq!(level_label(Level::Error), "ERROR");
        assert_eq!(level_label(Level::Warn), "WARN");

        owo_colors::set_override(true);
        assert_eq!(level_label(Level::Error), "\u{1b}[31mERROR\u{1b}[39m");
        assert_eq!(level_label(Level::Info), "INFO");
        owo_colors::unset_override();
    }
}
