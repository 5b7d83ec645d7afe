use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

use crate::error::Error;

/// Maps the `-v` count and `-q` flag to a level filter.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries the benchmark report.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), Error> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::LoggingSetupFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(3, false), LevelFilter::TRACE);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_turns_logging_off() {
        assert_eq!(level_filter(0, true), LevelFilter::OFF);
    }
}
