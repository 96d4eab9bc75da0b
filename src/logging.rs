use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, fmt::Layer, prelude::*};

/// Maps the number of `-v` flags to the most detailed level that is printed.
///
/// # Examples
/// ```
/// use tracing_subscriber::filter::LevelFilter;
/// use yardcalc::logging::level_for;
///
/// assert_eq!(level_for(0), LevelFilter::OFF);
/// assert_eq!(level_for(2), LevelFilter::DEBUG);
/// assert_eq!(level_for(9), LevelFilter::TRACE);
/// ```
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber, writing to stderr at the level chosen by
/// `verbosity`, and forwards `log` records to it.
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let log_level = match verbosity {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if LogTracer::builder().with_max_level(log_level).init().is_err() {
        return;
    }

    let _ = tracing_subscriber::registry().with(Layer::new().with_ansi(false)
                                                            .with_writer(std::io::stderr)
                                                            .with_filter(level))
                                          .try_init();
}

