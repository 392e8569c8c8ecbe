use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// The level of logs to write, given some level of detail.
fn level_of(detail: u8) -> LevelFilter {
    match detail {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        // The log crate is built with a max level of debug.
        _ => LevelFilter::Debug,
    }
}

/// Installs a logger which writes to stderr.
pub fn init(detail: u8) -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} [{t}] {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_of(detail)))?;

    log4rs::init_config(config)?;
    Ok(())
}
