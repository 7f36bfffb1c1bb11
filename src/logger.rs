use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const STDERR_APPENDER: &str = "stderr";

#[ctor::ctor]
fn init() {
    if let Err(e) = init_logger() {
        eprintln!("Logging disabled: {}", e);
    }
}

fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    if Path::new(CONFIG_FILE).is_file() {
        log4rs::init_file(CONFIG_FILE, Default::default())?;
    } else {
        log4rs::init_config(default_config()?)?;
    }
    Ok(())
}

/// Standard output carries only the completion line, so logs go to stderr.
fn default_config() -> Result<Config, Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(STDERR_APPENDER)
                .build(LevelFilter::Info),
        )?;
    Ok(config)
}
