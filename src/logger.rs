use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{h({l})} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    init_fallback();
}

fn init_fallback() {
    match fallback_config() {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Unable to install fallback logger: {}", e);
            }
        }
        Err(e) => eprintln!("Invalid fallback logger configuration: {}", e),
    }
}

fn fallback_config() -> Result<Config, String> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| e.to_string())
}

pub fn log_band_summary(band_count: usize, image_path: &str) {
    log::info!("Sampled {} bands from '{}'", band_count, image_path);
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::fallback_config;

    #[test]
    fn build_fallback_config() {
        let config = fallback_config().expect("fallback logger configuration is invalid");
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.root().appenders().to_vec(), vec!["stderr".to_owned()]);
    }
}
