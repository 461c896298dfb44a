use std::io::Write;

use chrono::Utc;
use log::info;

/// Sets up `env_logger`. `RUST_LOG` wins; otherwise `LOG_LEVEL`, then `default_level`.
///
/// Safe to call more than once: later calls are ignored.
pub fn init(default_level: &str) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    let env = env_logger::Env::default().default_filter_or(level);

    let initialized = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()
        .is_ok();

    if initialized {
        info!("LaymanLearn logger initialized");
    }
}
