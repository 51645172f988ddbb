use std::sync::Once;

/// Environment variable consulted when no explicit filter is configured.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Logger configuration.
///
/// `filter` uses the `env_logger` directive syntax, e.g. `"info"` or
/// `"primdraw=trace,primdraw_studio=info"`. Per-command tracing lives at
/// `trace` level under the `primdraw` target.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a timestamp. Off for test and golden-output runs.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Later calls are ignored, as is the case where another logger was already
/// installed by the host. Filter precedence: `config.filter`, then
/// `RUST_LOG`, then `info`.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.clone().or_else(|| std::env::var(FILTER_ENV).ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
