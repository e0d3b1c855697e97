//! Application configuration. Presentation and logging knobs only.
//!
//! Nothing is required: with no environment or file the program runs with the
//! defaults below. `.env` is loaded by `main` before `AppConfig::load`.

use serde::Deserialize;

/// Log filter used when neither `RUST_LOG` nor `STUDENT_MARKS_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct AppConfig {
    /// Print the figlet banner once, above the first menu. Read from STUDENT_MARKS_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,

    /// Clear the terminal before each menu. Read from STUDENT_MARKS_CLEAR_SCREEN.
    #[serde(default)]
    pub clear_screen: Option<bool>,

    /// tracing `EnvFilter` directive. Read from STUDENT_MARKS_LOG_FILTER.
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// `STUDENT_MARKS_*` environment source, values parsed into bools where possible.
fn environment() -> config::Environment {
    config::Environment::with_prefix("STUDENT_MARKS").try_parsing(true)
}

impl AppConfig {
    /// Loads `STUDENT_MARKS_*` variables, then the optional file named by
    /// `STUDENT_MARKS_CONFIG` (toml/json/yaml, by extension).
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        c = c.add_source(environment());
        if let Ok(path) = std::env::var("STUDENT_MARKS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns whether to print the banner. Defaults to true.
    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    /// Returns whether to clear the screen each menu iteration. Defaults to true.
    pub fn clear_screen_or_default(&self) -> bool {
        self.clear_screen.unwrap_or(true)
    }

    /// Returns the log filter directive. Defaults to DEFAULT_LOG_FILTER.
    pub fn log_filter_or_default(&self) -> String {
        self.log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}
