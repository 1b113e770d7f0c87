use std::path::PathBuf;
use std::time::Duration;

/// Default upstream timetable endpoint.
pub const DEFAULT_TIMETABLE_URL: &str = "https://itranvias.com/queryitr_v3.php";

/// Default timeout for the upstream HTTP request (60 seconds).
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Default timeout for a whole tool call (90 seconds).
const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 90;

/// Name of the reference directory looked up next to the executable.
const DEFAULT_STOPS_DIR_NAME: &str = "stops";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
    #[error("cannot locate the executable to derive the default stops directory: {0}")]
    ExecutablePath(#[source] std::io::Error),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub stops_dir: PathBuf,
    pub timetable_url: String,
    pub http_timeout: Duration,
    pub tool_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `BUS_FINDER_STOPS_DIR` (optional, default `stops/` next to the executable)
    /// - `BUS_FINDER_TIMETABLE_URL` (optional, default iTranvías endpoint)
    /// - `BUS_FINDER_HTTP_TIMEOUT_SECS` (optional, default 60)
    /// - `BUS_FINDER_TOOL_TIMEOUT_SECS` (optional, default 90)
    pub fn from_env() -> Result<Self, ConfigError> {
        let stops_dir = match std::env::var_os("BUS_FINDER_STOPS_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_stops_dir()?,
        };

        let timetable_url = std::env::var("BUS_FINDER_TIMETABLE_URL")
            .unwrap_or_else(|_| DEFAULT_TIMETABLE_URL.to_string());

        let http_timeout = seconds_from_env("BUS_FINDER_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        let tool_timeout = seconds_from_env("BUS_FINDER_TOOL_TIMEOUT_SECS", DEFAULT_TOOL_TIMEOUT_SECS)?;

        Ok(Self {
            stops_dir,
            timetable_url,
            http_timeout,
            tool_timeout,
        })
    }

    /// Configuration with default endpoint and timeouts for the given stops directory.
    pub fn with_stops_dir(stops_dir: impl Into<PathBuf>) -> Self {
        Self {
            stops_dir: stops_dir.into(),
            timetable_url: DEFAULT_TIMETABLE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            tool_timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
        }
    }
}

fn default_stops_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ExecutablePath)?;
    let base = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(base.join(DEFAULT_STOPS_DIR_NAME))
}

fn seconds_from_env(var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(value) => parse_seconds(var, &value),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

/// Parse a timeout in whole seconds. Zero is rejected.
pub fn parse_seconds(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidSeconds {
            var,
            value: value.to_string(),
        }),
    }
}
