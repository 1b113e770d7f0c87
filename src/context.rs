use crate::config::ServerConfig;
use crate::timetable::{TimetableClient, TimetableError};

/// Everything a tool call needs: configuration and the shared HTTP client.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub config: ServerConfig,
    pub timetable: TimetableClient,
}

impl ToolContext {
    pub fn new(config: ServerConfig) -> Result<Self, TimetableError> {
        let timetable = TimetableClient::from_config(&config)?;
        Ok(Self { config, timetable })
    }
}
