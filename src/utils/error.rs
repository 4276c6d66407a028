use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Malformed height for player '{player}': {value:?}")]
    MalformedHeight { player: String, value: String },

    #[error("Team list is empty, nothing to balance into")]
    EmptyTeamList,

    #[error("Player list is missing from the league configuration")]
    EmptyRoster,

    #[error("Team '{team}' is listed more than once")]
    DuplicateTeam { team: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::MalformedHeight { .. } | RosterError::CsvError(_) => ErrorCategory::Data,
            RosterError::IoError(_) | RosterError::SerializationError(_) => ErrorCategory::Io,
            RosterError::EmptyTeamList
            | RosterError::EmptyRoster
            | RosterError::DuplicateTeam { .. }
            | RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RosterError::MalformedHeight { player, .. } => format!(
                "Fix the height of '{}' so it starts with a whole number, e.g. \"42 inches\"",
                player
            ),
            RosterError::EmptyTeamList => {
                "Add at least one team name under [league] teams".to_string()
            }
            RosterError::EmptyRoster => {
                "Add a [[players]] table for each player (use players = [] for none)".to_string()
            }
            RosterError::DuplicateTeam { team } => {
                format!("Remove the repeated '{}' entry from the team list", team)
            }
            RosterError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RosterError::SerializationError(_) | RosterError::CsvError(_) => {
                "Check the output path and that the roster contains valid text".to_string()
            }
            RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => {
                "Review the league configuration file and environment variables".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("Player data could not be processed: {}", self),
            ErrorCategory::Configuration => format!("League configuration is invalid: {}", self),
            ErrorCategory::Io => format!("File operation failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
