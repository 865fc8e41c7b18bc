use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessError {
    #[error("not initialized: run 'assess init'")]
    NotInitialized,

    #[error("not a valid JSON file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("not a valid JSON file: contents are not UTF-8 text")]
    NotUtf8,

    #[error("not an assessment profile: {0}")]
    Schema(String),

    #[error("{0}")]
    Refused(String),

    #[error("a profile is already being loaded; wait for it to finish")]
    ImportInProgress,

    #[error("import ticket was issued by a different session")]
    ForeignImportTicket,

    #[error("unknown option '{value}' for {group}")]
    UnknownOption { group: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AssessError {
    /// True for the failures a load can produce from bad input (as opposed
    /// to I/O trouble): the file was read but is not a usable profile.
    pub fn is_rejected_load(&self) -> bool {
        matches!(
            self,
            AssessError::Parse(_) | AssessError::NotUtf8 | AssessError::Schema(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssessError>;
