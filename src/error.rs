use thiserror::Error;

/// Something the user handed us cannot be worked with.
#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("The {field} must not be empty")]
    Empty { field: &'static str },

    #[error("Invalid number of days \"{input}\" (expected a positive integer)")]
    InvalidDays { input: String },

    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),
}

/// The portal answered, but the slot list could not be decoded.
#[derive(Debug, Error)]
pub(crate) enum SlotParseError {
    #[error("Could not decode the slot list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid slot timestamp \"{input}\"")]
    Timestamp { input: String },
}

/// A poll against the portal failed.
#[derive(Debug, Error)]
pub(crate) enum PortalError {
    #[error("Could not get slots (Project not found)")]
    ProjectNotFound,

    #[error("Could not get slots (Invalid session token)")]
    InvalidToken,

    #[error("Could not get slots (HTTP {status})")]
    Status { status: u16 },

    #[error("Could not reach the portal: {0}")]
    Network(#[from] Box<ureq::Error>),

    #[error(transparent)]
    Parse(#[from] SlotParseError),
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Portal(#[from] PortalError),
}

impl AppError {
    /// Process exit code: 2 for bad input (matching clap's usage errors),
    /// 1 for portal failures.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            AppError::Input(_) => 2,
            AppError::Portal(_) => 1,
        }
    }
}
