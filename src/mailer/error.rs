//! Error types for the email simulator

use thiserror::Error;

/// Rejected service configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("Bounce rate validation error: rate must be between 0 and 1, got {0}")]
    InvalidBounceRate(f64),

    #[error("Block rate validation error: rate must be between 0 and 1, got {0}")]
    InvalidBlockRate(f64),
}

/// Failure of a single send attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("Invalid email address: {address}")]
    InvalidAddress { address: String },

    #[error("Email bounced: {address}")]
    Bounced { address: String },

    #[error("Email blocked: {address}")]
    Blocked { address: String },
}

/// The kind of a send failure, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidAddress,
    Bounced,
    Blocked,
}

impl SendError {
    /// The destination address that caused the failure
    pub fn address(&self) -> &str {
        match self {
            SendError::InvalidAddress { address }
            | SendError::Bounced { address }
            | SendError::Blocked { address } => address,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            SendError::InvalidAddress { .. } => FailureKind::InvalidAddress,
            SendError::Bounced { .. } => FailureKind::Bounced,
            SendError::Blocked { .. } => FailureKind::Blocked,
        }
    }

    /// Whether a caller may reasonably try the same email again
    ///
    /// Only bounces are transient. Blocks are policy rejections and an
    /// invalid address will fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SendError::Bounced { .. })
    }
}

/// Maps send failures to the SMTP reply code a real server would give
impl SendError {
    pub fn to_response_code(&self) -> &'static str {
        match self {
            SendError::InvalidAddress { .. } => "553",
            SendError::Bounced { .. } => "450",
            SendError::Blocked { .. } => "554",
        }
    }
}

/// Closed set of results for one send attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Delivered,
    InvalidAddress,
    Bounced,
    Blocked,
}

impl Outcome {
    pub fn from_result(result: &Result<(), SendError>) -> Self {
        match result {
            Ok(()) => Outcome::Delivered,
            Err(e) => e.kind().into(),
        }
    }

    pub fn is_delivered(self) -> bool {
        self == Outcome::Delivered
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Delivered => "delivered",
            Outcome::InvalidAddress => "invalid_address",
            Outcome::Bounced => "bounced",
            Outcome::Blocked => "blocked",
        }
    }
}

impl From<FailureKind> for Outcome {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::InvalidAddress => Outcome::InvalidAddress,
            FailureKind::Bounced => Outcome::Bounced,
            FailureKind::Blocked => Outcome::Blocked,
        }
    }
}
