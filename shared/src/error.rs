use std::fmt;

/// Errors raised while assembling the wheel itself.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    EmptyCatalog,
    DuplicatePrizeId(u32),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Prize catalog must contain at least one prize"),
            Self::DuplicatePrizeId(id) => write!(f, "Prize id {} appears more than once", id),
        }
    }
}

impl std::error::Error for WheelError {}

/// Failures of the flavor-text collaborator. Never shown to the player;
/// the reveal swaps in a fallback message instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FortuneError {
    MissingApiKey,
    Network(String),
    Status(u16),
    RateLimited,
    Decode(String),
}

impl fmt::Display for FortuneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "No API key configured for the fortune service"),
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Status(code) => write!(f, "Fortune service returned status {}", code),
            Self::RateLimited => write!(f, "Rate limit exceeded: Too many requests"),
            Self::Decode(e) => write!(f, "Failed to parse fortune response: {}", e),
        }
    }
}

impl std::error::Error for FortuneError {}

impl From<serde_json::Error> for FortuneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateError {
    Unavailable,
    Write(String),
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Gate storage is unavailable"),
            Self::Write(e) => write!(f, "Failed to write gate: {}", e),
        }
    }
}

impl std::error::Error for GateError {}
