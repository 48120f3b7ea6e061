use std::fmt;

#[derive(Debug)]
pub enum RideError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for RideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideError::Io(e) => write!(f, "could not read ride config: {}", e),
            RideError::Parse(msg) => write!(f, "malformed ride config: {}", msg),
            RideError::Invalid(msg) => write!(f, "invalid ride config: {}", msg),
        }
    }
}

impl std::error::Error for RideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RideError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RideError {
    fn from(error: std::io::Error) -> Self {
        RideError::Io(error)
    }
}

impl From<ron::error::SpannedError> for RideError {
    fn from(error: ron::error::SpannedError) -> Self {
        RideError::Parse(error.to_string())
    }
}

impl From<&str> for RideError {
    fn from(error: &str) -> Self {
        RideError::Invalid(error.to_string())
    }
}
