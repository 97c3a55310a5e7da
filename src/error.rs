use std::fmt;

#[derive(Debug)]
pub enum RestampError {
    Config(String),
    Plan(String),
    Io(std::io::Error),
    Export(csv::Error),
    Walk(walkdir::Error),
    Other(String),
}

impl fmt::Display for RestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestampError::Config(e) => write!(f, "Configuration error: {}", e),
            RestampError::Plan(e) => write!(f, "Planning error: {}", e),
            RestampError::Io(e) => write!(f, "IO error: {}", e),
            RestampError::Export(e) => write!(f, "Export error: {}", e),
            RestampError::Walk(e) => write!(f, "Walk error: {}", e),
            RestampError::Other(e) => write!(f, "Error: {}", e),
        }
    }
}

impl std::error::Error for RestampError {}

impl From<std::io::Error> for RestampError {
    fn from(err: std::io::Error) -> Self {
        RestampError::Io(err)
    }
}

impl From<csv::Error> for RestampError {
    fn from(err: csv::Error) -> Self {
        RestampError::Export(err)
    }
}

impl From<walkdir::Error> for RestampError {
    fn from(err: walkdir::Error) -> Self {
        RestampError::Walk(err)
    }
}

impl From<serde_json::Error> for RestampError {
    fn from(err: serde_json::Error) -> Self {
        RestampError::Config(err.to_string())
    }
}

impl From<String> for RestampError {
    fn from(err: String) -> Self {
        RestampError::Other(err)
    }
}

impl From<&str> for RestampError {
    fn from(err: &str) -> Self {
        RestampError::Other(err.to_string())
    }
}
