use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown disc field '{0}' (expected speed, glide, turn or fade)")]
    UnknownField(String),

    #[error("Unknown throw style '{0}' (expected rhbh or rhfh)")]
    UnknownThrowStyle(String),

    #[error("Session State Error: {0}")]
    State(String),

    #[error("Command Error: {0}")]
    Command(String),
}

pub type DfResult<T> = Result<T, DiscForgeError>;
