use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config: invalid json: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("config: {field}: {reason}")]
    Config {
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
