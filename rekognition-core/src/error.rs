use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("config: {0}")]
    Config(String),
    /// A map entry was added under a key that is already present.
    #[error("duplicated key ({key}) provided for {field}")]
    DuplicateKey { field: &'static str, key: String },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn duplicate_key(field: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            field,
            key: key.into(),
        }
    }
}
