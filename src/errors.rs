use thiserror::Error;

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("Beverage identifier {0} is outside the range 1..=1000")]
    IdentifierOutOfRange(u32),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CafeError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<toml::de::Error> for CafeError {
    fn from(err: toml::de::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}
