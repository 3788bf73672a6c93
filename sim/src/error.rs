use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Length not positive, negative damping, or a sub-step count outside `0..=u32::MAX`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unable to parse configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
