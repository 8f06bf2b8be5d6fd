use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid age {value:?} in animals file")]
    InvalidAgeError { value: String },

    #[error("animal #{0} is not in the registry")]
    AnimalNotFound(u64),

    #[error("owner #{0} is not in the registry")]
    OwnerNotFound(u64),

    #[error("no animal named {0:?}")]
    NoSuchAnimal(String),

    #[error("no owner named {0:?}")]
    NoSuchOwner(String),

    #[error("configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, ClinicError>;
