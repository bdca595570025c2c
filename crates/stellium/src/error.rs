#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("theta must be a finite angle strictly between 0 and 30 degrees, got {theta}")]
    InvalidTheta { theta: f64 },

    #[error("invalid spread options: {message}")]
    InvalidOptions { message: String },

    #[error("sign index out of range (expected 0..=11): {value}")]
    SignOutOfRange { value: u8 },

    #[error("duplicate point id: {id}")]
    DuplicateId { id: String },

    #[error("point {id} has a non-finite position: {value}")]
    NonFinitePosition { id: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
