use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HplcError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl HplcError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        HplcError::InvalidInput(message.into())
    }
}

pub type HplcResult<T> = Result<T, HplcError>;
