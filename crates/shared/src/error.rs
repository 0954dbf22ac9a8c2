#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the field errors when this is a validation failure.
    pub fn validation(&self) -> Option<&validator::ValidationErrors> {
        match self {
            Self::Validate(errors) => Some(errors),
        }
    }
}
