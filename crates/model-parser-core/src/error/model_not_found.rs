use super::Error;

/// Error when a model identifier is not registered.
#[derive(Debug)]
pub(super) struct ModelNotFound {
    name: Box<str>,
}

impl std::error::Error for ModelNotFound {}

impl core::fmt::Display for ModelNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` is not registered", self.name)
    }
}

impl Error {
    /// Creates a model not found error.
    pub fn model_not_found(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ModelNotFound(ModelNotFound {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a model not found error.
    pub fn is_model_not_found(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::ModelNotFound(_))
    }
}
