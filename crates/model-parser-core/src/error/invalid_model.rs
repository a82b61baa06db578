use super::Error;

/// Error when a model's declarations cannot be introspected.
///
/// This occurs when:
/// - An `Attribute` accessor has no getter
/// - A getter does not declare a return type
/// - An accessor method does not return an `Attribute`
/// - A relation method builds a different kind of relation than it declares
#[derive(Debug)]
pub(super) struct InvalidModel {
    message: Box<str>,
}

impl std::error::Error for InvalidModel {}

impl core::fmt::Display for InvalidModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid model error. The message should name the offending
    /// attribute or method.
    pub fn invalid_model(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModel {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid model error.
    pub fn is_invalid_model(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidModel(_))
    }
}
