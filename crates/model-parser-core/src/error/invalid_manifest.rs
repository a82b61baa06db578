use super::Error;

/// Error when a model manifest cannot be loaded.
///
/// This occurs when:
/// - The manifest is not valid TOML or does not match the manifest layout
/// - Two models share an identifier
/// - A model declares the same method twice
/// - A declared return type cannot be parsed
#[derive(Debug)]
pub(super) struct InvalidManifest {
    message: Box<str>,
}

impl std::error::Error for InvalidManifest {}

impl core::fmt::Display for InvalidManifest {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid manifest: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid manifest error.
    pub fn invalid_manifest(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidManifest(InvalidManifest {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid manifest error.
    pub fn is_invalid_manifest(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidManifest(_))
    }
}
