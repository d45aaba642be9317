use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ColorError {
    /// The given text is neither a known color name, nor a hex string, nor an `rgb()` expression.
    #[error("\"{0}\" is not a valid color")]
    InvalidColorFormat(String),
    #[error("palette doesn't contain any colors")]
    EmptyPalette,
}

impl ColorError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat(input.into())
    }
}
