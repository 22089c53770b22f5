use thiserror::Error;

/// Main error type for callscope operations
#[derive(Error, Debug)]
pub enum CallscopeError {
    /// Whole-corpus bind failure reported by the external Resolver. Fatal:
    /// no analysis stage runs over a corpus that failed to bind.
    #[error("Bind failure: {}", diagnostics.join("; "))]
    Bind { diagnostics: Vec<String> },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CallscopeError {
    /// Convenience constructor for Resolver implementations.
    pub fn bind_failure(diagnostics: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Bind {
            diagnostics: diagnostics.into_iter().map(Into::into).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CallscopeError>;
