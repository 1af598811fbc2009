use std::error::Error;

use crate::ui::UiError;

/// Result of a single check.
pub type CheckResult<T = ()> = Result<T, CheckError>;

/// Possible failures of the check.
#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    /// Sources disagree or the UI is in an unexpected state.
    #[error("{0}")]
    Mismatch(String),

    /// Page does not provide the requested operation.
    #[error("'{0}' is not implemented for this page")]
    NotImplemented(&'static str),

    /// UI action failed.
    #[error("UI action failed")]
    UiError(#[from] UiError),

    /// Dashboard REST API request failed.
    #[error("REST request failed")]
    RestError(#[source] Box<dyn Error + Send + Sync>),

    /// Cluster API request failed.
    #[error("cluster request failed")]
    ClusterError(#[source] Box<dyn Error + Send + Sync>),
}

impl CheckError {
    /// Wraps REST client error.
    pub fn rest(error: impl Error + Send + Sync + 'static) -> Self {
        Self::RestError(Box::new(error))
    }

    /// Wraps cluster client error.
    pub fn cluster(error: impl Error + Send + Sync + 'static) -> Self {
        Self::ClusterError(Box::new(error))
    }

    /// Returns `true` if the error is a mismatch between sources.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }
}

/// Returns [`CheckError::Mismatch`] with formatted message if the condition is not met.
#[macro_export]
macro_rules! verify {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::CheckError::Mismatch(format!($($arg)+)));
        }
    };
}
