//! Error taxonomy for host service operations.

use thiserror::Error;

/// Failure reported by a host service adapter.
///
/// Host errors never reach the navigation core; panels render them (or a fallback string)
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The capability is not implemented on the active host.
    #[error("{capability} is unavailable on this host")]
    Unavailable {
        /// Stable capability identifier used in diagnostics.
        capability: &'static str,
    },
    /// The user or browser refused access to a device resource.
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// The user dismissed a picker or the operation was interrupted.
    #[error("operation cancelled: {0}")]
    Cancelled(String),
    /// A request could not be sent or returned a failure status.
    #[error("request failed: {0}")]
    Request(String),
    /// A response arrived but could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl HostError {
    /// Shorthand for [`HostError::Unavailable`].
    pub const fn unavailable(capability: &'static str) -> Self {
        Self::Unavailable { capability }
    }
}
