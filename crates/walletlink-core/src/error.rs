//! Wallet error taxonomy.
//!
//! Every variant is recoverable: callers render it inline or as a notice and
//! keep the page alive.

use thiserror::Error;

/// Errors raised while talking to an injected wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// MetaMask or compatible wallet not injected into the page
    #[error("MetaMask is not installed!")]
    NotInstalled,
    /// Failed to build or dispatch the request object
    #[error("Failed to create wallet request")]
    RequestCreationFailed,
    /// The provider rejected the request (user denial or provider error)
    #[error("{0}")]
    RequestRejected(String),
    /// Account access was granted but no account came back
    #[error("No account returned from wallet")]
    NoAccount,
    /// The provider answered with something other than the expected shape
    #[error("Unexpected wallet response: {0}")]
    InvalidResponse(String),
    /// Fetching connection details after account access failed
    #[error("Failed to update wallet state: {0}")]
    RefreshFailed(String),
}

impl WalletError {
    /// Message shown to the user for this error.
    ///
    /// Rejections carry the provider's own message; refresh failures collapse
    /// into one generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::RequestRejected(msg) if msg.is_empty() => {
                crate::config::messages::CONNECT_FAILED.to_string()
            }
            Self::RefreshFailed(_) => crate::config::messages::REFRESH_FAILED.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_installed_message() {
        assert_eq!(
            WalletError::NotInstalled.user_message(),
            "MetaMask is not installed!"
        );
    }

    #[test]
    fn test_rejection_propagates_provider_message() {
        let err = WalletError::RequestRejected("User rejected the request.".into());
        assert_eq!(err.user_message(), "User rejected the request.");
    }

    #[test]
    fn test_empty_rejection_falls_back() {
        let err = WalletError::RequestRejected(String::new());
        assert_eq!(err.user_message(), "Failed to connect wallet");
    }

    #[test]
    fn test_refresh_failure_is_generic() {
        let err = WalletError::RefreshFailed("eth_getBalance: boom".into());
        assert_eq!(err.user_message(), "Failed to update wallet state");
        assert!(err.to_string().contains("boom"));
    }
}
