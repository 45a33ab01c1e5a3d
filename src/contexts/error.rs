use thiserror::Error;

/// Errors raised while turning a kubeconfig into a client
#[derive(Debug, Error)]
pub enum KubeconfigError {
    /// A flag was given without its value
    #[error("Missing value for {0}")]
    MissingFlagValue(String),
    /// The selected kubeconfig file doesn't exist
    #[error("Kubeconfig not found: {0}")]
    NotFound(String),
    /// The kubeconfig could not be read or resolved
    #[error("Invalid kubeconfig: {0}")]
    InvalidContent(#[from] kube::config::KubeconfigError),
    /// Creating the Kubernetes client failed
    #[error("Client creation failed: {0}")]
    ClientCreation(#[from] kube::Error),
    /// No home directory to expand `~` against
    #[error("Home directory not found")]
    NoHomeDir,
}

/// Result type for kubeconfig operations
pub type KubeconfigResult<T> = Result<T, KubeconfigError>;
