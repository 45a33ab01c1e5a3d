use std::path::{Path, PathBuf};

use dioxus::logger::tracing;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};

use super::error::{KubeconfigError, KubeconfigResult};
use crate::utils::config;

/// Where the Kubernetes client configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSource {
    /// kube's own inference: `KUBECONFIG`, `~/.kube/config`, then in-cluster
    Default,
    /// An explicit kubeconfig file
    File(PathBuf),
}

impl ClientSource {
    /// Reads `--kubeconfig <path>` or `--kubeconfig=<path>` from the
    /// arguments, ignoring anything else.
    pub fn from_args<I, S>(args: I) -> KubeconfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == config::KUBECONFIG_FLAG {
                let path = args
                    .next()
                    .ok_or_else(|| KubeconfigError::MissingFlagValue(config::KUBECONFIG_FLAG.to_string()))?;
                return Self::from_path(path.as_ref());
            }
            if let Some(path) = arg
                .strip_prefix(config::KUBECONFIG_FLAG)
                .and_then(|rest| rest.strip_prefix('='))
            {
                return Self::from_path(path);
            }
        }
        Ok(ClientSource::Default)
    }

    fn from_path(path: &str) -> KubeconfigResult<Self> {
        if path.is_empty() || path == config::DEFAULT_KUBECONFIG {
            return Ok(ClientSource::Default);
        }
        Ok(ClientSource::File(expand_home(path)?))
    }
}

/// Expands a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> KubeconfigResult<PathBuf> {
    if path == "~" {
        return dirs::home_dir().ok_or(KubeconfigError::NoHomeDir);
    }
    match path.strip_prefix("~/") {
        Some(rest) => Ok(dirs::home_dir().ok_or(KubeconfigError::NoHomeDir)?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

/// Create a Kubernetes client for the given source
pub async fn create_client(source: &ClientSource) -> KubeconfigResult<Client> {
    match source {
        ClientSource::Default => {
            tracing::info!("Using default kubeconfig");
            Ok(Client::try_default().await?)
        }
        ClientSource::File(path) => create_client_from_file_path(path).await,
    }
}

async fn create_client_from_file_path(path: &Path) -> KubeconfigResult<Client> {
    if !path.exists() {
        return Err(KubeconfigError::NotFound(path.display().to_string()));
    }
    tracing::info!("Using kubeconfig at {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path)?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
    Ok(Client::try_from(config)?)
}
