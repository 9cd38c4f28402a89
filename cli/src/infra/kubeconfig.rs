//! Ambient cluster connection configuration — implements the
//! `ConnectionConfigProvider` port.
//!
//! Lookup order on every `load()`:
//! 1. the kubeconfig at the provider's explicit path, if one was given;
//! 2. the first entry of `$KUBECONFIG`, else `~/.kube/config`;
//! 3. the in-cluster service account when `KUBERNETES_SERVICE_HOST` and
//!    `KUBERNETES_SERVICE_PORT` are set and no kubeconfig file exists.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::application::ports::ConnectionConfigProvider;
use crate::domain::{ClientIdentity, ConfigLoadError, TransportConfig};

/// Mount point of the in-cluster service account credentials.
pub const SERVICE_ACCOUNT_DIR: &str = "/var/run/secrets/kubernetes.io/serviceaccount";

// ── Kubeconfig schema ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Kubeconfig {
    #[serde(default)]
    current_context: Option<String>,
    #[serde(default)]
    clusters: Vec<NamedCluster>,
    #[serde(default)]
    users: Vec<NamedUser>,
    #[serde(default)]
    contexts: Vec<NamedContext>,
}

#[derive(Debug, Deserialize)]
struct NamedCluster {
    name: String,
    cluster: Cluster,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Cluster {
    server: String,
    certificate_authority: Option<String>,
    certificate_authority_data: Option<String>,
    #[serde(default)]
    insecure_skip_tls_verify: bool,
}

#[derive(Debug, Deserialize)]
struct NamedUser {
    name: String,
    #[serde(default)]
    user: User,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct User {
    token: Option<String>,
    client_certificate: Option<String>,
    client_certificate_data: Option<String>,
    client_key: Option<String>,
    client_key_data: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedContext {
    name: String,
    context: Context,
}

#[derive(Debug, Deserialize)]
struct Context {
    cluster: String,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    namespace: Option<String>,
}

// ── Provider ─────────────────────────────────────────────────────────────────

/// Loads connection settings from kubeconfig or the in-cluster environment.
#[derive(Debug, Default, Clone)]
pub struct KubeconfigProvider {
    path: Option<PathBuf>,
}

impl KubeconfigProvider {
    /// Provider that reads exactly `path`, ignoring `$KUBECONFIG`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn kubeconfig_path(&self) -> Result<PathBuf, ConfigLoadError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Some(val) = std::env::var_os("KUBECONFIG")
            && let Some(first) = std::env::split_paths(&val).find(|p| !p.as_os_str().is_empty())
        {
            return Ok(first);
        }
        let home = dirs::home_dir().ok_or(ConfigLoadError::NoHomeDir)?;
        Ok(home.join(".kube").join("config"))
    }
}

impl ConnectionConfigProvider for KubeconfigProvider {
    fn load(&self) -> Result<TransportConfig, ConfigLoadError> {
        let path = self.kubeconfig_path()?;
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading kubeconfig");
            let content = std::fs::read_to_string(&path).map_err(|source| {
                ConfigLoadError::Read {
                    path: path.clone(),
                    source,
                }
            })?;
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            return parse_kubeconfig(&content, &path, base_dir);
        }

        if self.path.is_none()
            && let (Ok(host), Ok(port)) = (
                std::env::var("KUBERNETES_SERVICE_HOST"),
                std::env::var("KUBERNETES_SERVICE_PORT"),
            )
        {
            tracing::debug!(%host, %port, "using in-cluster service account");
            return in_cluster_config(&host, &port, Path::new(SERVICE_ACCOUNT_DIR));
        }

        Err(ConfigLoadError::NotFound { path })
    }
}

// ── Resolution ───────────────────────────────────────────────────────────────

/// Resolve kubeconfig `content` (read from `path`) into a transport for its
/// current context. Relative file references resolve against `base_dir`.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, the current context or its
/// cluster/user is missing, or referenced credentials cannot be read.
pub fn parse_kubeconfig(
    content: &str,
    path: &Path,
    base_dir: &Path,
) -> Result<TransportConfig, ConfigLoadError> {
    let config: Kubeconfig =
        serde_yaml::from_str(content).map_err(|e| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let context_name = config
        .current_context
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or(ConfigLoadError::NoCurrentContext)?;
    let context = config
        .contexts
        .iter()
        .find(|c| c.name == context_name)
        .map(|c| &c.context)
        .ok_or_else(|| ConfigLoadError::MissingContext(context_name.to_string()))?;
    let cluster = config
        .clusters
        .iter()
        .find(|c| c.name == context.cluster)
        .map(|c| &c.cluster)
        .ok_or_else(|| ConfigLoadError::MissingCluster(context.cluster.clone()))?;
    let user = match &context.user {
        Some(name) => Some(
            config
                .users
                .iter()
                .find(|u| u.name == *name)
                .map(|u| &u.user)
                .ok_or_else(|| ConfigLoadError::MissingUser(name.clone()))?,
        ),
        None => None,
    };

    let ca_pem = credential(
        "certificate-authority-data",
        cluster.certificate_authority_data.as_deref(),
        cluster.certificate_authority.as_deref(),
        base_dir,
    )?;

    let (identity, token) = match user {
        Some(user) => {
            let cert = credential(
                "client-certificate-data",
                user.client_certificate_data.as_deref(),
                user.client_certificate.as_deref(),
                base_dir,
            )?;
            let key = credential(
                "client-key-data",
                user.client_key_data.as_deref(),
                user.client_key.as_deref(),
                base_dir,
            )?;
            let identity = match (cert, key) {
                (Some(certificate_pem), Some(key_pem)) => Some(ClientIdentity {
                    certificate_pem,
                    key_pem,
                }),
                (None, None) => None,
                _ => {
                    return Err(ConfigLoadError::InvalidData {
                        field: "client-certificate",
                        reason: "client certificate and key must be set together".to_string(),
                    });
                }
            };
            (identity, user.token.clone().filter(|t| !t.is_empty()))
        }
        None => (None, None),
    };

    Ok(TransportConfig {
        server: cluster.server.trim_end_matches('/').to_string(),
        namespace: context.namespace.clone().filter(|ns| !ns.is_empty()),
        ca_pem,
        identity,
        token,
        insecure_skip_tls_verify: cluster.insecure_skip_tls_verify,
    })
}

/// Inline base64 `data` wins over a `file` reference.
fn credential(
    field: &'static str,
    data: Option<&str>,
    file: Option<&str>,
    base_dir: &Path,
) -> Result<Option<Vec<u8>>, ConfigLoadError> {
    if let Some(data) = data {
        return STANDARD
            .decode(data.trim())
            .map(Some)
            .map_err(|e| ConfigLoadError::InvalidData {
                field,
                reason: e.to_string(),
            });
    }
    match file {
        Some(file) => {
            let path = base_dir.join(file);
            std::fs::read(&path)
                .map(Some)
                .map_err(|source| ConfigLoadError::Read { path, source })
        }
        None => Ok(None),
    }
}

/// Build a transport from the service account mounted at `sa_dir`.
///
/// # Errors
///
/// Returns an error if the service account token cannot be read.
pub fn in_cluster_config(
    host: &str,
    port: &str,
    sa_dir: &Path,
) -> Result<TransportConfig, ConfigLoadError> {
    let token_path = sa_dir.join("token");
    let token = std::fs::read_to_string(&token_path).map_err(|source| ConfigLoadError::Read {
        path: token_path,
        source,
    })?;
    let ca_pem = std::fs::read(sa_dir.join("ca.crt")).ok();
    let namespace = std::fs::read_to_string(sa_dir.join("namespace"))
        .ok()
        .map(|ns| ns.trim().to_string())
        .filter(|ns| !ns.is_empty());

    let server = if host.contains(':') {
        format!("https://[{host}]:{port}")
    } else {
        format!("https://{host}:{port}")
    };

    Ok(TransportConfig {
        server,
        namespace,
        ca_pem,
        identity: None,
        token: Some(token.trim().to_string()),
        insecure_skip_tls_verify: false,
    })
}

// ── Unit tests ───────────────────────────────────────────────────────────────
