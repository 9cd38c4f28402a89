//! Cluster connection types shared by the kubeconfig loader and the
//! platform client factory.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Default deadline for callers that wait on remote resources.
/// Not applied by the client factory itself.
pub const DEFAULT_WAITING_TIMEOUT: Duration = Duration::from_secs(60);

/// Namespace used when neither the caller nor the kubeconfig names one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// One of the two independent remote capability groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFamily {
    Serving,
    Eventing,
}

impl ResourceFamily {
    /// API group and version served by the cluster for this family.
    #[must_use]
    pub fn api_path(self) -> &'static str {
        match self {
            Self::Serving => "/apis/serving.knative.dev/v1",
            Self::Eventing => "/apis/eventing.knative.dev/v1beta1",
        }
    }
}

impl fmt::Display for ResourceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serving => f.write_str("serving"),
            Self::Eventing => f.write_str("eventing"),
        }
    }
}

/// PEM-encoded client certificate and private key.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub certificate_pem: Vec<u8>,
    pub key_pem: Vec<u8>,
}

impl fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("certificate_pem", &format_args!("<{} bytes>", self.certificate_pem.len()))
            .field("key_pem", &"<redacted>")
            .finish()
    }
}

/// Concrete transport settings resolved from ambient configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TransportConfig {
    /// API server base URL, e.g. `https://127.0.0.1:6443`.
    pub server: String,
    /// Namespace of the selected context, if any.
    pub namespace: Option<String>,
    /// PEM bundle of additional trusted root certificates.
    pub ca_pem: Option<Vec<u8>>,
    pub identity: Option<ClientIdentity>,
    pub token: Option<String>,
    pub insecure_skip_tls_verify: bool,
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("server", &self.server)
            .field("namespace", &self.namespace)
            .field("ca_pem", &self.ca_pem.as_ref().map(Vec::len))
            .field("identity", &self.identity)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("insecure_skip_tls_verify", &self.insecure_skip_tls_verify)
            .finish()
    }
}

// ── Remote resource summaries ────────────────────────────────────────────────

/// A deployed function as reported by the serving family.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceSummary {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub ready: bool,
}

/// An event subscription as reported by the eventing family.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TriggerSummary {
    pub name: String,
    pub namespace: String,
    pub broker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<String>,
    pub ready: bool,
}
