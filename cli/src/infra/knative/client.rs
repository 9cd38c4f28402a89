//! REST transport shared by the serving and eventing typed clients.

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{ResourceFamily, TransportConfig};

/// Boxed construction failure, wrapped into `ConnectionError::Instantiate`.
pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP client bound to one API server and one resource family.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
    family: ResourceFamily,
}

impl RestClient {
    /// Build a client for `family` from a resolved transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is invalid or the TLS material
    /// cannot be loaded.
    pub fn new(transport: &TransportConfig, family: ResourceFamily) -> Result<Self, BuildError> {
        let base = Url::parse(&transport.server)
            .map_err(|e| format!("invalid server URL '{}': {e}", transport.server))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("func/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(transport.insecure_skip_tls_verify);
        if let Some(ca) = &transport.ca_pem {
            for cert in reqwest::Certificate::from_pem_bundle(ca)? {
                builder = builder.add_root_certificate(cert);
            }
        }
        if let Some(identity) = &transport.identity {
            let mut pem = identity.certificate_pem.clone();
            pem.push(b'\n');
            pem.extend_from_slice(&identity.key_pem);
            builder = builder.identity(reqwest::Identity::from_pem(&pem)?);
        }

        Ok(Self {
            http: builder.build()?,
            base,
            token: transport.token.clone(),
            family,
        })
    }

    /// URL of a namespaced collection, e.g. `.../namespaces/ns/services`.
    ///
    /// `namespace` and `plural` are pushed as single path segments, so any
    /// `/`, `?` or `#` they contain is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL cannot carry a path.
    pub fn collection_url(&self, namespace: &str, plural: &str) -> anyhow::Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("server URL '{}' cannot be a base", self.base))?
            .pop_if_empty()
            .extend(self.family.api_path().split('/').filter(|s| !s.is_empty()))
            .push("namespaces")
            .push(namespace)
            .push(plural);
        Ok(url)
    }

    /// GET `url` and decode the JSON body. `Ok(None)` on 404.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<Option<T>> {
        tracing::debug!(family = %self.family, %url, "GET");
        let mut request = self.http.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.json::<T>().await?))
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResourceList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Status {
    /// `true` when the `Ready` condition reports `"True"`.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| c.kind == "Ready" && c.status == "True")
    }
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}
