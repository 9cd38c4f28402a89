//! Typed client and namespace-scoped handle for the serving family.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{ResourceFamily, ServiceSummary, TransportConfig};
use crate::infra::knative::client::{BuildError, ObjectMeta, ResourceList, RestClient, Status};

/// Typed client for `serving.knative.dev/v1`.
#[derive(Debug, Clone)]
pub struct ServingClient {
    rest: RestClient,
}

impl ServingClient {
    /// Instantiate the client over `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new_for_config(transport: &TransportConfig) -> Result<Self, BuildError> {
        Ok(Self {
            rest: RestClient::new(transport, ResourceFamily::Serving)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct KnService {
    metadata: ObjectMeta,
    #[serde(default)]
    status: Status,
}

impl KnService {
    fn into_summary(self, namespace: &str) -> ServiceSummary {
        ServiceSummary {
            ready: self.status.is_ready(),
            url: self.status.url,
            namespace: self.metadata.namespace.unwrap_or_else(|| namespace.to_string()),
            name: self.metadata.name,
        }
    }
}

/// Serving client scoped to one namespace. Owned exclusively by the caller.
#[derive(Debug, Clone)]
pub struct ServingHandle {
    client: ServingClient,
    namespace: String,
}

impl ServingHandle {
    #[must_use]
    pub fn new(client: ServingClient, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// List the services (deployed functions) in the namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list_services(&self) -> Result<Vec<ServiceSummary>> {
        let url = self.client.rest.collection_url(&self.namespace, "services")?;
        let list: Option<ResourceList<KnService>> = self
            .client
            .rest
            .get_json(url)
            .await
            .with_context(|| format!("cannot list services in namespace '{}'", self.namespace))?;
        Ok(list
            .map(|l| l.items)
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.into_summary(&self.namespace))
            .collect())
    }

    /// Fetch a single service by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the service does not exist or the request fails.
    pub async fn get_service(&self, name: &str) -> Result<ServiceSummary> {
        let mut url = self.client.rest.collection_url(&self.namespace, "services")?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("server URL cannot be a base"))?
            .push(name);
        let service: Option<KnService> = self
            .client
            .rest
            .get_json(url)
            .await
            .with_context(|| format!("cannot get service '{name}'"))?;
        match service {
            Some(s) => Ok(s.into_summary(&self.namespace)),
            None => anyhow::bail!(
                "Function '{name}' not found in namespace '{}'.",
                self.namespace
            ),
        }
    }
}
