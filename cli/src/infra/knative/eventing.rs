//! Typed client and namespace-scoped handle for the eventing family.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{ResourceFamily, TransportConfig, TriggerSummary};
use crate::infra::knative::client::{BuildError, ObjectMeta, ResourceList, RestClient, Status};

/// Typed client for `eventing.knative.dev/v1beta1`.
#[derive(Debug, Clone)]
pub struct EventingClient {
    rest: RestClient,
}

impl EventingClient {
    /// Instantiate the client over `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new_for_config(transport: &TransportConfig) -> Result<Self, BuildError> {
        Ok(Self {
            rest: RestClient::new(transport, ResourceFamily::Eventing)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Trigger {
    metadata: ObjectMeta,
    #[serde(default)]
    spec: TriggerSpec,
    #[serde(default)]
    status: Status,
}

#[derive(Debug, Default, Deserialize)]
struct TriggerSpec {
    #[serde(default)]
    broker: Option<String>,
    #[serde(default)]
    subscriber: Option<Destination>,
}

#[derive(Debug, Deserialize)]
struct Destination {
    #[serde(rename = "ref", default)]
    reference: Option<Reference>,
    #[serde(default)]
    uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Reference {
    name: String,
}

impl Trigger {
    fn into_summary(self, namespace: &str) -> TriggerSummary {
        let subscriber = self
            .spec
            .subscriber
            .and_then(|d| d.reference.map(|r| r.name).or(d.uri));
        TriggerSummary {
            ready: self.status.is_ready(),
            broker: self.spec.broker.unwrap_or_else(|| "default".to_string()),
            subscriber,
            namespace: self.metadata.namespace.unwrap_or_else(|| namespace.to_string()),
            name: self.metadata.name,
        }
    }
}

/// Eventing client scoped to one namespace. Owned exclusively by the caller.
#[derive(Debug, Clone)]
pub struct EventingHandle {
    client: EventingClient,
    namespace: String,
}

impl EventingHandle {
    #[must_use]
    pub fn new(client: EventingClient, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// List the triggers in the namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list_triggers(&self) -> Result<Vec<TriggerSummary>> {
        let url = self.client.rest.collection_url(&self.namespace, "triggers")?;
        let list: Option<ResourceList<Trigger>> = self
            .client
            .rest
            .get_json(url)
            .await
            .with_context(|| format!("cannot list triggers in namespace '{}'", self.namespace))?;
        Ok(list
            .map(|l| l.items)
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.into_summary(&self.namespace))
            .collect())
    }
}
