//! Platform client factory for the serving and eventing resource families.
//!
//! Every call re-loads ambient configuration through the injected
//! [`ConnectionConfigProvider`] and builds a fresh handle. Nothing is cached
//! and nothing is retried.

pub mod client;
pub mod eventing;
pub mod serving;

pub use eventing::{EventingClient, EventingHandle};
pub use serving::{ServingClient, ServingHandle};

use crate::application::ports::ConnectionConfigProvider;
use crate::domain::{ConnectionError, ResourceFamily, TransportConfig};

/// Produces namespace-scoped handles from ambient connection configuration.
#[derive(Debug, Clone)]
pub struct PlatformClientFactory<P> {
    provider: P,
}

impl<P: ConnectionConfigProvider> PlatformClientFactory<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Create a serving handle scoped to `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if configuration cannot be loaded or the
    /// client cannot be instantiated.
    pub fn new_serving_handle(&self, namespace: &str) -> Result<ServingHandle, ConnectionError> {
        let family = ResourceFamily::Serving;
        let transport = self.load(family)?;
        let client = ServingClient::new_for_config(&transport)
            .map_err(|source| ConnectionError::Instantiate { family, source })?;
        tracing::debug!(namespace, server = %transport.server, "created serving client");
        Ok(ServingHandle::new(client, namespace))
    }

    /// Create an eventing handle scoped to `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if configuration cannot be loaded or the
    /// client cannot be instantiated.
    pub fn new_eventing_handle(&self, namespace: &str) -> Result<EventingHandle, ConnectionError> {
        let family = ResourceFamily::Eventing;
        let transport = self.load(family)?;
        let client = EventingClient::new_for_config(&transport)
            .map_err(|source| ConnectionError::Instantiate { family, source })?;
        tracing::debug!(namespace, server = %transport.server, "created eventing client");
        Ok(EventingHandle::new(client, namespace))
    }

    fn load(&self, family: ResourceFamily) -> Result<TransportConfig, ConnectionError> {
        self.provider
            .load()
            .map_err(|source| ConnectionError::LoadConfig { family, source })
    }
}
