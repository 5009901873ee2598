use gepetto_core::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Where to find the naming service and which name to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Naming service URL, used verbatim. Takes precedence over host/port.
    pub url: Option<String>,
    /// Naming service host (default "localhost" when only a port is given).
    pub host: Option<String>,
    /// Naming service port (default 2809 when only a host is given).
    pub port: Option<u16>,
    /// Name the viewer is registered under.
    pub service: ServiceName,
}

impl ClientConfig {
    pub fn endpoint(&self) -> NamingEndpoint {
        if let Some(url) = &self.url {
            return NamingEndpoint::Url(url.clone());
        }
        if self.host.is_none() && self.port.is_none() {
            return NamingEndpoint::Default;
        }
        NamingEndpoint::corbaloc(
            self.host.as_deref().unwrap_or(NamingEndpoint::DEFAULT_HOST),
            self.port.unwrap_or(NamingEndpoint::DEFAULT_PORT),
        )
    }
}

/// Connection to a running viewer.
///
/// Holds the naming-service handle and the resolved graphical-interface
/// proxy. Neither is retried or refreshed; the viewer owns the lifecycle of
/// the remote object.
pub struct Client {
    naming: Arc<dyn NamingService>,
    gui: Arc<dyn GraphicalInterface>,
    service: ServiceName,
}

impl Client {
    /// Resolve the viewer through the runtime's default naming service.
    pub fn new(orb: &dyn Orb) -> Result<Self, GepettoError> {
        Self::with_config(orb, &ClientConfig::default())
    }

    /// Middleware errors are returned as-is.
    pub fn with_config(orb: &dyn Orb, config: &ClientConfig) -> Result<Self, GepettoError> {
        let endpoint = config.endpoint();
        debug!(endpoint = %endpoint, "Obtaining naming service");
        let naming = orb.naming_service(&endpoint)?;
        Self::from_naming(naming, config.service.clone())
    }

    pub fn from_naming(
        naming: Arc<dyn NamingService>,
        service: ServiceName,
    ) -> Result<Self, GepettoError> {
        debug!(name = %service, "Resolving viewer");
        let gui = naming.resolve(&service)?;
        Ok(Self {
            naming,
            gui,
            service,
        })
    }

    pub fn naming(&self) -> &Arc<dyn NamingService> {
        &self.naming
    }

    pub fn gui(&self) -> &Arc<dyn GraphicalInterface> {
        &self.gui
    }

    /// The name `gui` was resolved from.
    pub fn service(&self) -> &ServiceName {
        &self.service
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}
