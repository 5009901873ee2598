//! In-process naming directory.
//!
//! Stands in for the middleware's naming service when the viewer surface is
//! implemented inside the same process, and in tests.

use gepetto_core::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A naming service backed by a map.
pub struct LocalDirectory {
    bindings: RwLock<HashMap<ServiceName, Arc<dyn GraphicalInterface>>>,
    online: AtomicBool,
}

impl LocalDirectory {
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
            online: AtomicBool::new(true),
        }
    }

    /// Bind `gui` under `name`, returning the proxy it replaces.
    pub fn bind(
        &self,
        name: ServiceName,
        gui: Arc<dyn GraphicalInterface>,
    ) -> Option<Arc<dyn GraphicalInterface>> {
        debug!(name = %name, "Binding name");
        self.bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, gui)
    }

    pub fn unbind(&self, name: &ServiceName) -> Option<Arc<dyn GraphicalInterface>> {
        self.bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    pub fn names(&self) -> Vec<ServiceName> {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// While offline every resolution fails with `Transient`.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

impl Default for LocalDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingService for LocalDirectory {
    fn resolve(&self, name: &ServiceName) -> Result<Arc<dyn GraphicalInterface>, GepettoError> {
        if !self.is_online() {
            return Err(GepettoError::Transient("naming service offline".to_string()));
        }
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| GepettoError::NotFound(name.to_string()))
    }
}

/// Runtime that serves one [`LocalDirectory`] for every endpoint.
#[derive(Clone)]
pub struct LocalOrb {
    directory: Arc<LocalDirectory>,
}

impl LocalOrb {
    pub fn new(directory: Arc<LocalDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Arc<LocalDirectory> {
        &self.directory
    }
}

impl Orb for LocalOrb {
    fn naming_service(
        &self,
        endpoint: &NamingEndpoint,
    ) -> Result<Arc<dyn NamingService>, GepettoError> {
        debug!(endpoint = %endpoint, "Serving local naming directory");
        Ok(self.directory.clone())
    }
}
