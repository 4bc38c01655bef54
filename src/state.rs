//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::clock::ProcessClock;
use crate::config::ServiceIdentity;
use crate::host::{HostnameSource, SystemHostname};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything in here is fixed at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<ServiceIdentity>,
    pub clock: ProcessClock,
    pub tera: Arc<Tera>,
    pub hostname: Arc<dyn HostnameSource>,
}

impl AppState {
    /// Creates a new application state that reports the OS hostname.
    pub fn new(identity: ServiceIdentity, clock: ProcessClock, tera: Tera) -> Self {
        Self::with_hostname_source(identity, clock, tera, SystemHostname)
    }

    pub fn with_hostname_source<H>(
        identity: ServiceIdentity,
        clock: ProcessClock,
        tera: Tera,
        hostname: H,
    ) -> Self
    where
        H: HostnameSource + 'static,
    {
        Self {
            identity: Arc::new(identity),
            clock,
            tera: Arc::new(tera),
            hostname: Arc::new(hostname),
        }
    }

    /// Current hostname, empty if the lookup fails
    pub fn hostname(&self) -> String {
        crate::host::resolve(self.hostname.as_ref())
    }
}
