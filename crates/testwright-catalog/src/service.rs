//! Capability dispatcher: lookup → read → wrap.
//!
//! `CapabilityService` ties the registry, the content store, and the
//! envelope policy together. It is stateless across invocations — every
//! call is an independent, idempotent transaction whose only suspension
//! point is the file read.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogEntry};
use crate::envelope;
use crate::store::ContentStore;
use testwright_core::{Error, Result};

/// Resolves external names to response payloads.
pub struct CapabilityService {
    catalog: Catalog,
    store: ContentStore,
}

impl CapabilityService {
    /// Create a service over a catalog and a content store.
    pub fn new(catalog: Catalog, store: ContentStore) -> Self {
        Self { catalog, store }
    }

    /// Convenience constructor returning a shared handle.
    pub fn shared(catalog: Catalog, store: ContentStore) -> Arc<Self> {
        Arc::new(Self::new(catalog, store))
    }

    /// The underlying registry.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve and read an entry's raw backing content, unwrapped.
    pub async fn fetch(&self, external_name: &str) -> Result<String> {
        let entry = self.lookup(external_name)?;
        self.store.read(entry.relative_path()).await
    }

    /// Invoke a capability: resolve, read, and apply the envelope policy.
    ///
    /// An unknown name fails with [`Error::UnknownCapability`] before any
    /// filesystem access; a read failure propagates as
    /// [`Error::ContentRead`]. Neither mutates the registry.
    pub async fn invoke(&self, external_name: &str) -> Result<String> {
        let entry = self.lookup(external_name)?;
        let content = self.store.read(entry.relative_path()).await?;
        Ok(envelope::wrap(entry.kind(), content))
    }

    fn lookup(&self, external_name: &str) -> Result<&CatalogEntry> {
        self.catalog
            .lookup(external_name)
            .ok_or_else(|| Error::UnknownCapability(external_name.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
