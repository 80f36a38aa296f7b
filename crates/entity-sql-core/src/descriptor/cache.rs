// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type memoization of entity descriptors.
//!
//! Descriptors are computed lazily on first resolution and shared for the
//! lifetime of the cache. The cache is bounded by the number of distinct
//! entity types and is never evicted.
//!
//! ```text
//! resolve::<User>()
//!   ├── read lock  → hit?  return Arc (same instance every time)
//!   └── write lock → entry vacant? build + insert, else reuse
//! ```

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock}
};

use parking_lot::RwLock;
use tracing::trace;

use super::EntityDescriptor;
use crate::{
    error::{Error, Result},
    model::Model
};

/// Compute-once, share-forever store of [`EntityDescriptor`]s keyed by type.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use entity_sql_core::{DescriptorCache, EntityDeclaration, FieldDeclaration, Model, SqlKind};
///
/// struct Account;
///
/// impl Model for Account {
///     fn declaration() -> EntityDeclaration {
///         EntityDeclaration::entity("Account").field(FieldDeclaration::new("id", SqlKind::BigInt).id())
///     }
/// }
///
/// let cache = DescriptorCache::new();
/// let first = cache.resolve::<Account>().unwrap();
/// let second = cache.resolve::<Account>().unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<TypeId, Arc<EntityDescriptor>>>
}

impl DescriptorCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared cache.
    pub fn global() -> &'static Arc<Self> {
        static GLOBAL: OnceLock<Arc<DescriptorCache>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Self::new()))
    }

    /// Resolve the descriptor for `E`, building it on first use.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAnEntity`] if `E` is not marked as an entity
    /// - any error from [`EntityDescriptor::new`]
    ///
    /// Failures are not cached.
    pub fn resolve<E: Model>(&self) -> Result<Arc<EntityDescriptor>> {
        let key = TypeId::of::<E>();

        if let Some(descriptor) = self.entries.read().get(&key) {
            trace!(entity = descriptor.entity_name(), "descriptor cache hit");
            return Ok(Arc::clone(descriptor));
        }

        let mut entries = self.entries.write();
        if let Some(descriptor) = entries.get(&key) {
            return Ok(Arc::clone(descriptor));
        }

        let decl = E::declaration();
        if !decl.is_entity() {
            return Err(Error::NotAnEntity {
                entity: decl.name().to_string()
            });
        }

        let descriptor = Arc::new(EntityDescriptor::new(&decl)?);
        entries.insert(key, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Whether a descriptor for `E` has been built.
    #[must_use]
    pub fn contains<E: Model>(&self) -> bool {
        self.entries.read().contains_key(&TypeId::of::<E>())
    }

    /// Number of cached descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no descriptor has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
