// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity manager: descriptors, dialect generator and storage in one place.
//!
//! ```text
//! EntityManager
//! ├── DatabaseConfig        - url, credentials, dialect
//! ├── Box<dyn SqlGenerator> - picked from the config's dialect
//! ├── Arc<DescriptorCache>  - global unless injected
//! └── EntityStore           - saved entities by type and id
//! ```

use std::{fmt, sync::Arc};

use tracing::{debug, trace};

use crate::{
    config::DatabaseConfig,
    descriptor::{DescriptorCache, EntityDescriptor},
    error::Result,
    generator::{SqlGenerator, create_generator},
    model::{Identifiable, Model},
    store::EntityStore
};

/// Front door for saving and looking up entities and producing their DDL.
///
/// # Example
///
/// ```rust
/// use entity_sql_core::{
///     DatabaseConfig, Dialect, EntityDeclaration, EntityManager, FieldDeclaration, Identifiable,
///     Model, SqlKind
/// };
///
/// struct Book {
///     id:    i64,
///     title: String
/// }
///
/// impl Model for Book {
///     fn declaration() -> EntityDeclaration {
///         EntityDeclaration::entity("Book")
///             .field(FieldDeclaration::new("id", SqlKind::BigInt).id())
///             .field(FieldDeclaration::new("title", SqlKind::Text).not_null())
///     }
/// }
///
/// impl Identifiable for Book {
///     type Id = i64;
///
///     fn id(&self) -> i64 {
///         self.id
///     }
/// }
///
/// let config = DatabaseConfig::new("jdbc:postgresql://localhost/app", "app", "secret")
///     .with_dialect(Dialect::Postgres);
/// let manager = EntityManager::new(config);
///
/// manager
///     .save(Book {
///         id:    7,
///         title: "Dune".into()
///     })
///     .unwrap();
/// assert_eq!(manager.find_by_id::<Book>(&7).unwrap().title, "Dune");
/// assert!(manager.generate_create_table_sql::<Book>().unwrap().ends_with(");"));
/// ```
pub struct EntityManager {
    config:    DatabaseConfig,
    generator: Box<dyn SqlGenerator>,
    cache:     Arc<DescriptorCache>,
    store:     EntityStore
}

impl EntityManager {
    /// Create a manager backed by the process-wide descriptor cache.
    #[must_use]
    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_cache(config, Arc::clone(DescriptorCache::global()))
    }

    /// Create a manager backed by a caller-supplied descriptor cache.
    #[must_use]
    pub fn with_cache(config: DatabaseConfig, cache: Arc<DescriptorCache>) -> Self {
        let generator = create_generator(config.dialect());
        debug!(dialect = %config.dialect(), "entity manager ready");
        Self {
            config,
            generator,
            cache,
            store: EntityStore::new()
        }
    }

    /// Connection and dialect settings.
    #[must_use]
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Generator for the configured dialect.
    #[must_use]
    pub fn generator(&self) -> &dyn SqlGenerator {
        self.generator.as_ref()
    }

    /// Resolved descriptor for `E`.
    ///
    /// # Errors
    ///
    /// See [`DescriptorCache::resolve`].
    pub fn descriptor<E: Model>(&self) -> Result<Arc<EntityDescriptor>> {
        self.cache.resolve::<E>()
    }

    /// Validate `E` as an entity, then insert or replace `entity` in the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns the descriptor error if `E` is not a valid entity. Nothing is
    /// stored in that case.
    pub fn save<E: Identifiable>(&self, entity: E) -> Result<Arc<E>> {
        let descriptor = self.cache.resolve::<E>()?;
        trace!(
            entity = descriptor.entity_name(),
            sql = %self.generator.insert(&descriptor),
            "save"
        );
        Ok(self.store.save(entity))
    }

    /// Look up a saved entity by id.
    #[must_use]
    pub fn find_by_id<E: Identifiable>(&self, id: &E::Id) -> Option<Arc<E>> {
        self.store.find_by_id(id)
    }

    /// All saved entities of type `E`, in no particular order.
    #[must_use]
    pub fn find_all<E: Identifiable>(&self) -> Vec<Arc<E>> {
        self.store.find_all()
    }

    /// CREATE TABLE statement for `E` in the configured dialect.
    ///
    /// # Errors
    ///
    /// See [`DescriptorCache::resolve`].
    pub fn generate_create_table_sql<E: Model>(&self) -> Result<String> {
        let descriptor = self.cache.resolve::<E>()?;
        Ok(self.generator.create_table(&descriptor))
    }
}

impl fmt::Debug for EntityManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityManager")
            .field("config", &self.config)
            .field("dialect", &self.generator.dialect())
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}
