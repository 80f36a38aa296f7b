// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory entity storage keyed by type and primary key.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc
};

use parking_lot::RwLock;
use tracing::trace;

use crate::model::Identifiable;

type Table<E> = HashMap<<E as Identifiable>::Id, Arc<E>>;

/// Type-partitioned map of saved entities.
///
/// Each entity type gets its own table of `id → Arc<E>`. Saving an entity
/// whose id is already present replaces the previous value.
#[derive(Debug, Default)]
pub struct EntityStore {
    tables: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `entity` under its id.
    pub fn save<E: Identifiable>(&self, entity: E) -> Arc<E> {
        let id = entity.id();
        let entity = Arc::new(entity);

        let mut tables = self.tables.write();
        let slot = tables
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Table::<E>::new()) as Box<dyn Any + Send + Sync>);
        if let Some(table) = slot.downcast_mut::<Table<E>>() {
            trace!(?id, "storing entity");
            table.insert(id, Arc::clone(&entity));
        }
        entity
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn find_by_id<E: Identifiable>(&self, id: &E::Id) -> Option<Arc<E>> {
        self.tables
            .read()
            .get(&TypeId::of::<E>())
            .and_then(|table| table.downcast_ref::<Table<E>>())
            .and_then(|table| table.get(id).cloned())
    }

    /// All stored entities of type `E`, in no particular order.
    #[must_use]
    pub fn find_all<E: Identifiable>(&self) -> Vec<Arc<E>> {
        self.tables
            .read()
            .get(&TypeId::of::<E>())
            .and_then(|table| table.downcast_ref::<Table<E>>())
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of stored entities of type `E`.
    #[must_use]
    pub fn len<E: Identifiable>(&self) -> usize {
        self.tables
            .read()
            .get(&TypeId::of::<E>())
            .and_then(|table| table.downcast_ref::<Table<E>>())
            .map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        declaration::{EntityDeclaration, FieldDeclaration, SqlKind},
        model::Model
    };

    #[derive(Debug, PartialEq)]
    struct User {
        id:   i64,
        name: String
    }

    impl Model for User {
        fn declaration() -> EntityDeclaration {
            EntityDeclaration::entity("User")
                .field(FieldDeclaration::new("id", SqlKind::BigInt).id())
                .field(FieldDeclaration::new("name", SqlKind::Text))
        }
    }

    impl Identifiable for User {
        type Id = i64;

        fn id(&self) -> i64 {
            self.id
        }
    }

    #[derive(Debug)]
    struct Tag {
        slug: String
    }

    impl Model for Tag {
        fn declaration() -> EntityDeclaration {
            EntityDeclaration::entity("Tag").field(FieldDeclaration::new("slug", SqlKind::Text).id())
        }
    }

    impl Identifiable for Tag {
        type Id = String;

        fn id(&self) -> String {
            self.slug.clone()
        }
    }

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string()
        }
    }

    #[test]
    fn save_and_find() {
        let store = EntityStore::new();
        store.save(user(1, "alice"));

        let found = store.find_by_id::<User>(&1).unwrap();
        assert_eq!(found.name, "alice");
        assert!(store.find_by_id::<User>(&2).is_none());
    }

    #[test]
    fn save_replaces_existing_id() {
        let store = EntityStore::new();
        store.save(user(1, "alice"));
        store.save(user(1, "bob"));

        assert_eq!(store.len::<User>(), 1);
        assert_eq!(store.find_by_id::<User>(&1).unwrap().name, "bob");
    }

    #[test]
    fn unknown_type_is_empty() {
        let store = EntityStore::new();
        assert!(store.find_all::<User>().is_empty());
        assert!(store.find_by_id::<User>(&1).is_none());
        assert_eq!(store.len::<User>(), 0);
    }

    #[test]
    fn types_are_partitioned() {
        let store = EntityStore::new();
        store.save(user(1, "alice"));
        store.save(user(2, "bob"));
        store.save(Tag {
            slug: "rust".to_string()
        });

        assert_eq!(store.len::<User>(), 2);
        assert_eq!(store.len::<Tag>(), 1);

        let mut names: Vec<_> = store
            .find_all::<User>()
            .iter()
            .map(|u| u.name.clone())
            .collect();
        names.sort();
        assert_eq!(names, ["alice", "bob"]);
        assert_eq!(store.find_by_id::<Tag>(&"rust".to_string()).unwrap().slug, "rust");
    }
}
