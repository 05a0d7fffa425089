//! Resolver service — maps a spoken entity name to its backend identifier.

use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::id::BackendId;
use voxrelay_domain::kind::EntityKind;

use crate::ports::InventorySource;

/// Application service resolving `(kind, name)` pairs against the backend.
pub struct ResolverService<I> {
    source: I,
}

impl<I: InventorySource> ResolverService<I> {
    /// Create a new service backed by the given inventory source.
    pub fn new(source: I) -> Self {
        Self { source }
    }

    /// Resolve a named entity to its backend identifier.
    ///
    /// The kind's collection is fetched fresh on every call; the aggregate
    /// snapshot used for model context is never consulted, because its item
    /// shape carries no identifiers. The scan returns the first entity whose
    /// name matches exactly (case-sensitive); `Ok(None)` means no entity of
    /// this kind has that name.
    ///
    /// # Errors
    ///
    /// Propagates listing failures from the source, keeping "not found"
    /// distinct from "could not look".
    #[tracing::instrument(skip(self))]
    pub async fn resolve(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> Result<Option<BackendId>, VoxRelayError> {
        let entities = self.source.list_kind(kind).await?;
        Ok(entities
            .into_iter()
            .find(|entity| entity.name == name)
            .map(|entity| entity.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use voxrelay_domain::entity::Entity;
    use voxrelay_domain::inventory::InventorySnapshot;

    #[derive(Default)]
    struct StubSource {
        entities: Mutex<Vec<Entity>>,
        fail_listing: bool,
        list_calls: AtomicUsize,
    }

    impl StubSource {
        fn with_entities(entities: Vec<Entity>) -> Self {
            Self {
                entities: Mutex::new(entities),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail_listing: true,
                ..Self::default()
            }
        }
    }

    impl InventorySource for StubSource {
        fn fetch_snapshot(
            &self,
        ) -> impl Future<Output = Result<InventorySnapshot, VoxRelayError>> + Send {
            async { Ok(InventorySnapshot::default()) }
        }

        fn list_kind(
            &self,
            _kind: EntityKind,
        ) -> impl Future<Output = Result<Vec<Entity>, VoxRelayError>> + Send {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail_listing {
                Err(VoxRelayError::BackendUnreachable("refused".into()))
            } else {
                Ok(self.entities.lock().unwrap().clone())
            };
            async { result }
        }
    }

    // Fixtures go through the same raw-item parsing the backend adapter
    // uses, with the id under the kind's own field.
    fn entity(kind: EntityKind, id: u64, name: &str) -> Entity {
        let mut item = json!({ "nome": name });
        item[kind.id_field()] = json!(id);
        Entity::from_listing(kind, &item).unwrap()
    }

    #[tokio::test]
    async fn should_resolve_name_to_identifier() {
        let svc = ResolverService::new(StubSource::with_entities(vec![
            entity(EntityKind::Device, 3, "Heater"),
            entity(EntityKind::Device, 7, "Lamp"),
        ]));

        let id = svc.resolve(EntityKind::Device, "Lamp").await.unwrap();
        assert_eq!(id.map(|id| id.to_string()), Some("7".to_string()));
    }

    #[tokio::test]
    async fn should_return_none_when_name_is_absent() {
        let svc = ResolverService::new(StubSource::with_entities(vec![entity(
            EntityKind::Device,
            3,
            "Heater",
        )]));

        let id = svc.resolve(EntityKind::Device, "Lamp").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn should_propagate_listing_failure_instead_of_none() {
        let svc = ResolverService::new(StubSource::failing());

        let result = svc.resolve(EntityKind::Device, "Lamp").await;
        assert!(matches!(result, Err(VoxRelayError::BackendUnreachable(_))));
    }

    #[tokio::test]
    async fn should_pick_first_match_when_names_repeat() {
        let svc = ResolverService::new(StubSource::with_entities(vec![
            entity(EntityKind::Scene, 1, "Evening"),
            entity(EntityKind::Scene, 2, "Evening"),
        ]));

        let id = svc.resolve(EntityKind::Scene, "Evening").await.unwrap();
        assert_eq!(id.map(|id| id.to_string()), Some("1".to_string()));
    }

    #[tokio::test]
    async fn should_match_names_case_sensitively() {
        let svc = ResolverService::new(StubSource::with_entities(vec![entity(
            EntityKind::Device,
            7,
            "Lamp",
        )]));

        let id = svc.resolve(EntityKind::Device, "lamp").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn should_fetch_listing_on_every_call() {
        let source = StubSource::with_entities(vec![entity(EntityKind::Device, 7, "Lamp")]);
        let svc = ResolverService::new(source);

        svc.resolve(EntityKind::Device, "Lamp").await.unwrap();
        svc.resolve(EntityKind::Device, "Lamp").await.unwrap();
        assert_eq!(svc.source.list_calls.load(Ordering::SeqCst), 2);
    }
}
