//! Services DI Container
//!
//! Aggregates the adapters behind their ports and builds every application
//! service on top of them. The binary builds one from configuration; tests
//! build one over in-memory adapters with `Services::new`.

use std::sync::Arc;

use anyhow::Context;
use dexern_domain::Region;

use crate::application::services::{
    CollectionBrowser, CreatureLookup, PartnerStore, ResolveOrdering, SearchController,
};
use crate::config::PlayerConfig;
use crate::infrastructure::http_client::ApiAdapter;
use crate::infrastructure::platform::DesktopStorageProvider;
use crate::infrastructure::EventBus;
use crate::ports::outbound::{RawApiPort, StorageProvider};

#[derive(Clone)]
pub struct Services {
    lookup: CreatureLookup,
    events: EventBus,
    partners: Arc<PartnerStore>,
    search: Arc<SearchController>,
}

impl Services {
    pub fn new(
        api: Arc<dyn RawApiPort>,
        storage: Arc<dyn StorageProvider>,
        ordering: ResolveOrdering,
    ) -> Self {
        let lookup = CreatureLookup::new(api);
        let events = EventBus::new();
        let partners = Arc::new(PartnerStore::new(
            lookup.clone(),
            storage,
            events.clone(),
            ordering,
        ));
        let search = Arc::new(SearchController::new(lookup.clone(), Arc::clone(&partners)));
        Self {
            lookup,
            events,
            partners,
            search,
        }
    }

    /// Wire the real HTTP and file-storage adapters.
    pub async fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        let api = ApiAdapter::with_timeout(&config.api_base_url, config.http_timeout)
            .with_context(|| format!("cannot create API client for {}", config.api_base_url))?;
        let storage = match &config.storage_path {
            Some(path) => DesktopStorageProvider::open(path.clone()).await,
            None => DesktopStorageProvider::open_default().await,
        };
        tracing::debug!(
            api = %api.base_url(),
            storage = %storage.path().display(),
            ordering = config.resolve_ordering.as_str(),
            "Services configured"
        );
        Ok(Self::new(
            Arc::new(api),
            Arc::new(storage),
            config.resolve_ordering,
        ))
    }

    pub fn lookup(&self) -> &CreatureLookup {
        &self.lookup
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn partners(&self) -> &Arc<PartnerStore> {
        &self.partners
    }

    pub fn search(&self) -> &Arc<SearchController> {
        &self.search
    }

    /// A fresh browser; each collection screen keeps its own cursor.
    pub fn collection(&self, region: Region) -> CollectionBrowser {
        CollectionBrowser::new(self.lookup.clone(), region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::lookup_service::test_support::pikachu_json;
    use crate::infrastructure::platform::InMemoryStorageProvider;
    use crate::ports::outbound::{MockRawApiPort, PartnerEvent};
    use std::sync::Mutex;

    #[tokio::test]
    async fn search_and_store_share_one_event_bus() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json().returning(|_| Ok(pikachu_json()));
        let services = Services::new(
            Arc::new(api),
            Arc::new(InMemoryStorageProvider::new()),
            ResolveOrdering::default(),
        );

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        services
            .events()
            .subscribe(move |event| sink.lock().unwrap().push(event))
            .await;

        services.search().search("pikachu").await.unwrap();
        services.search().toggle_partner().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(&seen[0], PartnerEvent::PartnerChanged(Some(c)) if c.name() == "pikachu"));
    }

    #[tokio::test]
    async fn from_config_honours_timeout_and_storage_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayerConfig {
            storage_path: Some(dir.path().join("storage.json")),
            http_timeout: Some(std::time::Duration::from_secs(3)),
            ..PlayerConfig::default()
        };

        let services = Services::from_config(&config).await.unwrap();
        services.partners().set_shiny_preference(true).await;
        assert!(dir.path().join("storage.json").exists());
    }

    #[tokio::test]
    async fn bad_base_url_is_rejected() {
        let config = PlayerConfig {
            api_base_url: "not a url".into(),
            ..PlayerConfig::default()
        };
        assert!(Services::from_config(&config).await.is_err());
    }
}
