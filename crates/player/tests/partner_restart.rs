//! Partner survives a restart through the file-backed storage adapter.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use dexern_domain::Region;
use dexern_player::infrastructure::platform::DesktopStorageProvider;
use dexern_player::ports::outbound::{ApiError, ApiPath, RawApiPort};
use dexern_player::{ResolveOrdering, Services};

/// Tiny stand-in for the remote dex that knows two species.
struct FakeDex;

#[async_trait]
impl RawApiPort for FakeDex {
    async fn get_json(&self, path: &ApiPath) -> Result<Value, ApiError> {
        let (id, name, types) = match path.segments().last().map(String::as_str) {
            Some("pikachu") | Some("25") => (25, "pikachu", vec!["electric"]),
            Some("charizard") | Some("6") => (6, "charizard", vec!["fire", "flying"]),
            _ => {
                return Err(ApiError::HttpError {
                    status: 404,
                    body: "Not Found".into(),
                })
            }
        };
        let types: Vec<Value> = types
            .into_iter()
            .map(|t| json!({ "type": { "name": t } }))
            .collect();
        Ok(json!({
            "id": id,
            "name": name,
            "sprites": {
                "front_default": format!("https://img/{}.png", id),
                "front_shiny": format!("https://img/shiny/{}.png", id)
            },
            "types": types
        }))
    }

    async fn get_json_url(&self, url: &str) -> Result<Value, ApiError> {
        Err(ApiError::InvalidUrl(url.to_string()))
    }
}

async fn boot(path: &std::path::Path) -> Services {
    let storage = DesktopStorageProvider::open(path).await;
    let services = Services::new(
        Arc::new(FakeDex),
        Arc::new(storage),
        ResolveOrdering::default(),
    );
    services.partners().load_saved_partner().await;
    services
}

#[tokio::test]
async fn partner_and_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let first = boot(&path).await;
    assert_eq!(first.partners().current().await, None);
    let resolved = first
        .partners()
        .resolve("Charizard")
        .await
        .unwrap()
        .applied()
        .cloned()
        .unwrap();
    first.partners().set_shiny_preference(true).await;
    first.partners().set_trainer_name("Leaf").await;
    first.partners().set_trainer_region(Region::Kanto).await;
    drop(first);

    let second = boot(&path).await;
    let snapshot = second.partners().snapshot().await;
    assert_eq!(snapshot.partner, Some(resolved));
    assert!(snapshot.shiny);
    assert_eq!(snapshot.trainer.name(), "Leaf");
    assert_eq!(
        snapshot.partner.unwrap().artwork_url(snapshot.shiny),
        "https://img/shiny/6.png"
    );
}

#[tokio::test]
async fn cleared_partner_stays_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let first = boot(&path).await;
    first.partners().resolve("25").await.unwrap();
    first.partners().clear_partner().await;
    drop(first);

    let second = boot(&path).await;
    assert_eq!(second.partners().current().await, None);
    assert!(!second.partners().shiny().await);
}

#[tokio::test]
async fn search_toggle_persists_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let first = boot(&path).await;
    first.search().search("pikachu").await.unwrap();
    assert_eq!(first.search().toggle_partner().await, Some(true));
    drop(first);

    let second = boot(&path).await;
    assert!(second.partners().is_partner("Pikachu").await);
    let result = second.search().search("pikachu").await.unwrap().unwrap();
    assert!(result.is_partner);
}
