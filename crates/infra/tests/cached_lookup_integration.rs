//! Full-stack lookup tests: `CachingBreedProvider` wrapping
//! `DogApiBreedProvider`, with the remote service played by wiremock.
//!
//! These assert on the number of requests the server actually received,
//! which is the externally observable form of the cache's memoization
//! and no-negative-caching behavior.

use dogdex_core::{BreedProvider, CachingBreedProvider};
use dogdex_domain::DogApiConfig;
use dogdex_infra::DogApiBreedProvider;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cached_provider(server: &MockServer) -> CachingBreedProvider<DogApiBreedProvider> {
    let config = DogApiConfig { base_url: server.uri(), ..DogApiConfig::default() };
    CachingBreedProvider::new(DogApiBreedProvider::new(&config).expect("provider"))
}

#[tokio::test]
async fn repeated_lookup_hits_the_server_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/terrier/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": ["affenpinscher"],
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = cached_provider(&server);

    let first = provider.sub_breeds("terrier").await.unwrap();
    assert_eq!(first, vec!["affenpinscher"]);
    assert_eq!(provider.calls_made(), 1);

    let second = provider.sub_breeds("terrier").await.unwrap();
    assert_eq!(second, vec!["affenpinscher"]);
    assert_eq!(provider.calls_made(), 1);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn not_found_breed_is_requested_again_every_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/bogus/list"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Breed not found (master breed does not exist)",
            "code": 404
        })))
        .expect(3)
        .mount(&server)
        .await;

    let provider = cached_provider(&server);

    for expected_calls in 1..=3 {
        let err = provider.sub_breeds("bogus").await.unwrap_err();
        assert!(err.is_breed_not_found("bogus"));
        assert_eq!(provider.calls_made(), expected_calls);
    }

    assert!(provider.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn distinct_breeds_are_fetched_and_cached_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/husky/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": [],
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/breed/pug/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": [],
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = cached_provider(&server);

    provider.sub_breeds("husky").await.unwrap();
    provider.sub_breeds("pug").await.unwrap();
    assert_eq!(provider.calls_made(), 2);

    // Both served from cache now
    provider.sub_breeds("husky").await.unwrap();
    provider.sub_breeds("pug").await.unwrap();
    assert_eq!(provider.calls_made(), 2);
    assert_eq!(provider.cached_breeds(), 2);
}

#[tokio::test]
async fn caching_provider_substitutes_for_the_plain_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/hound/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": ["afghan"],
            "status": "success"
        })))
        .mount(&server)
        .await;

    async fn lookup(provider: &dyn BreedProvider, breed: &str) -> Vec<String> {
        provider.sub_breeds(breed).await.unwrap()
    }

    let config = DogApiConfig { base_url: server.uri(), ..DogApiConfig::default() };
    let plain = DogApiBreedProvider::new(&config).expect("provider");
    let cached = cached_provider(&server);

    // Any caller of a BreedProvider accepts either implementation
    assert_eq!(lookup(&plain, "hound").await, vec!["afghan"]);
    assert_eq!(lookup(&cached, "hound").await, vec!["afghan"]);
}
