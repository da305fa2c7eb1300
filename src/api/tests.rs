//! Tests for the catalog API module

use super::*;
use crate::config::ConnectorConfig;
use crate::error::Error;
use crate::types::{LookupKey, ResourceKind};
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PokeApiClient {
    let config = ConnectorConfig {
        base_url: server.uri(),
        page_limit: 2,
        ..ConnectorConfig::default()
    };
    PokeApiClient::new(&config).unwrap()
}

// ============================================================================
// Type Tests
// ============================================================================

#[test_case("https://pokeapi.co/api/v2/type/12/", Some(12) ; "trailing slash")]
#[test_case("https://pokeapi.co/api/v2/berry/3", Some(3) ; "no trailing slash")]
#[test_case("https://pokeapi.co/api/v2/type/fire/", None ; "name segment")]
#[test_case("", None ; "empty url")]
fn test_named_resource_id(url: &str, expected: Option<i64>) {
    assert_eq!(NamedResource::new("x", url).id(), expected);
}

#[test]
fn test_resource_list_decode() {
    let body = json!({
        "count": 3,
        "next": "https://pokeapi.co/api/v2/type?offset=2&limit=2",
        "previous": null,
        "results": [
            {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"},
            {"name": "fighting", "url": "https://pokeapi.co/api/v2/type/2/"}
        ]
    })
    .to_string();

    let page = ResourceList::decode(&body).unwrap();
    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].name, "fighting");
    assert!(page.previous.is_none());
}

#[test]
fn test_detail_record_decode_type() {
    let body = json!({
        "id": 10,
        "name": "fire",
        "damage_relations": {"double_damage_to": [{"name": "grass", "url": "x"}]},
        "generation": {"name": "generation-i", "url": "y"},
        "move_damage_class": {"name": "special", "url": "z"}
    })
    .to_string();

    let record = DetailRecord::decode(ResourceKind::Type, &body).unwrap();
    assert_eq!(record.kind(), ResourceKind::Type);
    assert_eq!(record.name(), "fire");
    assert_eq!(record.id(), 10);

    let fields = record.to_object().unwrap();
    assert_eq!(fields["generation"]["name"], "generation-i");
    assert_eq!(fields["damage_relations"]["double_damage_to"][0]["name"], "grass");
    assert!(fields["moves"].is_null());
}

#[test]
fn test_detail_record_decode_pokemon() {
    let body = json!({
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "is_default": true,
        "order": 35,
        "weight": 60,
        "location_area_encounters": "https://pokeapi.co/api/v2/pokemon/25/encounters"
    })
    .to_string();

    let record = DetailRecord::decode(ResourceKind::Pokemon, &body).unwrap();
    match record {
        DetailRecord::Pokemon(p) => {
            assert_eq!(p.base_experience, Some(112));
            assert!(p.is_default);
            assert_eq!(p.weight, 60);
        }
        other => panic!("Expected pokemon, got {other:?}"),
    }
}

#[test]
fn test_detail_record_not_found_body_is_decode_error() {
    let err = DetailRecord::decode(ResourceKind::Berry, "Not Found").unwrap_err();
    assert!(err.is_decode());
    assert_eq!(
        err.to_string(),
        "Failed to decode response: expected value at line 1 column 1"
    );
}

#[test]
fn test_detail_record_missing_required_field() {
    let err = DetailRecord::decode(ResourceKind::Berry, r#"{"name": "cheri"}"#).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("missing field `id`"));
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_list_page_sends_offset_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/berry"))
        .and(query_param("offset", "4"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 5,
            "next": null,
            "previous": null,
            "results": [{"name": "pecha", "url": "https://pokeapi.co/api/v2/berry/5/"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.page_limit(), 2);

    let page = client.list_page(ResourceKind::Berry, 4).await.unwrap();
    assert_eq!(
        page.results,
        vec![NamedResource::new(
            "pecha",
            "https://pokeapi.co/api/v2/berry/5/"
        )]
    );
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_get_detail_by_name_and_id() {
    let mock_server = MockServer::start().await;

    let body = json!({"id": 1, "name": "normal"});
    Mock::given(method("GET"))
        .and(path("/type/normal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/type/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let by_name = client
        .get_detail(ResourceKind::Type, &LookupKey::name("normal"))
        .await
        .unwrap();
    let by_id = client
        .get_detail(ResourceKind::Type, &LookupKey::Id(1))
        .await
        .unwrap();

    assert_eq!(by_name, by_id);
    assert_eq!(by_name.name(), "normal");
}

#[tokio::test]
async fn test_get_detail_unknown_name_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/unknownx"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_detail(ResourceKind::Pokemon, &LookupKey::name("unknownx"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_get_detail_sends_name_as_one_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/berry/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "cheri"})))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_detail(ResourceKind::Type, &LookupKey::name("../berry/1"))
        .await
        .unwrap_err();
    assert!(err.is_decode());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/type/..%2Fberry%2F1");
}

#[test_case("" ; "empty")]
#[test_case(".." ; "parent segment")]
#[tokio::test]
async fn test_get_detail_rejects_unaddressable_key(name: &str) {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client
        .get_detail(ResourceKind::Type, &LookupKey::name(name))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
