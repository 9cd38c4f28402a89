//! Integration tests for the serving and eventing handles against a mock
//! API server.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use func_cli::domain::TransportConfig;
use func_cli::infra::knative::{EventingClient, EventingHandle, ServingClient, ServingHandle};

const SERVICES: &str = "/apis/serving.knative.dev/v1/namespaces/ns1/services";
const TRIGGERS: &str = "/apis/eventing.knative.dev/v1beta1/namespaces/ns1/triggers";

fn transport(server: &MockServer, token: Option<&str>) -> TransportConfig {
    TransportConfig {
        server: server.uri(),
        token: token.map(ToString::to_string),
        ..TransportConfig::default()
    }
}

fn serving(server: &MockServer, token: Option<&str>) -> ServingHandle {
    let client = ServingClient::new_for_config(&transport(server, token)).expect("client");
    ServingHandle::new(client, "ns1")
}

fn eventing(server: &MockServer) -> EventingHandle {
    let client = EventingClient::new_for_config(&transport(server, None)).expect("client");
    EventingHandle::new(client, "ns1")
}

#[tokio::test]
async fn test_list_services_maps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVICES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "metadata": {"name": "hello", "namespace": "ns1"},
                    "status": {
                        "url": "http://hello.ns1.example.com",
                        "conditions": [{"type": "Ready", "status": "True"}]
                    }
                },
                {
                    "metadata": {"name": "pending"},
                    "status": {"conditions": [{"type": "Ready", "status": "Unknown"}]}
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = serving(&server, None).list_services().await.expect("listed");

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].name, "hello");
    assert_eq!(services[0].url.as_deref(), Some("http://hello.ns1.example.com"));
    assert!(services[0].ready);
    assert_eq!(services[1].namespace, "ns1");
    assert!(services[1].url.is_none());
    assert!(!services[1].ready);
}

#[tokio::test]
async fn test_namespace_with_path_characters_stays_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVICES.replace("ns1", "team-a")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"metadata": {"name": "team-a-fn"}}]
        })))
        .expect(0)
        .mount(&server)
        .await;

    let client = ServingClient::new_for_config(&transport(&server, None)).expect("client");
    let handle = ServingHandle::new(client, "team-a/services?x=");
    let services = handle.list_services().await.expect("listed");

    assert!(services.is_empty(), "escaped namespace: {services:?}");
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.path(),
        "/apis/serving.knative.dev/v1/namespaces/team-a%2Fservices%3Fx=/services"
    );
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVICES))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let services = serving(&server, Some("s3cret"))
        .list_services()
        .await
        .expect("listed");

    assert!(services.is_empty());
}

#[tokio::test]
async fn test_get_service_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVICES}/ghost")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = serving(&server, None).get_service("ghost").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Function 'ghost' not found in namespace 'ns1'."
    );
}

#[tokio::test]
async fn test_get_service_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVICES}/hello")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"name": "hello", "namespace": "ns1"},
            "status": {"url": "http://hello", "conditions": []}
        })))
        .mount(&server)
        .await;

    let service = serving(&server, None).get_service("hello").await.expect("found");

    assert_eq!(service.name, "hello");
    assert!(!service.ready);
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVICES))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = serving(&server, None).list_services().await.unwrap_err();

    assert!(
        format!("{err:#}").contains("cannot list services in namespace 'ns1'"),
        "got: {err:#}"
    );
}

#[tokio::test]
async fn test_list_triggers_maps_broker_and_subscriber() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRIGGERS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "metadata": {"name": "on-order"},
                    "spec": {
                        "broker": "orders",
                        "subscriber": {"ref": {"kind": "Service", "name": "hello"}}
                    },
                    "status": {"conditions": [{"type": "Ready", "status": "True"}]}
                },
                {
                    "metadata": {"name": "to-uri"},
                    "spec": {"subscriber": {"uri": "http://sink.example.com"}}
                }
            ]
        })))
        .mount(&server)
        .await;

    let triggers = eventing(&server).list_triggers().await.expect("listed");

    assert_eq!(triggers.len(), 2);
    assert_eq!(triggers[0].broker, "orders");
    assert_eq!(triggers[0].subscriber.as_deref(), Some("hello"));
    assert!(triggers[0].ready);
    assert_eq!(triggers[1].broker, "default");
    assert_eq!(triggers[1].subscriber.as_deref(), Some("http://sink.example.com"));
    assert_eq!(triggers[1].namespace, "ns1");
}
