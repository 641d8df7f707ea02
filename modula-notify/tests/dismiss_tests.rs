// Behavioral tests for the notifications dismiss client

use modula_notify::{DismissError, DismissMutation, MutationStatus, NotificationsClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_server_with(status: u16, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/modula-api/v1/notifications"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_dismiss_succeeds_on_204() {
    let server = mock_server_with(204, 1).await;

    let client = NotificationsClient::new(server.uri());
    let response = client.dismiss().await.unwrap();
    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn test_dismiss_succeeds_on_200() {
    let server = mock_server_with(200, 1).await;

    let client = NotificationsClient::new(server.uri());
    let response = client.dismiss().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_dismiss_surfaces_client_error_without_retry() {
    // expect(1) fails the test on teardown if the client retries.
    let server = mock_server_with(404, 1).await;

    let client = NotificationsClient::new(server.uri());
    let err = client.dismiss().await.unwrap_err();
    match err {
        DismissError::Status { status } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dismiss_surfaces_server_error_without_retry() {
    let server = mock_server_with(500, 1).await;

    let client = NotificationsClient::new(server.uri());
    let err = client.dismiss().await.unwrap_err();
    match err {
        DismissError::Status { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dismiss_surfaces_transport_failure() {
    // Nothing is listening here.
    let client = NotificationsClient::new("http://127.0.0.1:9");
    let err = client.dismiss().await.unwrap_err();
    assert!(matches!(err, DismissError::Transport(_)));
}

#[tokio::test]
async fn test_overlapping_dismissals_are_independent_requests() {
    let server = mock_server_with(204, 2).await;

    let client = NotificationsClient::new(server.uri());
    let (a, b) = tokio::join!(client.dismiss(), client.dismiss());
    assert!(a.is_ok());
    assert!(b.is_ok());
}

#[tokio::test]
async fn test_mutation_settles_success() {
    let server = mock_server_with(204, 1).await;

    let mut mutation = DismissMutation::new(NotificationsClient::new(server.uri()));
    assert_eq!(mutation.status(), MutationStatus::Idle);

    let status = mutation.dismiss().await.unwrap();
    assert_eq!(status.as_u16(), 204);
    assert_eq!(mutation.status(), MutationStatus::Success);

    mutation.reset();
    assert_eq!(mutation.status(), MutationStatus::Idle);
}

#[tokio::test]
async fn test_mutation_settles_error() {
    let server = mock_server_with(500, 1).await;

    let mut mutation = DismissMutation::new(NotificationsClient::new(server.uri()));
    assert!(mutation.dismiss().await.is_err());
    assert_eq!(mutation.status(), MutationStatus::Error);
}
