use httpmock::prelude::*;
use lead_relay::{
    AppConfig, DeliveryClient, DeliveryOutcome, HttpTransport, Lead, LeadError,
};

fn lead() -> Lead {
    Lead {
        nome: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        telefone: "(41) 99999-8888".to_string(),
        interesse: "Empreendimentos".to_string(),
        mensagem: "Gostaria de mais informações".to_string(),
    }
}

fn client_for(url: String) -> DeliveryClient<HttpTransport, AppConfig> {
    DeliveryClient::new(
        HttpTransport::new(),
        AppConfig {
            webhook_url: Some(url),
            whatsapp: None,
        },
    )
}

#[tokio::test]
async fn confirmed_success_makes_exactly_one_call() {
    let server = MockServer::start();

    let json_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/json")
            .json_body_partial(r#"{"nome": "Maria Silva", "email": "maria@example.com"}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true}));
    });

    let client = client_for(server.url("/exec"));
    let outcome = client.deliver(&lead()).await.unwrap();

    json_mock.assert();
    assert_eq!(outcome, DeliveryOutcome::Delivered);
}

#[tokio::test]
async fn reply_without_success_flag_is_delivered() {
    let server = MockServer::start();

    let json_mock = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"row": 42}));
    });

    let client = client_for(server.url("/exec"));
    let outcome = client.deliver(&lead()).await.unwrap();

    json_mock.assert();
    assert_eq!(outcome, DeliveryOutcome::Delivered);
}

#[tokio::test]
async fn explicit_success_false_is_rejected() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": false}));
    });

    let client = client_for(server.url("/exec"));
    let outcome = client.deliver(&lead()).await.unwrap();

    assert!(matches!(outcome, DeliveryOutcome::Rejected { .. }));
}

#[tokio::test]
async fn server_error_is_rejected_without_fallback() {
    let server = MockServer::start();

    let json_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/json");
        then.status(500);
    });

    let form_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/x-www-form-urlencoded");
        then.status(200);
    });

    let client = client_for(server.url("/exec"));
    let outcome = client.deliver(&lead()).await.unwrap();

    json_mock.assert();
    assert_eq!(form_mock.hits(), 0);
    assert_eq!(
        outcome,
        DeliveryOutcome::Rejected {
            reason: "webhook returned HTTP 500".to_string()
        }
    );
}

#[tokio::test]
async fn unreadable_reply_falls_back_to_form_post() {
    let server = MockServer::start();

    // 2xx with a body that is not JSON, the usual spreadsheet-script answer
    // when it redirects instead of replying properly.
    let json_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/json");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html>moved</html>");
    });

    let form_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("nome=Maria+Silva")
            .body_contains("telefone=%2841%29+99999-8888");
        then.status(200);
    });

    let client = client_for(server.url("/exec"));
    let outcome = client.deliver(&lead()).await.unwrap();

    json_mock.assert();
    form_mock.assert();
    assert_eq!(outcome, DeliveryOutcome::Unknown);
}

#[tokio::test]
async fn unreachable_endpoint_with_failing_fallback_surfaces_transport_error() {
    // Nothing is listening here: the primary path reports a blocked network
    // and the fallback dispatch then fails the same way.
    let client = client_for("http://127.0.0.1:9/exec".to_string());

    let err = client.deliver(&lead()).await.unwrap_err();

    assert!(matches!(err, LeadError::TransportError(_)));
}
