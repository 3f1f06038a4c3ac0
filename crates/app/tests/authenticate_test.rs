//! End-to-end tests for authenticating through the SOAP client
//!
//! These tests wire settings, the SOAP client factory and the JIRA adapter
//! together the way the binary does, against a mock JIRA server.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use jira_auth_application::{
    ApplicationError, AuthAdapter, JiraAuthAdapter, RemoteClientError, RemoteFault,
};
use jira_auth_domain::AuthResult;
use jira_auth_infrastructure::SoapJiraClientFactory;
use jira_auth_infrastructure::settings::load_settings_from;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOAP_PATH: &str = "/rpc/soap/jirasoapservice-v2";

fn envelope(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><soapenv:Body>{inner}</soapenv:Body></soapenv:Envelope>"#
    )
}

fn login_return(token: &str) -> String {
    envelope(&format!(
        "<ns1:loginResponse><loginReturn>{token}</loginReturn></ns1:loginResponse>"
    ))
}

fn fault(message: &str) -> String {
    envelope(&format!(
        "<soapenv:Fault><faultcode>soapenv:Server.userException</faultcode><faultstring>{message}</faultstring></soapenv:Fault>"
    ))
}

fn adapter_for(server: &MockServer) -> JiraAuthAdapter<SoapJiraClientFactory> {
    let settings =
        load_settings_from(None, Some(server.uri().as_str()), Some(Default::default())).expect("settings");
    let factory = SoapJiraClientFactory::new(&settings).expect("factory");

    let mut adapter = JiraAuthAdapter::new(settings.endpoint, factory);
    adapter.set_username("alice".to_string());
    adapter.set_credential("s3cret".to_string());
    adapter
}

#[tokio::test]
async fn test_successful_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SOAP_PATH))
        .and(body_string_contains("<in0 xsi:type=\"xsd:string\">alice</in0>"))
        .and(body_string_contains("<in1 xsi:type=\"xsd:string\">s3cret</in1>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_return("tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let identity = adapter_for(&server).authenticate().await.unwrap();

    assert_eq!(identity.result(), AuthResult::AuthSuccess);
    assert_eq!(identity.username(), "alice");
    assert_eq!(identity.token(), Some("tok-1"));
}

#[tokio::test]
async fn test_empty_token_is_unknown_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_return("")))
        .mount(&server)
        .await;

    let identity = adapter_for(&server).authenticate().await.unwrap();

    assert_eq!(identity.result(), AuthResult::IdentityUnknown);
    assert_eq!(identity.token(), Some(""));
}

#[tokio::test]
async fn test_invalid_credentials_fault_is_unknown_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(fault(
            "com.atlassian.jira.rpc.exception.RemoteAuthenticationException: invalid username or password.",
        )))
        .mount(&server)
        .await;

    let identity = adapter_for(&server).authenticate().await.unwrap();

    assert_eq!(identity.result(), AuthResult::IdentityUnknown);
    assert_eq!(identity.token(), None);
}

#[tokio::test]
async fn test_other_fault_propagates() {
    let server = MockServer::start().await;
    let message = "com.atlassian.jira.rpc.exception.RemoteAuthenticationException: Some other reason.";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(fault(message)))
        .mount(&server)
        .await;

    let err = adapter_for(&server).authenticate().await.unwrap_err();

    match err {
        ApplicationError::Remote(RemoteClientError::Fault(fault)) => {
            assert_eq!(
                fault,
                RemoteFault::new(message).with_code("soapenv:Server.userException")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_username_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_return("tok")))
        .expect(0)
        .mount(&server)
        .await;

    let mut adapter = adapter_for(&server);
    adapter.set_username(String::new());

    let err = adapter.authenticate().await.unwrap_err();

    assert!(err.is_invalid_input());
}
