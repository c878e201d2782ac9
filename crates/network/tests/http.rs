// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Integration tests for the HTTP transport using a mock server.

use std::{collections::HashMap, net::SocketAddr, time::Duration};

use axum::{
    Router,
    body::Bytes,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use kestrel_network::http::{HttpClient, HttpClientError, Method};
use rstest::rstest;
use serde_json::json;

async fn handle_echo_headers(headers: HeaderMap) -> Response {
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let api_key = headers
        .get("x-test-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({ "userAgent": user_agent, "apiKey": api_key })).into_response()
}

async fn handle_echo_body(body: Bytes) -> Response {
    (StatusCode::OK, body).into_response()
}

async fn handle_server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
}

async fn handle_slow() -> Response {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({})).into_response()
}

async fn start_test_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new()
        .route("/headers", get(handle_echo_headers))
        .route("/echo", post(handle_echo_body))
        .route("/error", get(handle_server_error))
        .route("/slow", get(handle_slow));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

#[rstest]
#[tokio::test]
async fn test_default_and_request_headers_sent() {
    let addr = start_test_server().await;
    let client = HttpClient::new(
        HashMap::from([("user-agent".to_string(), "kestrel-test".to_string())]),
        Some(5),
    )
    .unwrap();

    let response = client
        .request(
            Method::GET,
            &format!("http://{addr}/headers"),
            Some(HashMap::from([("x-test-key".to_string(), "abc".to_string())])),
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["userAgent"], "kestrel-test");
    assert_eq!(body["apiKey"], "abc");
}

#[rstest]
#[tokio::test]
async fn test_body_sent_verbatim() {
    let addr = start_test_server().await;
    let client = HttpClient::new(HashMap::new(), Some(5)).unwrap();
    let payload = br#"{"b":1,"a":2}"#.to_vec();

    let response = client
        .request(
            Method::POST,
            &format!("http://{addr}/echo"),
            None,
            Some(payload.clone()),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.body.as_ref(), payload.as_slice());
}

#[rstest]
#[tokio::test]
async fn test_non_success_status_returned_as_response() {
    let addr = start_test_server().await;
    let client = HttpClient::new(HashMap::new(), Some(5)).unwrap();

    let response = client
        .request(Method::GET, &format!("http://{addr}/error"), None, None, None)
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.status.as_u16(), 500);
    assert_eq!(response.body.as_ref(), b"upstream exploded");
}

#[rstest]
#[tokio::test]
async fn test_request_timeout_override() {
    let addr = start_test_server().await;
    let client = HttpClient::new(HashMap::new(), Some(30)).unwrap();

    let result = client
        .request(Method::GET, &format!("http://{addr}/slow"), None, None, Some(1))
        .await;

    assert!(matches!(result, Err(HttpClientError::TimeoutError(_))));
}
