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


//! Integration tests for the Bybit HTTP client using a mock server.

use std::{
    net::SocketAddr,
    num::NonZeroU32,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use kestrel_bybit::{
    common::enums::{BybitOrderSide, BybitOrderType, BybitProductType, BybitTimeInForce},
    config::BybitHttpConfig,
    http::{client::BybitHttpClient, query::BybitPlaceOrderParamsBuilder},
};
use kestrel_cryptography::{DigestAlgorithm, sign};
use kestrel_rest::{Params, RestClientConfig, RestError};
use rstest::rstest;
use serde_json::{Value, json};

const API_KEY: &str = "bybit_key";
const API_SECRET: &str = "bybit_secret";

#[derive(Clone, Default)]
struct TestServerState {
    page_requests: Arc<AtomicUsize>,
    stalled_requests: Arc<AtomicUsize>,
}

fn ok(result: Value) -> Response {
    Json(json!({
        "retCode": 0,
        "retMsg": "OK",
        "result": result,
        "retExtInfo": {},
        "time": 1_700_000_000_000_i64
    }))
    .into_response()
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Recomputes the signature and returns a 401 response when it does not match.
fn verify(headers: &HeaderMap, uri: &Uri, body: &str) -> Option<Response> {
    let unauthorized = |msg: &str| {
        Some((StatusCode::UNAUTHORIZED, Json(json!({"retCode": 10003, "retMsg": msg}))).into_response())
    };

    let (Some(key), Some(ts), Some(recv), Some(signature)) = (
        header(headers, "x-bapi-api-key"),
        header(headers, "x-bapi-timestamp"),
        header(headers, "x-bapi-recv-window"),
        header(headers, "x-bapi-sign"),
    ) else {
        return unauthorized("missing auth headers");
    };

    let payload = if body.is_empty() {
        uri.query().unwrap_or_default()
    } else {
        body
    };
    let expected = sign(
        API_SECRET.as_bytes(),
        format!("{ts}{key}{recv}{payload}").as_bytes(),
        DigestAlgorithm::Sha256,
    )
    .unwrap();

    if key != API_KEY || signature != expected {
        return unauthorized("invalid signature");
    }
    None
}

async fn handle_server_time() -> Response {
    ok(json!({"timeSecond": "1700000000", "timeNano": "1700000000000000000"}))
}

async fn handle_tickers(Query(query): Query<Vec<(String, String)>>) -> Response {
    let symbol = query
        .iter()
        .find(|(k, _)| k == "symbol")
        .map(|(_, v)| v.clone())
        .unwrap_or_default();
    ok(json!({
        "category": "linear",
        "list": [{"symbol": symbol, "lastPrice": "65000.5", "bid1Price": "65000", "ask1Price": "65001"}]
    }))
}

async fn handle_open_orders(
    State(state): State<TestServerState>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    if let Some(rejection) = verify(&headers, &uri, "") {
        return rejection;
    }
    state.page_requests.fetch_add(1, Ordering::SeqCst);

    let cursor = query
        .iter()
        .find(|(k, _)| k == "cursor")
        .map(|(_, v)| v.as_str());
    match cursor {
        None => ok(json!({
            "category": "linear",
            "list": [{"orderId": "1"}, {"orderId": "2"}],
            "nextPageCursor": "page2"
        })),
        Some("page2") => ok(json!({
            "category": "linear",
            "list": [],
            "nextPageCursor": "page3"
        })),
        Some("page3") => ok(json!({
            "category": "linear",
            "list": [{"orderId": "3"}],
            "nextPageCursor": ""
        })),
        Some(other) => ok(json!({"list": [], "nextPageCursor": other})),
    }
}

async fn handle_stalled(State(state): State<TestServerState>, headers: HeaderMap, uri: Uri) -> Response {
    if let Some(rejection) = verify(&headers, &uri, "") {
        return rejection;
    }
    state.stalled_requests.fetch_add(1, Ordering::SeqCst);
    ok(json!({"list": [{"execId": "e"}], "nextPageCursor": "stuck"}))
}

async fn handle_place_order(headers: HeaderMap, uri: Uri, body: String) -> Response {
    if let Some(rejection) = verify(&headers, &uri, &body) {
        return rejection;
    }
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["orderType"], "Limit");
    ok(json!({"orderId": "abc-123", "orderLinkId": order["orderLinkId"].clone()}))
}

async fn handle_positions_error(headers: HeaderMap, uri: Uri) -> Response {
    if let Some(rejection) = verify(&headers, &uri, "") {
        return rejection;
    }
    Json(json!({"retCode": 10001, "retMsg": "params error: category is required", "result": {}}))
        .into_response()
}

async fn start_test_server() -> (SocketAddr, TestServerState) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = TestServerState::default();
    let router = Router::new()
        .route("/v5/market/time", get(handle_server_time))
        .route("/v5/market/tickers", get(handle_tickers))
        .route("/v5/order/realtime", get(handle_open_orders))
        .route("/v5/execution/list", get(handle_stalled))
        .route("/v5/order/create", post(handle_place_order))
        .route("/v5/position/list", get(handle_positions_error))
        .with_state(state.clone());

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, state)
}

fn client(addr: SocketAddr, with_credentials: bool) -> BybitHttpClient {
    let (api_key, api_secret) = if with_credentials {
        (Some(API_KEY.to_string()), Some(API_SECRET.to_string()))
    } else {
        (Some(String::new()), Some(String::new()))
    };
    let config = BybitHttpConfig {
        api_key,
        api_secret,
        rest: RestClientConfig {
            base_url: Some(format!("http://{addr}")),
            timeout_secs: 5,
            retry_delay_initial_ms: 10,
            retry_delay_max_ms: 50,
            ..RestClientConfig::default()
        },
        ..BybitHttpConfig::default()
    };
    BybitHttpClient::new(&config).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_server_time_is_public() {
    let (addr, _) = start_test_server().await;
    let response = client(addr, false).http_get_server_time().await.unwrap();
    assert_eq!(response.ret_code, 0);
    assert_eq!(response.result.time_second, "1700000000");
}

#[rstest]
#[tokio::test]
async fn test_last_price_reads_first_ticker() {
    let (addr, _) = start_test_server().await;
    let price = client(addr, false)
        .http_get_last_price(BybitProductType::Linear, "BTCUSDT")
        .await
        .unwrap();
    assert!((price - 65_000.5).abs() < f64::EPSILON);
}

#[rstest]
#[tokio::test]
async fn test_open_orders_all_follows_cursor_through_empty_page() {
    let (addr, state) = start_test_server().await;
    let params = Params::new().with("category", "linear");

    let orders = client(addr, true)
        .http_get_open_orders_all(&params, NonZeroU32::new(10).unwrap())
        .await
        .unwrap();

    let ids: Vec<&str> = orders.iter().filter_map(|o| o["orderId"].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(state.page_requests.load(Ordering::SeqCst), 3);
}

#[rstest]
#[tokio::test]
async fn test_open_orders_all_respects_page_ceiling() {
    let (addr, state) = start_test_server().await;
    let params = Params::new().with("category", "linear");

    let orders = client(addr, true)
        .http_get_open_orders_all(&params, NonZeroU32::new(1).unwrap())
        .await
        .unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(state.page_requests.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_single_page_returns_envelope() {
    let (addr, _) = start_test_server().await;
    let params = Params::new().with("category", "linear");

    let response = client(addr, true)
        .http_get_open_orders(&params)
        .await
        .unwrap();

    assert_eq!(response["retCode"], 0);
    assert_eq!(response["result"]["nextPageCursor"], "page2");
}

#[rstest]
#[tokio::test]
async fn test_repeated_cursor_is_stalled_error() {
    let (addr, state) = start_test_server().await;
    let params = Params::new().with("category", "linear");

    let result = client(addr, true)
        .http_get_executions_all(&params, NonZeroU32::new(50).unwrap())
        .await;

    match result {
        Err(RestError::PaginationStalled {
            cursor,
            pages_fetched,
        }) => {
            assert_eq!(cursor, "stuck");
            assert_eq!(pages_fetched, 2);
        }
        other => panic!("expected stalled pagination, was {other:?}"),
    }
    assert_eq!(state.stalled_requests.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn test_place_order_signs_body() {
    let (addr, _) = start_test_server().await;
    let params = BybitPlaceOrderParamsBuilder::default()
        .category(BybitProductType::Linear)
        .symbol("BTCUSDT")
        .side(BybitOrderSide::Buy)
        .order_type(BybitOrderType::Limit)
        .qty("0.001")
        .price("60000")
        .time_in_force(BybitTimeInForce::Gtc)
        .order_link_id("link-1")
        .build()
        .unwrap();

    let response = client(addr, true).http_place_order(&params).await.unwrap();

    assert_eq!(response.result.order_id.unwrap().as_str(), "abc-123");
    assert_eq!(response.result.order_link_id.unwrap().as_str(), "link-1");
}

#[rstest]
#[tokio::test]
async fn test_ret_code_surfaces_as_business_error() {
    let (addr, _) = start_test_server().await;

    let result = client(addr, true).http_get_positions(&Params::new()).await;

    match result {
        Err(RestError::ExchangeBusiness { code, message }) => {
            assert_eq!(code, Some(10001));
            assert_eq!(message, "params error: category is required");
        }
        other => panic!("expected business error, was {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn test_private_endpoint_without_credentials_is_configuration_error() {
    let (addr, state) = start_test_server().await;

    let result = client(addr, false)
        .http_get_open_orders(&Params::new().with("category", "linear"))
        .await;

    assert!(matches!(result, Err(RestError::Configuration(_))));
    assert_eq!(state.page_requests.load(Ordering::SeqCst), 0);
}
