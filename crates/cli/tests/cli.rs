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


//! End-to-end tests for the CLI against a mock exchange server.

use std::{net::SocketAddr, time::Duration};

use axum::{
    Router,
    extract::{Path, Query},
    response::Json,
    routing::get,
};
use clap::Parser;
use kestrel_cli::{execute, opt::KestrelCli};
use rstest::rstest;
use serde_json::{Value, json};

async fn handle_bybit_tickers(Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    assert!(query.contains(&("category".to_string(), "spot".to_string())));
    Json(json!({
        "retCode": 0,
        "retMsg": "OK",
        "result": {
            "category": "spot",
            "list": [{
                "symbol": "BTCUSDT",
                "lastPrice": "43000.5",
                "bid1Price": "43000.1",
                "ask1Price": "43000.9"
            }]
        },
        "time": 1_700_000_000_000_u64
    }))
}

async fn handle_bitfinex_ticker(Path(symbol): Path<String>) -> Json<Value> {
    assert_eq!(symbol, "tBTCUSD");
    Json(json!([
        36_000.0, 10.5, 36_001.0, 8.25, 120.0, 0.0033, 36_000.5, 1500.0, 36_500.0, 35_500.0
    ]))
}

async fn handle_ftx_markets() -> Json<Value> {
    Json(json!({
        "success": true,
        "result": [
            {
                "name": "XRP/USD",
                "type": "spot",
                "enabled": true,
                "bid": 0.4999,
                "ask": 0.5001,
                "last": 0.5,
                "priceIncrement": 0.0001,
                "sizeIncrement": 1.0
            },
            {
                "name": "OLD/USD",
                "type": "spot",
                "enabled": false,
                "priceIncrement": 0.0001,
                "sizeIncrement": 1.0
            }
        ]
    }))
}

async fn handle_binance_time() -> Json<Value> {
    Json(json!({"serverTime": 1_700_000_040_000_i64}))
}

async fn start_mock_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new()
        .route("/v5/market/tickers", get(handle_bybit_tickers))
        .route("/v2/ticker/{symbol}", get(handle_bitfinex_ticker))
        .route("/api/markets", get(handle_ftx_markets))
        .route("/api/v3/time", get(handle_binance_time));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

fn parse(addr: SocketAddr, args: &[&str]) -> KestrelCli {
    let base_url = format!("http://{addr}");
    let mut argv = vec!["kestrel", "--base-url", base_url.as_str(), "--timeout-secs", "5"];
    argv.extend_from_slice(args);
    KestrelCli::try_parse_from(argv).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_bybit_tickers_table() {
    let addr = start_mock_server().await;

    let output = execute(parse(
        addr,
        &["bybit", "tickers", "--category", "spot"],
    ))
    .await
    .unwrap();

    assert!(output.contains("BTCUSDT"));
    assert!(output.contains("43000.5"));
    assert!(output.contains("43000.9"));
}

#[rstest]
#[tokio::test]
async fn test_bitfinex_ticker_json() {
    let addr = start_mock_server().await;

    let output = execute(parse(
        addr,
        &["--json", "bitfinex", "ticker", "--symbol", "tBTCUSD"],
    ))
    .await
    .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["last_price"], json!(36_000.5));
    assert_eq!(value["bid"], json!(36_000.0));
}

#[rstest]
#[tokio::test]
async fn test_ftx_markets_hides_disabled() {
    let addr = start_mock_server().await;

    let output = execute(parse(addr, &["ftx", "markets"])).await.unwrap();

    assert!(output.contains("XRP/USD"));
    assert!(output.contains("0.5001"));
    assert!(!output.contains("OLD/USD"));
}

#[rstest]
#[tokio::test]
async fn test_binance_server_time_formats_utc() {
    let addr = start_mock_server().await;

    let output = execute(parse(addr, &["binance", "server-time"])).await.unwrap();

    assert_eq!(output, "2023-11-14 22:14");
}

#[rstest]
#[tokio::test]
async fn test_binance_account_without_credentials_fails() {
    let addr = start_mock_server().await;

    let result = execute(parse(addr, &["binance", "account"])).await;

    assert!(result.is_err());
}
