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


//! Demonstration binary for the Bybit HTTP client endpoints.
//!
//! Run with:
//! ```bash
//! cargo run -p kestrel-bybit --bin bybit-http
//! ```
//!
//! For authenticated endpoints, set environment variables (the demo targets testnet):
//! ```bash
//! export BYBIT_API_KEY=your_key
//! export BYBIT_API_SECRET=your_secret
//! cargo run -p kestrel-bybit --bin bybit-http
//! ```

use std::num::NonZeroU32;

use kestrel_bybit::{
    common::enums::{BybitEnvironment, BybitKlineInterval, BybitProductType},
    config::BybitHttpConfig,
    http::{client::BybitHttpClient, query::BybitKlinesParamsBuilder},
};
use kestrel_core::logging::init_logging;
use kestrel_rest::Params;

const MAX_PAGES: NonZeroU32 = NonZeroU32::new(5).unwrap();

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(Some("debug"))?;

    println!("=== Bybit HTTP Client Demo ===\n");

    let client = BybitHttpClient::new(&BybitHttpConfig::default())?;
    public_endpoints(&client).await?;

    let testnet = BybitHttpConfig {
        environment: BybitEnvironment::Testnet,
        ..BybitHttpConfig::default()
    };
    let client = BybitHttpClient::new(&testnet)?;
    if client.has_credential() {
        println!("\n=== Authenticated Endpoints ({}) ===", client.base_url());
        authenticated_endpoints(&client).await?;
    } else {
        println!(
            "\n[SKIP] Skipping authenticated endpoints (set BYBIT_API_KEY and BYBIT_API_SECRET to test)"
        );
    }

    Ok(())
}

async fn public_endpoints(client: &BybitHttpClient) -> anyhow::Result<()> {
    println!("1. GET /v5/market/time");
    let response = client.http_get_server_time().await?;
    println!("   [OK] Server time: {} (seconds)", response.result.time_second);

    println!("\n2. GET /v5/market/tickers");
    let price = client
        .http_get_last_price(BybitProductType::Linear, "BTCUSDT")
        .await?;
    println!("   [OK] BTCUSDT last price: {price}");

    println!("\n3. GET /v5/market/kline");
    let params = BybitKlinesParamsBuilder::default()
        .category(BybitProductType::Linear)
        .symbol("BTCUSDT")
        .interval(BybitKlineInterval::Minute1)
        .limit(5u32)
        .build()?;
    let response = client.http_get_klines(&params).await?;
    if let Some(first) = response.result.list.first() {
        println!(
            "   [OK] First kline: O={}, H={}, L={}, C={}",
            first.open, first.high, first.low, first.close
        );
    }

    println!("\n4. GET /v5/market/instruments-info (all pages, linear)");
    let params = Params::new()
        .with("category", "linear")
        .with("limit", 500);
    let instruments = client
        .http_get_instruments_info_all(&params, MAX_PAGES)
        .await?;
    println!("   [OK] Found {} instruments", instruments.len());

    Ok(())
}

async fn authenticated_endpoints(client: &BybitHttpClient) -> anyhow::Result<()> {
    println!("\n1. GET /v5/account/wallet-balance");
    let params = Params::new().with("accountType", "UNIFIED");
    let response = client.http_get_wallet_balance(&params).await?;
    println!("   [OK] {}", response["result"]);

    println!("\n2. GET /v5/order/realtime (all pages)");
    let params = Params::new().with("category", "linear").with("settleCoin", "USDT");
    let orders = client
        .http_get_open_orders_all(&params, MAX_PAGES)
        .await?;
    println!("   [OK] Found {} open orders", orders.len());

    Ok(())
}
