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


use kestrel_bybit::{
    config::BybitHttpConfig,
    http::{
        client::BybitHttpClient,
        models::BybitTickersResponse,
        query::BybitKlinesParams,
    },
};
use kestrel_rest::Params;
use serde_json::Value;

use super::Context;
use crate::{
    display::{CandleRow, TickerRow, render_object_rows, render_table},
    opt::{BybitCommand, BybitOpt},
};

const ORDER_COLUMNS: &[&str] = &[
    "orderId",
    "symbol",
    "side",
    "orderType",
    "price",
    "qty",
    "cumExecQty",
    "orderStatus",
];

const COIN_COLUMNS: &[&str] = &["coin", "walletBalance", "equity", "usdValue", "locked"];

/// Runs a Bybit command and returns its rendered output.
pub async fn run(ctx: &Context, opt: BybitOpt) -> anyhow::Result<String> {
    let config = BybitHttpConfig {
        environment: opt.environment,
        rest: ctx.rest.clone(),
        ..BybitHttpConfig::default()
    };
    let client = BybitHttpClient::new(&config)?;
    tracing::debug!(base_url = client.base_url(), command = ?opt.command, "Running Bybit command");

    match opt.command {
        BybitCommand::ServerTime => {
            let response = client.http_get_server_time().await?;
            ctx.render(&response.result, |time| time.time_second.clone())
        }
        BybitCommand::Tickers { category, symbol } => {
            let params = Params::new()
                .with("category", category.to_string())
                .with_opt("symbol", symbol);
            let value = client.http_get_tickers(&params).await?;
            let response: BybitTickersResponse = serde_json::from_value(value)?;
            ctx.render(&response.result.list, |tickers| {
                render_table(tickers.iter().map(|t| TickerRow {
                    symbol: t.symbol.to_string(),
                    last_price: t.last_price.clone(),
                    bid: t.bid1_price.clone(),
                    ask: t.ask1_price.clone(),
                }))
            })
        }
        BybitCommand::Klines {
            category,
            symbol,
            interval,
            limit,
        } => {
            let params = BybitKlinesParams {
                category,
                symbol,
                interval,
                limit,
                ..BybitKlinesParams::default()
            };
            let response = client.http_get_klines(&params).await?;
            ctx.render(&response.result.list, |klines| {
                render_table(klines.iter().map(|k| CandleRow {
                    open_time: k.start.clone(),
                    open: k.open.clone(),
                    high: k.high.clone(),
                    low: k.low.clone(),
                    close: k.close.clone(),
                    volume: k.volume.clone(),
                }))
            })
        }
        BybitCommand::OpenOrders {
            category,
            symbol,
            all,
        } => {
            let params = Params::new()
                .with("category", category.to_string())
                .with_opt("symbol", symbol);
            let orders = if all {
                client
                    .http_get_open_orders_all(&params, ctx.max_pages)
                    .await?
            } else {
                result_list(client.http_get_open_orders(&params).await?)
            };
            ctx.render(&orders, |orders| render_object_rows(orders, ORDER_COLUMNS))
        }
        BybitCommand::WalletBalance { account_type } => {
            let params = Params::new().with("accountType", account_type.to_string());
            let value = client.http_get_wallet_balance(&params).await?;
            let coins: Vec<Value> = result_list(value)
                .iter()
                .filter_map(|account| account.get("coin").and_then(Value::as_array))
                .flatten()
                .cloned()
                .collect();
            ctx.render(&coins, |coins| render_object_rows(coins, COIN_COLUMNS))
        }
    }
}

/// Extracts `result.list` from a Bybit envelope, empty when absent.
fn result_list(mut value: Value) -> Vec<Value> {
    match value.pointer_mut("/result/list").map(Value::take) {
        Some(Value::Array(list)) => list,
        _ => Vec::new(),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
