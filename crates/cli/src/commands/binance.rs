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


use kestrel_binance::{
    config::BinanceHttpConfig,
    http::{
        client::BinanceHttpClient,
        models::BinanceIsolatedMarginData,
        parse::{format_klines, format_timestamp_ms, parse_date_ms},
        query::BinanceKlinesParams,
    },
};
use serde::Serialize;

use super::Context;
use crate::{
    display::{BalanceRow, CandleRow, OrderRow, render_table},
    opt::{BinanceCommand, BinanceOpt},
};

#[derive(Debug, Serialize, tabled::Tabled)]
struct MarginRateRow {
    symbol: String,
    coin: String,
    #[tabled(rename = "daily interest")]
    daily_interest: String,
    #[tabled(rename = "borrow limit")]
    borrow_limit: String,
}

/// Runs a Binance command and returns its rendered output.
pub async fn run(ctx: &Context, opt: BinanceOpt) -> anyhow::Result<String> {
    let config = BinanceHttpConfig {
        testnet: opt.testnet,
        rest: ctx.rest.clone(),
        ..BinanceHttpConfig::default()
    };
    let client = BinanceHttpClient::new(&config)?;

    match opt.command {
        BinanceCommand::ServerTime => {
            let time = client.http_get_server_time().await?;
            ctx.render(&time, |t| {
                format_timestamp_ms(t.server_time).unwrap_or_else(|| t.server_time.to_string())
            })
        }
        BinanceCommand::Klines {
            symbol,
            interval,
            start,
            end,
            limit,
            all,
        } => {
            let params = BinanceKlinesParams {
                symbol,
                interval,
                start_time: Some(parse_date_ms(&start)?),
                end_time: end.as_deref().map(parse_date_ms).transpose()?,
                limit,
            };
            let klines = if all {
                client.http_get_klines_all(&params, ctx.max_pages).await?
            } else {
                client.http_get_klines(&params).await?
            };
            let formatted = format_klines(&klines);
            ctx.render(&formatted, |rows| {
                render_table(rows.iter().map(|k| CandleRow {
                    open_time: k.open_time.clone(),
                    open: k.open_price.clone(),
                    high: k.high_price.clone(),
                    low: k.low_price.clone(),
                    close: k.close_price.clone(),
                    volume: k.volume.clone(),
                }))
            })
        }
        BinanceCommand::Account => {
            let account = client.http_get_account().await?;
            let balances: Vec<_> = account.non_zero_balances().cloned().collect();
            ctx.render(&balances, |balances| {
                render_table(balances.iter().map(|b| BalanceRow {
                    asset: b.asset.to_string(),
                    free: b.free.clone(),
                    total: balance_total(&b.free, &b.locked),
                }))
            })
        }
        BinanceCommand::OpenOrders { symbol } => {
            let orders = client.http_get_open_orders(symbol.as_deref()).await?;
            ctx.render(&orders, |orders| {
                render_table(orders.iter().map(|o| OrderRow {
                    id: o.order_id.to_string(),
                    symbol: o.symbol.to_string(),
                    side: o.side.to_string(),
                    order_type: o.order_type.to_string(),
                    price: o.price.clone(),
                    quantity: o.orig_qty.clone(),
                    filled: o.executed_qty.clone(),
                    status: o.status.to_string(),
                }))
            })
        }
        BinanceCommand::MarginData { symbol, vip_level } => {
            let data = client
                .http_get_isolated_margin_data(symbol.as_deref(), vip_level)
                .await?;
            let rows = margin_rate_rows(&data);
            ctx.render(&rows, |rows| render_table(rows))
        }
    }
}

/// Sums free and locked amounts, keeping the free amount when either fails to parse.
fn balance_total(free: &str, locked: &str) -> String {
    match (free.parse::<f64>(), locked.parse::<f64>()) {
        (Ok(free), Ok(locked)) => (free + locked).to_string(),
        _ => free.to_string(),
    }
}

fn margin_rate_rows(data: &[BinanceIsolatedMarginData]) -> Vec<MarginRateRow> {
    data.iter()
        .flat_map(|entry| {
            entry.data.iter().map(|rate| MarginRateRow {
                symbol: entry.symbol.to_string(),
                coin: rate.coin.to_string(),
                daily_interest: rate.daily_interest.clone(),
                borrow_limit: rate.borrow_limit.clone(),
            })
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
