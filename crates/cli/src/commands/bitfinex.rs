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


use kestrel_bitfinex::{config::BitfinexHttpConfig, http::client::BitfinexHttpClient};
use kestrel_rest::Params;
use serde_json::Value;

use super::Context;
use crate::{
    display::{BalanceRow, TickerRow, render_array_rows, render_table},
    opt::{BitfinexCommand, BitfinexOpt},
};

const BOOK_COLUMNS: &[(usize, &str)] = &[(0, "price"), (1, "count"), (2, "amount")];

const TRADE_COLUMNS: &[(usize, &str)] = &[
    (0, "id"),
    (1, "pair"),
    (2, "mts"),
    (3, "order id"),
    (4, "amount"),
    (5, "price"),
    (9, "fee"),
    (10, "fee currency"),
];

/// Runs a Bitfinex command and returns its rendered output.
pub async fn run(ctx: &Context, opt: BitfinexOpt) -> anyhow::Result<String> {
    // One override points both hosts at the same place.
    let config = BitfinexHttpConfig {
        public_base_url: ctx.rest.base_url.clone(),
        private_base_url: ctx.rest.base_url.clone(),
        rest: ctx.rest.clone(),
        ..BitfinexHttpConfig::default()
    };
    let client = BitfinexHttpClient::new(&config)?;

    match opt.command {
        BitfinexCommand::Ticker { symbol } => {
            let ticker = client.http_get_trading_ticker(&symbol).await?;
            ctx.render(&ticker, |t| {
                render_table([TickerRow {
                    symbol: symbol.clone(),
                    last_price: t.last_price.to_string(),
                    bid: t.bid.to_string(),
                    ask: t.ask.to_string(),
                }])
            })
        }
        BitfinexCommand::Book {
            symbol,
            precision,
            len,
        } => {
            let params = Params::new().with_opt("len", len);
            let book = as_rows(client.http_get_book(&symbol, precision, &params).await?);
            ctx.render(&book, |rows| render_array_rows(rows, BOOK_COLUMNS))
        }
        BitfinexCommand::Wallets => {
            let wallets = client.http_get_wallets().await?;
            ctx.render(&wallets, |wallets| {
                render_table(wallets.iter().map(|w| BalanceRow {
                    asset: format!("{} ({})", w.currency, w.wallet_type),
                    free: super::opt_f64(w.available_balance),
                    total: w.balance.to_string(),
                }))
            })
        }
        BitfinexCommand::Trades { symbol, limit, all } => {
            let params = Params::new().with_opt("limit", limit);
            let trades = if all {
                client
                    .http_get_trades_history_all(symbol.as_deref(), &params, ctx.max_pages)
                    .await?
            } else {
                as_rows(
                    client
                        .http_get_trades_history(symbol.as_deref(), &params)
                        .await?,
                )
            };
            tracing::debug!(count = trades.len(), "Fetched trades");
            ctx.render(&trades, |rows| render_array_rows(rows, TRADE_COLUMNS))
        }
    }
}

/// Bitfinex list endpoints return a bare array; anything else yields no rows.
fn as_rows(value: Value) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        _ => Vec::new(),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
