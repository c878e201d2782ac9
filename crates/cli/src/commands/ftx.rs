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


use kestrel_ftx::{
    config::FtxHttpConfig,
    http::{client::FtxHttpClient, models::FtxOrder, query::FtxOrderHistoryParams},
};

use super::{Context, opt_f64};
use crate::{
    display::{BalanceRow, OrderRow, TickerRow, render_table},
    opt::{FtxCommand, FtxOpt},
};

/// Runs an FTX command and returns its rendered output.
pub async fn run(ctx: &Context, opt: FtxOpt) -> anyhow::Result<String> {
    let config = FtxHttpConfig {
        subaccount: opt.subaccount,
        rest: ctx.rest.clone(),
        ..FtxHttpConfig::default()
    };
    let client = FtxHttpClient::new(&config)?;

    match opt.command {
        FtxCommand::Markets => {
            let markets = client.http_get_markets().await?;
            ctx.render(&markets, |markets| {
                render_table(markets.iter().filter(|m| m.enabled).map(|m| TickerRow {
                    symbol: m.name.to_string(),
                    last_price: opt_f64(m.last),
                    bid: opt_f64(m.bid),
                    ask: opt_f64(m.ask),
                }))
            })
        }
        FtxCommand::Orderbook { market, depth } => {
            let book = client.http_get_orderbook(&market, Some(depth)).await?;
            ctx.render(&book, |book| {
                render_table([TickerRow {
                    symbol: market.clone(),
                    last_price: String::new(),
                    bid: opt_f64(book.best_bid()),
                    ask: opt_f64(book.best_ask()),
                }])
            })
        }
        FtxCommand::Balances => {
            let balances = client.http_get_balances().await?;
            ctx.render(&balances, |balances| {
                render_table(balances.iter().map(|b| BalanceRow {
                    asset: b.coin.to_string(),
                    free: b.free.to_string(),
                    total: b.total.to_string(),
                }))
            })
        }
        FtxCommand::OpenOrders { market } => {
            let orders = client.http_get_open_orders(market.as_deref()).await?;
            ctx.render(&orders, |orders| render_orders(orders))
        }
        FtxCommand::OrderHistory { market, all } => {
            let params = FtxOrderHistoryParams {
                market,
                ..FtxOrderHistoryParams::default()
            };
            let orders = if all {
                client
                    .http_get_order_history_all(&params, ctx.max_pages)
                    .await?
            } else {
                let response = client.http_get_order_history(&params).await?;
                if response.has_more_data {
                    tracing::info!("More history is available, pass --all to walk it");
                }
                response.result
            };
            ctx.render(&orders, |orders| render_orders(orders))
        }
    }
}

fn render_orders(orders: &[FtxOrder]) -> String {
    render_table(orders.iter().map(|o| OrderRow {
        id: o.id.to_string(),
        symbol: o.market.to_string(),
        side: o.side.to_string(),
        order_type: o.order_type.to_string(),
        price: opt_f64(o.price),
        quantity: o.size.to_string(),
        filled: o.filled_size.to_string(),
        status: o.status.to_string(),
    }))
}
