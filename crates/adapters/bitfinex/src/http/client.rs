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


//! Bitfinex v2 HTTP client.
//!
//! Authenticated endpoints are all `POST` requests whose JSON body is part of the signature.
//! Array-shaped responses are returned as [`Value`] unless a typed model exists.

use std::{collections::HashSet, num::NonZeroU32, sync::Arc};

use kestrel_rest::{
    EmptyBodyPolicy, Page, Params, RequestSpec, RestClient, RestError, fetch_all_pages,
};
use serde_json::Value;

use super::{
    endpoints::{
        ORDER_CANCEL, ORDER_SUBMIT, ORDER_UPDATE, POSITIONS, POSITIONS_HISTORY, WALLETS,
        WALLETS_HISTORY, active_orders_path, book_path, orders_history_path, ticker_path,
        trades_history_path,
    },
    models::{BitfinexTradingTicker, BitfinexWallet},
};
use crate::{
    common::{
        consts::{
            BITFINEX_HISTORY_PAGE_LIMIT, BITFINEX_ORDER_MTS_INDEX, BITFINEX_PRIVATE_HTTP_URL,
            BITFINEX_PUBLIC_HTTP_URL, BITFINEX_TRADE_MTS_INDEX,
        },
        enums::{BitfinexBookPrecision, BitfinexOrderType},
        signer::{BitfinexSigner, BitfinexValidator},
    },
    config::BitfinexHttpConfig,
};

/// Provides a HTTP client for connecting to the [Bitfinex](https://bitfinex.com) REST API.
#[derive(Clone, Debug)]
pub struct BitfinexHttpClient {
    public: Arc<RestClient>,
    private: Arc<RestClient>,
}

impl BitfinexHttpClient {
    /// Creates a new [`BitfinexHttpClient`] from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if either underlying HTTP client cannot be created.
    pub fn new(config: &BitfinexHttpConfig) -> Result<Self, RestError> {
        let signer = Arc::new(BitfinexSigner);
        let validator = Arc::new(BitfinexValidator);

        let public = RestClient::from_config(
            &config.public_rest_config(),
            BITFINEX_PUBLIC_HTTP_URL,
            None,
            signer.clone(),
            validator.clone(),
        )?;
        let private = RestClient::from_config(
            &config.private_rest_config(),
            BITFINEX_PRIVATE_HTTP_URL,
            config.credential(),
            signer,
            validator,
        )?;

        Ok(Self {
            public: Arc::new(public),
            private: Arc::new(private),
        })
    }

    /// Returns true if the client can call authenticated endpoints.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.private.has_credential()
    }

    /// Returns the public host base URL.
    #[must_use]
    pub fn public_base_url(&self) -> &str {
        self.public.base_url()
    }

    /// Returns the authenticated host base URL.
    #[must_use]
    pub fn private_base_url(&self) -> &str {
        self.private.base_url()
    }

    async fn post(&self, path: impl Into<String>, params: Params) -> Result<Value, RestError> {
        self.private
            .send(RequestSpec::post(path, params).authenticated())
            .await
    }

    // =========================================================================
    // Public
    // =========================================================================

    /// Fetches the ticker for a trading (`tBTCUSD`) or funding (`fUSD`) symbol.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-public-ticker>
    pub async fn http_get_ticker(&self, symbol: &str) -> Result<Value, RestError> {
        self.public
            .send(RequestSpec::get(ticker_path(symbol), Params::new()))
            .await
    }

    /// Fetches the ticker for a trading pair as a typed row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or `symbol` is not a trading pair.
    pub async fn http_get_trading_ticker(
        &self,
        symbol: &str,
    ) -> Result<BitfinexTradingTicker, RestError> {
        self.public
            .send_json(RequestSpec::get(ticker_path(symbol), Params::new()))
            .await
    }

    /// Fetches the order book at the given precision; `params` may carry `len`.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-public-book>
    pub async fn http_get_book(
        &self,
        symbol: &str,
        precision: BitfinexBookPrecision,
        params: &Params,
    ) -> Result<Value, RestError> {
        let path = book_path(symbol, precision.as_ref());
        self.public
            .send(RequestSpec::get(path, params.clone()))
            .await
    }

    // =========================================================================
    // Wallets
    // =========================================================================

    /// Fetches all wallet balances.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-wallets>
    pub async fn http_get_wallets(&self) -> Result<Vec<BitfinexWallet>, RestError> {
        self.private
            .send_json(RequestSpec::post(WALLETS, Params::new()).authenticated())
            .await
    }

    /// Fetches wallet balances at a point in time (`end`, `currency`).
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-wallets-hist>
    pub async fn http_get_wallet_history(&self, params: &Params) -> Result<Value, RestError> {
        self.post(WALLETS_HISTORY, params.clone()).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Fetches active orders, optionally for one symbol.
    ///
    /// The request is sent without a body, matching what the exchange signs.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-retrieve-orders>
    pub async fn http_get_active_orders(&self, symbol: Option<&str>) -> Result<Value, RestError> {
        let spec = RequestSpec::post(active_orders_path(symbol), Params::new())
            .authenticated()
            .with_empty_body(EmptyBodyPolicy::Omit);
        self.private.send(spec).await
    }

    /// Submits an order.
    ///
    /// `amount` is positive to buy and negative to sell. `extra` is appended after the required
    /// fields (`flags`, `cid`, `lev`, ...).
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-submit-order>
    pub async fn http_submit_order(
        &self,
        order_type: BitfinexOrderType,
        symbol: &str,
        amount: &str,
        price: Option<&str>,
        extra: &Params,
    ) -> Result<Value, RestError> {
        let mut params = Params::new()
            .with("type", order_type.to_string())
            .with("symbol", symbol)
            .with_opt("price", price)
            .with("amount", amount);
        params.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.post(ORDER_SUBMIT, params).await
    }

    /// Updates an existing order.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-update-order>
    pub async fn http_update_order(
        &self,
        order_id: u64,
        params: &Params,
    ) -> Result<Value, RestError> {
        let mut body = Params::new().with("id", order_id);
        body.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.post(ORDER_UPDATE, body).await
    }

    /// Cancels an order by `id` or by `cid` and `cid_date`.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-cancel-order>
    pub async fn http_cancel_order(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ORDER_CANCEL, params.clone()).await
    }

    /// Fetches closed orders, newest first (`start`, `end`, `limit`, `id`).
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-orders-history>
    pub async fn http_get_orders_history(
        &self,
        symbol: Option<&str>,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.post(orders_history_path(symbol), params.clone()).await
    }

    /// Walks order history backwards in time across up to `max_pages` pages.
    pub async fn http_get_orders_history_all(
        &self,
        symbol: Option<&str>,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.history_all(
            &orders_history_path(symbol),
            params,
            BITFINEX_ORDER_MTS_INDEX,
            max_pages,
        )
        .await
    }

    // =========================================================================
    // Trades and positions
    // =========================================================================

    /// Fetches executed trades, newest first.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-trades>
    pub async fn http_get_trades_history(
        &self,
        symbol: Option<&str>,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.post(trades_history_path(symbol), params.clone()).await
    }

    /// Walks trade history backwards in time across up to `max_pages` pages.
    pub async fn http_get_trades_history_all(
        &self,
        symbol: Option<&str>,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.history_all(
            &trades_history_path(symbol),
            params,
            BITFINEX_TRADE_MTS_INDEX,
            max_pages,
        )
        .await
    }

    /// Fetches active positions.
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-positions>
    pub async fn http_get_active_positions(&self) -> Result<Value, RestError> {
        self.post(POSITIONS, Params::new()).await
    }

    /// Fetches closed positions (`start`, `end`, `limit`).
    ///
    /// # References
    ///
    /// - <https://docs.bitfinex.com/reference/rest-auth-positions-hist>
    pub async fn http_get_positions_history(&self, params: &Params) -> Result<Value, RestError> {
        self.post(POSITIONS_HISTORY, params.clone()).await
    }

    async fn history_all(
        &self,
        path: &str,
        params: &Params,
        mts_index: usize,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        let mut base = params.clone();
        let limit = match base.get_u64("limit") {
            Some(limit) => limit,
            None => {
                base.set("limit", BITFINEX_HISTORY_PAGE_LIMIT);
                BITFINEX_HISTORY_PAGE_LIMIT
            }
        };
        let initial_end = base.get_u64("end");
        tracing::debug!(path, limit, ?initial_end, "Walking history");
        let private = &self.private;
        let base = &base;

        let rows = fetch_all_pages(
            move |end: Option<u64>| {
                let mut body = base.clone();
                if let Some(end) = end {
                    body.set("end", end);
                }
                let spec = RequestSpec::post(path, body).authenticated();
                async move { history_page(private.send(spec).await?, mts_index, limit) }
            },
            initial_end,
            max_pages,
        )
        .await?;
        Ok(dedup_rows(rows))
    }
}

/// Splits a newest-first history page into its rows and the `end` cursor for the next page.
///
/// A page shorter than `limit` is the last one. Otherwise the next page ends at the oldest
/// timestamp seen. `end` is inclusive, so rows sharing that millisecond are fetched again and
/// dropped by [`dedup_rows`].
fn history_page(body: Value, mts_index: usize, limit: u64) -> Result<Page<Value, u64>, RestError> {
    let Value::Array(rows) = body else {
        return Err(RestError::Serialization(format!(
            "expected an array of history rows, was {body}"
        )));
    };

    if (rows.len() as u64) < limit {
        return Ok(Page::last(rows));
    }

    let next_end = rows
        .iter()
        .filter_map(|row| row.get(mts_index).and_then(Value::as_u64))
        .min();
    Ok(Page::new(rows, next_end))
}

/// Keeps the first occurrence of each row id (index 0), preserving order.
///
/// Rows without a numeric id are kept as they are.
fn dedup_rows(mut rows: Vec<Value>) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.retain(|row| row.get(0).and_then(Value::as_u64).is_none_or(|id| seen.insert(id)));
    rows
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_history_page_short_page_is_last() {
        let page = history_page(json!([[1, 0, 0, "tBTCUSD", 1000]]), 4, 2).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_cursor, None);
    }

    #[rstest]
    fn test_history_page_full_page_continues_from_oldest() {
        let page = history_page(
            json!([[2, "tBTCUSD", 3000], [1, "tBTCUSD", 2000]]),
            BITFINEX_TRADE_MTS_INDEX,
            2,
        )
        .unwrap();
        assert_eq!(page.next_cursor, Some(2000));
    }

    #[rstest]
    fn test_dedup_rows_drops_repeated_ids() {
        let rows = vec![
            json!([4, "tBTCUSD", 4000]),
            json!([3, "tBTCUSD", 4000]),
            json!([3, "tBTCUSD", 4000]),
            json!(["no-id"]),
            json!([2, "tBTCUSD", 2000]),
        ];

        let ids: Vec<Value> = dedup_rows(rows).into_iter().map(|row| row[0].clone()).collect();

        assert_eq!(ids, vec![json!(4), json!(3), json!("no-id"), json!(2)]);
    }

    #[rstest]
    fn test_history_page_rejects_object() {
        let result = history_page(json!({"oops": true}), 4, 2);
        assert!(matches!(result, Err(RestError::Serialization(_))));
    }
}
